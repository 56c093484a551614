//! Itinerary insertion-point planning
//!
//! SCAN-style placement: a call is folded into the elevator's current sweep
//! when its floor still lies ahead in the direction of travel, otherwise it
//! is deferred past one or two direction-reversal points to the next sweep
//! that matches the call's direction.

use super::itinerary::Itinerary;

/// Compute where to splice a stop for the call `origin -> dest`, searching
/// for the slot of `target` (the pickup's origin floor or the dropoff's
/// destination floor).
///
/// `current_floor` is where the elevator is right now; the itinerary's
/// monotonic-run structure relative to that position decides which sweep
/// the stop joins.
pub fn insertion_index(
    itinerary: &Itinerary,
    current_floor: i32,
    origin: i32,
    dest: i32,
    target: i32,
) -> usize {
    let stops = itinerary.stops();
    if stops.is_empty() {
        return 0;
    }

    let mut elevator_direction = stops[0].floor - current_floor;
    if elevator_direction == 0 {
        // Sitting exactly on the first stop: the run direction comes from
        // the second stop, or there is nowhere else to go.
        if stops.len() == 1 {
            return 1;
        }
        elevator_direction = stops[1].floor - stops[0].floor;
    }

    let call_direction = dest - origin;

    let heading_same_way = call_direction * elevator_direction > 0;
    let target_ahead = if elevator_direction > 0 {
        target >= current_floor
    } else {
        target <= current_floor
    };

    let (start, end) = if heading_same_way && target_ahead {
        // Serve within the current sweep.
        (0, itinerary.run_end(0, elevator_direction))
    } else if heading_same_way {
        // Same direction but already passed: skip the rest of this sweep
        // and the whole opposite sweep, land in the next matching one.
        let start = itinerary.run_end(0, elevator_direction);
        let start = itinerary.run_end(start, -elevator_direction);
        let end = itinerary.run_end(start, elevator_direction);
        (start, end)
    } else {
        // Opposite direction: the very next sweep matches the call.
        let start = itinerary.run_end(0, elevator_direction);
        let end = itinerary.run_end(start, -elevator_direction);
        (start, end)
    };

    scheduled_slot(itinerary, start, end, call_direction, target)
}

/// Compute where to splice the dropoff for a call whose pickup was just
/// inserted at `pickup_index`.
///
/// The dropoff is planned with its own floor as the search key, but a
/// dropoff can never precede its pickup: nobody alights before boarding,
/// and letting one through would drive the car's load negative. When the
/// independent search lands at or before the pickup, the dropoff instead
/// joins the pickup's own sweep, just behind it.
pub fn dropoff_index(
    itinerary: &Itinerary,
    current_floor: i32,
    origin: i32,
    dest: i32,
    pickup_index: usize,
) -> usize {
    let independent = insertion_index(itinerary, current_floor, origin, dest, dest);
    if independent > pickup_index {
        return independent;
    }
    let call_direction = dest - origin;
    let end = itinerary.run_end(pickup_index, call_direction);
    scheduled_slot(itinerary, pickup_index + 1, end, call_direction, dest)
}

/// First slot in `[start, end]` where `target` fits the run's ordering: on
/// an ascending search the first stop above the target, on a descending
/// search the first below it. Falls through to just past the run (or the
/// itinerary tail) when every stop in range is still on the near side.
fn scheduled_slot(
    itinerary: &Itinerary,
    start: usize,
    end: usize,
    call_direction: i32,
    target: i32,
) -> usize {
    let stops = itinerary.stops();
    let mut index = start;
    loop {
        if index >= stops.len() {
            return stops.len();
        }
        if end < stops.len() && index == end + 1 {
            return index;
        }
        let floor = stops[index].floor;
        if call_direction > 0 && target < floor {
            return index;
        }
        if call_direction < 0 && target > floor {
            return index;
        }
        index += 1;
    }
}
