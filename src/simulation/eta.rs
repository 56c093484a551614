//! Time-to-service estimation
//!
//! Ranks candidate elevators during dispatch. The estimate walks the
//! itinerary stop by stop up to the planned insertion slot, charging one
//! tick per floor of travel plus one dwell tick per intermediate stop. It
//! is only ever compared across elevators; once later calls re-plan an
//! itinerary the number no longer tracks wall-clock arrival.

use super::itinerary::Itinerary;

/// Ticks for an elevator at `current_floor` to reach `target_floor` when a
/// new stop would be spliced in at `slot`.
///
/// A head insertion (empty itinerary included) is pure floor distance, so
/// the estimate is always at least `|current_floor - target_floor|` and
/// exactly that for an idle car.
pub fn ticks_to_slot(
    itinerary: &Itinerary,
    current_floor: i32,
    slot: usize,
    target_floor: i32,
) -> u32 {
    let stops = itinerary.stops();
    if slot == 0 || stops.is_empty() {
        return target_floor.abs_diff(current_floor);
    }

    // Travel to the first stop, then stop-by-stop to the one just before
    // the slot, with a dwell tick charged at each.
    let mut ticks = stops[0].floor.abs_diff(current_floor) + 1;
    for window in stops[..slot].windows(2) {
        ticks += window[1].floor.abs_diff(window[0].floor) + 1;
    }
    ticks + target_floor.abs_diff(stops[slot - 1].floor)
}
