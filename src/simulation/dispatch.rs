//! Call dispatching
//!
//! Picks the elevator that answers a call: partition the fleet by zone,
//! drop cars that are full or headed for maintenance, virtually schedule
//! the pickup on each survivor, and take the lowest time-to-service. Ties
//! go to the lowest fleet index.

use std::ops::Range;

use log::debug;

use super::elevator::SimElevator;
use super::eta::ticks_to_slot;
use super::itinerary::Stop;
use super::planner::{dropoff_index, insertion_index};
use super::request::Request;
use super::types::ZONE_BOUNDARY;

/// Fleet indices eligible for a call, by zone rule.
///
/// Cars 0-1 serve only floors at or below the boundary, 2-3 serve every
/// floor, 4-5 serve only floors above it. A call crossing the boundary is
/// restricted to the all-floor pair; one contained in a single zone may use
/// that zone's pair or the all-floor pair.
pub fn zone_candidates(origin: i32, dest: i32) -> Range<usize> {
    let origin_high = origin > ZONE_BOUNDARY;
    let dest_high = dest > ZONE_BOUNDARY;
    if origin_high != dest_high {
        2..4
    } else if origin_high {
        2..6
    } else {
        0..4
    }
}

/// Select the elevator to answer `request`, or `None` when every candidate
/// is excluded (full, or maintenance pending/active) and the call must wait
/// for a later tick.
pub fn select_elevator(fleet: &[SimElevator], request: &Request) -> Option<usize> {
    let mut best: Option<(u32, usize)> = None;

    for index in zone_candidates(request.origin, request.dest) {
        let elevator = &fleet[index];
        if !elevator.dispatch_eligible() {
            debug!("elevator {index} ineligible for {request:?}");
            continue;
        }
        let slot = insertion_index(
            &elevator.itinerary,
            elevator.current_floor,
            request.origin,
            request.dest,
            request.origin,
        );
        let eta = ticks_to_slot(
            &elevator.itinerary,
            elevator.current_floor,
            slot,
            request.origin,
        );
        debug!("elevator {index} could reach floor {} in {eta} ticks", request.origin);
        // Strict comparison keeps the lowest index on a tie.
        if best.map_or(true, |(best_eta, _)| eta < best_eta) {
            best = Some((eta, index));
        }
    }

    best.map(|(_, index)| index)
}

/// Splice the pickup and dropoff stops for `request` into `elevator`'s
/// itinerary. The pickup goes in first; the dropoff is then planned against
/// the updated itinerary.
pub fn assign(elevator: &mut SimElevator, request: &Request) {
    let pickup = insertion_index(
        &elevator.itinerary,
        elevator.current_floor,
        request.origin,
        request.dest,
        request.origin,
    );
    elevator
        .itinerary
        .insert(pickup, Stop::new(request.origin, request.passengers));

    let dropoff = dropoff_index(
        &elevator.itinerary,
        elevator.current_floor,
        request.origin,
        request.dest,
        pickup,
    );
    elevator
        .itinerary
        .insert(dropoff, Stop::new(request.dest, -request.passengers));

    debug!(
        "elevator {} answers {request:?}; itinerary {:?}",
        elevator.id,
        elevator.itinerary.stops()
    );
}
