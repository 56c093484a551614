//! Scheduling building-block tests
//!
//! Validates admission, zone partitioning, insertion-point planning, and
//! time-to-service estimation in isolation, before the end-to-end scenario
//! tests exercise them through the world.

use elevator_sim::simulation::{
    dropoff_index, insertion_index, ticks_to_slot, zone_candidates, CallQueue, Itinerary,
    SimElevator, Stop, CAPACITY, NUM_FLOORS,
};

fn itinerary_of(stops: &[(i32, i32)]) -> Itinerary {
    let mut itinerary = Itinerary::new();
    for &(floor, delta) in stops {
        itinerary.push_back(Stop::new(floor, delta));
    }
    itinerary
}

#[test]
fn test_admission_rejects_invalid_calls() {
    let mut queue = CallQueue::new();

    assert!(!queue.admit(5, 5, 2), "same-floor call must be rejected");
    assert!(!queue.admit(0, 5, 2), "origin below building");
    assert!(!queue.admit(5, NUM_FLOORS + 1, 2), "destination above building");
    assert!(!queue.admit(-3, 4, 2), "negative origin");
    assert!(!queue.admit(3, 4, 0), "empty party");

    assert!(queue.is_empty(), "rejected calls must not mutate the queue");
}

#[test]
fn test_admission_accepts_valid_calls_in_fifo_order() {
    let mut queue = CallQueue::new();

    assert!(queue.admit(1, 10, 4));
    assert!(queue.admit(10, 1, 2));
    assert_eq!(queue.len(), 2);

    let first = queue.pop_front().unwrap();
    assert_eq!((first.origin, first.dest, first.passengers), (1, 10, 4));
    let second = queue.pop_front().unwrap();
    assert_eq!((second.origin, second.dest, second.passengers), (10, 1, 2));
}

#[test]
fn test_requeue_front_preserves_admission_order() {
    let mut queue = CallQueue::new();
    assert!(queue.admit(1, 5, 2));
    assert!(queue.admit(2, 6, 3));

    let head = queue.pop_front().unwrap();
    queue.requeue_front(head);

    assert_eq!(queue.pop_front().unwrap().origin, 1);
    assert_eq!(queue.pop_front().unwrap().origin, 2);
}

#[test]
fn test_zone_partition() {
    // Entirely low: low pair plus all-floor pair.
    assert_eq!(zone_candidates(1, 10), 0..4);
    assert_eq!(zone_candidates(9, 2), 0..4);
    // Entirely high: all-floor pair plus high pair.
    assert_eq!(zone_candidates(11, 20), 2..6);
    assert_eq!(zone_candidates(19, 12), 2..6);
    // Crossing the boundary either way: all-floor pair only.
    assert_eq!(zone_candidates(5, 15), 2..4);
    assert_eq!(zone_candidates(15, 8), 2..4);
}

#[test]
fn test_insertion_into_empty_itinerary() {
    let itinerary = Itinerary::new();
    assert_eq!(insertion_index(&itinerary, 7, 3, 9, 3), 0);
}

#[test]
fn test_insertion_after_sole_stop_at_current_floor() {
    let itinerary = itinerary_of(&[(4, 2)]);
    assert_eq!(insertion_index(&itinerary, 4, 6, 9, 6), 1);
}

#[test]
fn test_insertion_within_current_sweep() {
    // Car at 1 heading up through 5 and 9; an up-call 3 -> 7 joins the
    // sweep in floor order.
    let mut itinerary = itinerary_of(&[(5, 2), (9, -2)]);

    let pickup = insertion_index(&itinerary, 1, 3, 7, 3);
    assert_eq!(pickup, 0);
    itinerary.insert(pickup, Stop::new(3, 2));

    let dropoff = dropoff_index(&itinerary, 1, 3, 7, pickup);
    assert_eq!(dropoff, 2);
    itinerary.insert(dropoff, Stop::new(7, -2));

    let floors: Vec<i32> = itinerary.iter().map(|stop| stop.floor).collect();
    assert_eq!(floors, vec![3, 5, 7, 9]);
}

#[test]
fn test_opposite_call_deferred_to_next_sweep() {
    // Car at 3 heading up; a down-call 8 -> 2 waits for the downward sweep.
    let mut itinerary = itinerary_of(&[(5, 1), (9, -1)]);

    let pickup = insertion_index(&itinerary, 3, 8, 2, 8);
    assert_eq!(pickup, 2);
    itinerary.insert(pickup, Stop::new(8, 1));

    let dropoff = dropoff_index(&itinerary, 3, 8, 2, pickup);
    assert_eq!(dropoff, 3);
    itinerary.insert(dropoff, Stop::new(2, -1));

    let floors: Vec<i32> = itinerary.iter().map(|stop| stop.floor).collect();
    assert_eq!(floors, vec![5, 9, 8, 2]);
}

#[test]
fn test_passed_floor_deferred_past_two_reversals() {
    // Car at 5 heading up to 8, then down to 2. An up-call from 3 was
    // already passed, so it belongs to the next upward sweep, and its
    // dropoff must follow the pickup rather than join the current sweep.
    let mut itinerary = itinerary_of(&[(8, 1), (2, -1)]);

    let pickup = insertion_index(&itinerary, 5, 3, 6, 3);
    assert_eq!(pickup, 2);
    itinerary.insert(pickup, Stop::new(3, 1));

    let dropoff = dropoff_index(&itinerary, 5, 3, 6, pickup);
    assert_eq!(dropoff, 3);
    itinerary.insert(dropoff, Stop::new(6, -1));

    let floors: Vec<i32> = itinerary.iter().map(|stop| stop.floor).collect();
    assert_eq!(floors, vec![8, 2, 3, 6]);
}

#[test]
fn test_eta_for_idle_car_is_floor_distance() {
    let itinerary = Itinerary::new();
    assert_eq!(ticks_to_slot(&itinerary, 3, 0, 10), 7);
    assert_eq!(ticks_to_slot(&itinerary, 10, 0, 3), 7);
    assert_eq!(ticks_to_slot(&itinerary, 5, 0, 5), 0);
}

#[test]
fn test_eta_charges_travel_plus_dwell() {
    // 1 -> 5 is 4 ticks plus a dwell, 5 -> 9 is 4 plus a dwell, then 2
    // floors back down to the call at 7.
    let itinerary = itinerary_of(&[(5, 2), (9, -2)]);
    assert_eq!(ticks_to_slot(&itinerary, 1, 2, 7), 12);
}

#[test]
fn test_eta_head_insertion_ignores_itinerary() {
    let itinerary = itinerary_of(&[(5, 2), (9, -2)]);
    assert_eq!(ticks_to_slot(&itinerary, 1, 0, 3), 2);
}

#[test]
fn test_eta_never_below_floor_distance() {
    let itinerary = itinerary_of(&[(5, 2), (12, 1), (9, -2), (2, -1)]);
    for current in 1..=NUM_FLOORS {
        for target in 1..=NUM_FLOORS {
            for slot in 0..=itinerary.len() {
                assert!(
                    ticks_to_slot(&itinerary, current, slot, target)
                        >= target.abs_diff(current),
                    "eta below distance for current={current} target={target} slot={slot}"
                );
            }
        }
    }
}

#[test]
fn test_full_car_is_not_dispatch_eligible() {
    let mut elevator = SimElevator::new(0);
    assert!(elevator.dispatch_eligible());

    elevator.current_load = CAPACITY;
    assert!(!elevator.dispatch_eligible());
}

#[test]
fn test_car_with_pending_maintenance_is_not_dispatch_eligible() {
    let mut elevator = SimElevator::new(0);
    elevator.itinerary.push_back(Stop::new(5, 3));
    elevator.itinerary.push_back(Stop::maintenance());
    assert!(!elevator.dispatch_eligible());

    let mut busy = SimElevator::new(1);
    busy.under_maintenance = true;
    assert!(!busy.dispatch_eligible());
}
