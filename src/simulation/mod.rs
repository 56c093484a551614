//! Standalone elevator simulation core
//!
//! This module contains all the dispatch and scheduling logic and can run
//! independently of the terminal UI. It can be exercised headless or from
//! tests without a terminal attached.

mod dispatch;
mod elevator;
mod eta;
mod itinerary;
mod planner;
mod request;
mod types;
mod world;

// Re-export public types for external use
pub use dispatch::{select_elevator, zone_candidates};
pub use elevator::SimElevator;
pub use eta::ticks_to_slot;
pub use itinerary::{Itinerary, Stop, MAINTENANCE_FLOOR};
pub use planner::{dropoff_index, insertion_index};
pub use request::{CallQueue, Request};
pub use types::{
    floor_in_building, Direction, Zone, CAPACITY, HIGH_ZONE_HOME_FLOOR, MAINTENANCE_DURATION,
    MAINTENANCE_THRESHOLD, NUM_ELEVATORS, NUM_FLOORS, ZONE_BOUNDARY,
};
pub use world::{ElevatorSnapshot, FleetSnapshot, SimWorld};
