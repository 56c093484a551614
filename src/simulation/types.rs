//! Core types and fixed constants for the elevator simulation
//!
//! These are standalone types that don't depend on the terminal UI.

/// Number of floors in the building, numbered 1 through `NUM_FLOORS`.
pub const NUM_FLOORS: i32 = 20;

/// Size of the fleet, fixed at construction.
pub const NUM_ELEVATORS: usize = 6;

/// Maximum passengers a single car can hold.
pub const CAPACITY: i32 = 15;

/// Lifetime ridership at which a car is pulled in for maintenance.
pub const MAINTENANCE_THRESHOLD: i32 = 150;

/// Ticks a car spends out of service once maintenance begins.
pub const MAINTENANCE_DURATION: u32 = 30;

/// Floors at or below this belong to the low zone; above it, the high zone.
pub const ZONE_BOUNDARY: i32 = 10;

/// Home floor for the high-zone pair, both at startup and after a reset.
pub const HIGH_ZONE_HOME_FLOOR: i32 = 11;

/// Which floors a car is allowed to serve.
///
/// The fleet is three fixed pairs: cars 0-1 serve the low zone only,
/// cars 2-3 serve every floor, cars 4-5 serve the high zone only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Low,
    All,
    High,
}

impl Zone {
    /// Zone assignment for a fleet index.
    pub fn of_elevator(index: usize) -> Zone {
        match index {
            0 | 1 => Zone::Low,
            2 | 3 => Zone::All,
            _ => Zone::High,
        }
    }

    /// Where cars of this zone park on construction and reset.
    pub fn home_floor(self) -> i32 {
        match self {
            Zone::Low | Zone::All => 1,
            Zone::High => HIGH_ZONE_HOME_FLOOR,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Zone::Low => "low",
            Zone::All => "all",
            Zone::High => "high",
        }
    }
}

/// Current travel direction of a car, derived from its next target floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Idle,
}

impl Direction {
    /// Direction of travel from `from` toward `to`.
    pub fn between(from: i32, to: i32) -> Direction {
        match to - from {
            d if d > 0 => Direction::Up,
            d if d < 0 => Direction::Down,
            _ => Direction::Idle,
        }
    }
}

/// Returns true when a floor is inside the building.
pub fn floor_in_building(floor: i32) -> bool {
    (1..=NUM_FLOORS).contains(&floor)
}
