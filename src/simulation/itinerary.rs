//! Per-elevator travel itinerary
//!
//! An itinerary is the ordered list of stops a car still has to make. The
//! planner splices new stops in at direction-consistent positions, the
//! stepper consumes them from the front. A growable array with positional
//! insert replaces the linked list a naive implementation would reach for;
//! itineraries are short, so shifting on insert is cheap and there are no
//! pointers to get wrong.

/// Floor value reserved for the forced-maintenance sentinel stop.
pub const MAINTENANCE_FLOOR: i32 = -1;

/// A scheduled floor visit with a signed passenger delta
/// (positive = board, negative = alight).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stop {
    pub floor: i32,
    pub delta: i32,
}

impl Stop {
    pub fn new(floor: i32, delta: i32) -> Self {
        Self { floor, delta }
    }

    /// The sentinel stop that sends a car into scheduled maintenance.
    pub fn maintenance() -> Self {
        Self {
            floor: MAINTENANCE_FLOOR,
            delta: 0,
        }
    }

    pub fn is_maintenance(&self) -> bool {
        self.floor == MAINTENANCE_FLOOR
    }
}

/// Ordered sequence of stops owned by exactly one elevator.
#[derive(Debug, Clone, Default)]
pub struct Itinerary {
    stops: Vec<Stop>,
}

impl Itinerary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn first(&self) -> Option<&Stop> {
        self.stops.first()
    }

    pub fn get(&self, index: usize) -> Option<&Stop> {
        self.stops.get(index)
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Splice a stop in at `index`, shifting everything behind it.
    pub fn insert(&mut self, index: usize, stop: Stop) {
        self.stops.insert(index, stop);
    }

    /// Append at the tail. Used for the maintenance sentinel, which must
    /// always be the last entry.
    pub fn push_back(&mut self, stop: Stop) {
        self.stops.push(stop);
    }

    /// Consume the front stop.
    pub fn pop_front(&mut self) -> Option<Stop> {
        if self.stops.is_empty() {
            None
        } else {
            Some(self.stops.remove(0))
        }
    }

    /// True when a maintenance sentinel is pending. The sentinel is only
    /// ever appended, so checking the tail is enough.
    pub fn ends_with_maintenance(&self) -> bool {
        self.stops.last().is_some_and(Stop::is_maintenance)
    }

    /// Index just past the direction run that `start` belongs to.
    ///
    /// Scans forward while consecutive floors keep moving in `direction`
    /// (sign only; magnitude is ignored). Returns the index of the last
    /// stop of the run when a reversal follows it, or `len()` when the run
    /// extends to the end of the itinerary.
    pub fn run_end(&self, start: usize, direction: i32) -> usize {
        let mut at = start;
        loop {
            // Reaching the tail means the run never reverses.
            if at + 1 >= self.stops.len() {
                return self.stops.len();
            }
            let step = self.stops[at + 1].floor - self.stops[at].floor;
            if step * direction < 0 {
                return at;
            }
            at += 1;
        }
    }

    /// Bounded forward scan for the dropoff paired with an oversubscribed
    /// pickup: the first stop at or after `from` whose delta is the exact
    /// negation of `pickup_delta`. `None` means the itinerary is corrupted.
    pub fn find_matching_dropoff(&self, from: usize, pickup_delta: i32) -> Option<usize> {
        self.stops
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, stop)| stop.delta == -pickup_delta)
            .map(|(index, _)| index)
    }

    /// Rewrite the delta of the stop at `index`.
    pub fn set_delta(&mut self, index: usize, delta: i32) {
        self.stops[index].delta = delta;
    }

    pub fn clear(&mut self) {
        self.stops.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stop> {
        self.stops.iter()
    }
}
