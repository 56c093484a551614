//! A single elevator car and its per-tick step
//!
//! Each tick a car does exactly one of: sit in maintenance, idle, enter
//! maintenance, move one floor toward its front stop, or service the front
//! stop (board/alight). Boarding past capacity is not an error: the car
//! takes whoever fits and the rest become a fresh call from this floor.

use anyhow::{ensure, Context, Result};

use super::itinerary::{Itinerary, Stop};
use super::request::Request;
use super::types::{
    Direction, Zone, CAPACITY, MAINTENANCE_DURATION, MAINTENANCE_THRESHOLD,
};

/// One car of the fleet. Everything except `id`, `zone`, and `home_floor`
/// is mutable simulation state, fully restored by a reset.
#[derive(Debug, Clone)]
pub struct SimElevator {
    pub id: usize,
    pub zone: Zone,
    pub home_floor: i32,
    pub current_floor: i32,
    pub next_target: i32,
    pub current_load: i32,
    pub lifetime_riders: i32,
    pub under_maintenance: bool,
    pub maintenance_ticks: u32,
    pub itinerary: Itinerary,
}

impl SimElevator {
    pub fn new(id: usize) -> Self {
        let zone = Zone::of_elevator(id);
        let home_floor = zone.home_floor();
        Self {
            id,
            zone,
            home_floor,
            current_floor: home_floor,
            next_target: home_floor,
            current_load: 0,
            lifetime_riders: 0,
            under_maintenance: false,
            maintenance_ticks: 0,
            itinerary: Itinerary::new(),
        }
    }

    /// Park back at the home floor with everything cleared.
    pub fn reset(&mut self) {
        self.current_floor = self.home_floor;
        self.next_target = self.home_floor;
        self.current_load = 0;
        self.lifetime_riders = 0;
        self.under_maintenance = false;
        self.maintenance_ticks = 0;
        self.itinerary.clear();
    }

    /// A car can answer new calls unless it is in maintenance, has a
    /// maintenance sentinel pending, or is already full.
    pub fn dispatch_eligible(&self) -> bool {
        !self.under_maintenance
            && !self.itinerary.ends_with_maintenance()
            && self.current_load < CAPACITY
    }

    /// Direction of travel as shown to the renderer.
    pub fn direction(&self) -> Direction {
        if self.under_maintenance || self.itinerary.is_empty() {
            Direction::Idle
        } else {
            Direction::between(self.current_floor, self.next_target)
        }
    }

    /// Append a maintenance sentinel once lifetime ridership crosses the
    /// threshold, resetting the counter. Skipped while a sentinel is
    /// already pending or maintenance is underway, so the sentinel stays
    /// the itinerary's last entry.
    pub fn maintenance_due_check(&mut self) {
        if self.lifetime_riders >= MAINTENANCE_THRESHOLD
            && !self.under_maintenance
            && !self.itinerary.ends_with_maintenance()
        {
            self.itinerary.push_back(Stop::maintenance());
            self.lifetime_riders = 0;
        }
    }

    /// Advance this car one tick.
    ///
    /// Returns the follow-up request for passengers left behind when a
    /// pickup overflowed capacity, if any. Errs only on a corrupted
    /// itinerary (a dropoff with nobody aboard, or an oversubscribed
    /// pickup with no matching dropoff).
    pub fn step(&mut self) -> Result<Option<Request>> {
        if self.under_maintenance {
            self.maintenance_ticks += 1;
            if self.maintenance_ticks >= MAINTENANCE_DURATION {
                self.under_maintenance = false;
                self.maintenance_ticks = 0;
            }
            return Ok(None);
        }

        let Some(stop) = self.itinerary.first().copied() else {
            return Ok(None);
        };

        if stop.is_maintenance() {
            self.under_maintenance = true;
            self.maintenance_ticks = 0;
            self.itinerary.pop_front();
            return Ok(None);
        }

        self.next_target = stop.floor;
        if self.current_floor < stop.floor {
            self.current_floor += 1;
            return Ok(None);
        }
        if self.current_floor > stop.floor {
            self.current_floor -= 1;
            return Ok(None);
        }

        self.service_stop(stop)
    }

    /// Apply the front stop's passenger delta at the current floor.
    fn service_stop(&mut self, stop: Stop) -> Result<Option<Request>> {
        let available = CAPACITY - self.current_load;
        if stop.delta <= available {
            self.current_load += stop.delta;
            ensure!(
                self.current_load >= 0,
                "elevator {}: dropoff of {} at floor {} with only {} aboard",
                self.id,
                -stop.delta,
                stop.floor,
                self.current_load - stop.delta
            );
            if stop.delta > 0 {
                self.lifetime_riders += stop.delta;
            }
            self.itinerary.pop_front();
            return Ok(None);
        }

        // Overflow: board whoever fits, shrink the paired dropoff to those
        // actually aboard, and send the rest back through admission as a
        // brand-new call from this floor.
        let leftover = stop.delta - available;
        let pair = self
            .itinerary
            .find_matching_dropoff(1, stop.delta)
            .with_context(|| {
                format!(
                    "elevator {}: no matching dropoff for oversubscribed pickup of {} at floor {}",
                    self.id, stop.delta, stop.floor
                )
            })?;
        let dest = self.itinerary.stops()[pair].floor;

        self.current_load += available;
        self.lifetime_riders += available;
        self.itinerary.set_delta(pair, -available);
        self.itinerary.pop_front();

        Ok(Some(Request {
            origin: self.current_floor,
            dest,
            passengers: leftover,
        }))
    }
}
