//! Main simulation world that ties everything together
//!
//! `SimWorld` owns the fleet and the call queue and exposes the three
//! operations a driver needs: `admit_request`, `tick`, and `reset`. It is
//! single-threaded and cooperative; a tick always runs to completion, and
//! pause/resume is purely the driver choosing whether to call `tick`.

use anyhow::Result;
use log::{debug, warn};

use super::dispatch::{assign, select_elevator};
use super::elevator::SimElevator;
use super::itinerary::Stop;
use super::request::CallQueue;
use super::types::{Direction, MAINTENANCE_DURATION, NUM_ELEVATORS};

/// Read-only per-elevator state for display.
#[derive(Debug, Clone)]
pub struct ElevatorSnapshot {
    pub id: usize,
    pub floor: i32,
    pub next_target: i32,
    pub direction: Direction,
    pub load: i32,
    pub lifetime_riders: i32,
    pub under_maintenance: bool,
    pub maintenance_ticks_left: u32,
    /// Pending stops, maintenance sentinel included.
    pub stops: Vec<Stop>,
}

/// Read-only fleet state returned by every tick.
#[derive(Debug, Clone)]
pub struct FleetSnapshot {
    pub tick: u64,
    pub elevators: Vec<ElevatorSnapshot>,
    pub queued_calls: usize,
}

/// The simulation world: six cars and one call queue.
pub struct SimWorld {
    pub elevators: Vec<SimElevator>,
    pub queue: CallQueue,
    tick_count: u64,
}

impl Default for SimWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl SimWorld {
    pub fn new() -> Self {
        Self {
            elevators: (0..NUM_ELEVATORS).map(SimElevator::new).collect(),
            queue: CallQueue::new(),
            tick_count: 0,
        }
    }

    /// Validate and enqueue a call. Returns `false` with no state change
    /// for same-floor or out-of-building requests.
    pub fn admit_request(&mut self, origin: i32, dest: i32, passengers: i32) -> bool {
        let admitted = self.queue.admit(origin, dest, passengers);
        if admitted {
            debug!("admitted call {origin} -> {dest} ({passengers} passengers)");
        } else {
            debug!("rejected call {origin} -> {dest} ({passengers} passengers)");
        }
        admitted
    }

    /// Advance one simulated time unit: dispatch at most one queued call,
    /// run the maintenance trigger, step every car, and report the fleet.
    ///
    /// Errs only on internal invariant violations (corrupted itinerary);
    /// normal operation, including rejected and unserviceable calls, never
    /// fails.
    pub fn tick(&mut self) -> Result<FleetSnapshot> {
        self.tick_count += 1;

        if let Some(request) = self.queue.pop_front() {
            match select_elevator(&self.elevators, &request) {
                Some(index) => assign(&mut self.elevators[index], &request),
                None => {
                    // Every candidate full or bound for maintenance; leave
                    // the call at the head and retry next tick.
                    warn!("no eligible elevator for {request:?}; requeued");
                    self.queue.requeue_front(request);
                }
            }
        }

        for elevator in &mut self.elevators {
            elevator.maintenance_due_check();
        }

        let mut follow_ups = Vec::new();
        for elevator in &mut self.elevators {
            if let Some(request) = elevator.step()? {
                debug!(
                    "elevator {} overflowed; re-admitting {request:?}",
                    elevator.id
                );
                follow_ups.push(request);
            }
        }
        for request in follow_ups {
            self.queue.push_back(request);
        }

        Ok(self.snapshot())
    }

    /// Restore the fleet to its home configuration and empty the queue.
    /// Replaces all state in one step; callers see either the old world or
    /// the fresh one, never a mix.
    pub fn reset(&mut self) {
        for elevator in &mut self.elevators {
            elevator.reset();
        }
        self.queue.clear();
        self.tick_count = 0;
    }

    /// Current read-only view of the fleet.
    pub fn snapshot(&self) -> FleetSnapshot {
        FleetSnapshot {
            tick: self.tick_count,
            elevators: self.elevators.iter().map(snapshot_elevator).collect(),
            queued_calls: self.queue.len(),
        }
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Print a summary of the fleet state, headless-runner style.
    pub fn print_summary(&self) {
        println!("=== Elevator Simulation Summary ===");
        println!("Tick: {}", self.tick_count);
        println!("Queued calls: {}", self.queue.len());
        for elevator in &self.elevators {
            let state = if elevator.under_maintenance {
                "maintenance"
            } else if elevator.itinerary.is_empty() {
                "idle"
            } else {
                "moving"
            };
            println!(
                "  Elevator {} ({:>4}): floor {:>2}, {:<11} load {:>2}, lifetime {:>3}, stops {:?}",
                elevator.id,
                elevator.zone.label(),
                elevator.current_floor,
                state,
                elevator.current_load,
                elevator.lifetime_riders,
                elevator.itinerary.stops()
            );
        }
    }
}

fn snapshot_elevator(elevator: &SimElevator) -> ElevatorSnapshot {
    ElevatorSnapshot {
        id: elevator.id,
        floor: elevator.current_floor,
        next_target: elevator.next_target,
        direction: elevator.direction(),
        load: elevator.current_load,
        lifetime_riders: elevator.lifetime_riders,
        under_maintenance: elevator.under_maintenance,
        maintenance_ticks_left: if elevator.under_maintenance {
            MAINTENANCE_DURATION.saturating_sub(elevator.maintenance_ticks)
        } else {
            0
        },
        stops: elevator.itinerary.stops().to_vec(),
    }
}
