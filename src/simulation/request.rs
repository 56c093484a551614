//! Call requests and the admission queue
//!
//! A request lives in the queue from admission until the dispatcher
//! consumes it. The queue is plain FIFO: admission order is the order in
//! which requests are offered to the dispatcher, and only one request is
//! dispatched per tick, so a burst of calls drains one per tick by design.

use std::collections::VecDeque;

use super::types::floor_in_building;

/// A passenger call: origin floor, destination floor, party size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub origin: i32,
    pub dest: i32,
    pub passengers: i32,
}

/// FIFO of admitted, not-yet-dispatched requests.
#[derive(Debug, Clone, Default)]
pub struct CallQueue {
    requests: VecDeque<Request>,
}

impl CallQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and enqueue a call.
    ///
    /// Rejects (returning `false`, with no state change) calls whose origin
    /// and destination are the same floor, or whose floors fall outside the
    /// building. Party size must be positive.
    pub fn admit(&mut self, origin: i32, dest: i32, passengers: i32) -> bool {
        if origin == dest {
            return false;
        }
        if !floor_in_building(origin) || !floor_in_building(dest) {
            return false;
        }
        if passengers <= 0 {
            return false;
        }
        self.requests.push_back(Request {
            origin,
            dest,
            passengers,
        });
        true
    }

    /// Next request for the dispatcher, in admission order.
    pub fn pop_front(&mut self) -> Option<Request> {
        self.requests.pop_front()
    }

    /// Put an unserviceable request back at the head so it is retried next
    /// tick, keeping admission order intact.
    pub fn requeue_front(&mut self, request: Request) {
        self.requests.push_front(request);
    }

    /// Enqueue a follow-up request produced by overflow boarding. These are
    /// internally generated and skip admission validation.
    pub fn push_back(&mut self, request: Request) {
        self.requests.push_back(request);
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn clear(&mut self) {
        self.requests.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Request> {
        self.requests.iter()
    }
}
