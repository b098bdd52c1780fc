// src/model/airport.rs

use crate::model::plane::{FlightClass, Plane};
use crate::model::queues::BoundedQueue;

/// Everything that changes during a run: the two holding queues and the
/// running tallies. Owned by the simulation loop and lent out by `&mut`.
#[derive(Debug, Clone)]
pub struct AirportState {
    pub landing: BoundedQueue,
    pub takeoff: BoundedQueue,

    // Id handed to the next plane created (starts at 1)
    pub next_id: u32,

    // Counters
    pub total_created: u32,
    pub total_landed: u32,
    pub total_took_off: u32,
    pub total_refused: u32,
    pub idle_ticks: u32,

    // Wait sums, for the averages in the final report
    pub landing_wait_sum: u64,
    pub takeoff_wait_sum: u64,
}

impl AirportState {
    pub fn new(queue_capacity: usize) -> Self {
        Self {
            landing: BoundedQueue::new(queue_capacity),
            takeoff: BoundedQueue::new(queue_capacity),
            next_id: 1,
            total_created: 0,
            total_landed: 0,
            total_took_off: 0,
            total_refused: 0,
            idle_ticks: 0,
            landing_wait_sum: 0,
            takeoff_wait_sum: 0,
        }
    }

    pub fn queue(&self, class: FlightClass) -> &BoundedQueue {
        match class {
            FlightClass::Landing => &self.landing,
            FlightClass::Takeoff => &self.takeoff,
        }
    }

    pub fn queue_mut(&mut self, class: FlightClass) -> &mut BoundedQueue {
        match class {
            FlightClass::Landing => &mut self.landing,
            FlightClass::Takeoff => &mut self.takeoff,
        }
    }

    /// Create the next plane. Ids are shared across both classes.
    pub fn new_plane(&mut self, tick: u32) -> Plane {
        let plane = Plane::new(self.next_id, tick);
        self.next_id += 1;
        self.total_created += 1;
        plane
    }

    /// Planes still accounted for nowhere but the queues.
    pub fn queued(&self) -> u32 {
        (self.landing.len() + self.takeoff.len()) as u32
    }

    /// `total_created` equals everything serviced, refused or still waiting.
    pub fn is_conserved(&self) -> bool {
        self.total_created
            == self.total_landed + self.total_took_off + self.total_refused + self.queued()
    }
}
