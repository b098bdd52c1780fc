// src/model/plane.rs

use serde::Serialize;
use std::fmt;

/// What a plane wants the runway for. Also selects which queue it waits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FlightClass {
    Landing,
    Takeoff,
}

impl fmt::Display for FlightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightClass::Landing => write!(f, "landing"),
            FlightClass::Takeoff => write!(f, "takeoff"),
        }
    }
}

/// A single request for the runway.
///
/// Fields are private so a plane cannot change once it has been created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plane {
    id: u32,
    request_tick: u32,
}

impl Plane {
    pub fn new(id: u32, request_tick: u32) -> Self {
        Self { id, request_tick }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// The tick at which the request was made.
    pub fn request_tick(&self) -> u32 {
        self.request_tick
    }

    /// Ticks spent waiting if serviced at `service_tick`.
    /// `None` if the service tick is before the request, which can't happen in a valid run.
    pub fn wait_until(&self, service_tick: u32) -> Option<u32> {
        service_tick.checked_sub(self.request_tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wait_is_service_minus_request() {
        let plane = Plane::new(7, 3);
        assert_eq!(plane.wait_until(3), Some(0));
        assert_eq!(plane.wait_until(8), Some(5));
    }

    #[test]
    fn wait_before_request_is_rejected() {
        let plane = Plane::new(1, 4);
        assert_eq!(plane.wait_until(2), None);
    }
}
