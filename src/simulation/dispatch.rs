// src/simulation/dispatch.rs

use crate::error::SimulationError;
use crate::model::airport::AirportState;
use crate::model::plane::{FlightClass, Plane};
use tracing::{debug, error};

/// The runway's use for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Landed { plane: Plane, wait: u32 },
    TookOff { plane: Plane, wait: u32 },
    Idle,
}

/// Give the runway to at most one waiting plane.
///
/// Landings always go first; the takeoff queue is only looked at when nobody
/// is waiting to land. Runs exactly once per tick, after that tick's admissions.
pub fn dispatch(state: &mut AirportState, tick: u32) -> Result<Dispatch, SimulationError> {
    let class = if !state.landing.is_empty() {
        FlightClass::Landing
    } else if !state.takeoff.is_empty() {
        FlightClass::Takeoff
    } else {
        state.idle_ticks += 1;
        debug!(tick, "Runway idle");
        return Ok(Dispatch::Idle);
    };

    let plane = state.queue_mut(class).dequeue().map_err(|err| {
        error!(%class, tick, %err, "Dequeue failed after non-empty check");
        SimulationError::Invariant(format!("{class} queue: {err}"))
    })?;

    let wait = plane.wait_until(tick).ok_or_else(|| {
        error!(id = plane.id(), tick, "Plane serviced before it was requested");
        SimulationError::Invariant(format!(
            "plane {} requested at tick {} but serviced at tick {}",
            plane.id(),
            plane.request_tick(),
            tick
        ))
    })?;

    let outcome = match class {
        FlightClass::Landing => {
            state.total_landed += 1;
            state.landing_wait_sum += u64::from(wait);
            Dispatch::Landed { plane, wait }
        }
        FlightClass::Takeoff => {
            state.total_took_off += 1;
            state.takeoff_wait_sum += u64::from(wait);
            Dispatch::TookOff { plane, wait }
        }
    };
    debug!(id = plane.id(), %class, tick, wait, "Runway used");

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue(state: &mut AirportState, class: FlightClass, tick: u32) -> Plane {
        let plane = state.new_plane(tick);
        state.queue_mut(class).enqueue(plane).unwrap();
        plane
    }

    #[test]
    fn landing_beats_takeoff() {
        let mut state = AirportState::new(3);
        let takeoff = queue(&mut state, FlightClass::Takeoff, 1);
        let landing = queue(&mut state, FlightClass::Landing, 2);

        let result = dispatch(&mut state, 2).unwrap();

        assert_eq!(
            result,
            Dispatch::Landed {
                plane: landing,
                wait: 0
            }
        );
        assert_eq!(state.takeoff.len(), 1);
        assert_eq!(state.takeoff.peek(), Some(&takeoff));
        assert_eq!(state.total_took_off, 0);
    }

    #[test]
    fn takeoff_comes_from_the_takeoff_queue() {
        let mut state = AirportState::new(3);
        let first = queue(&mut state, FlightClass::Takeoff, 1);
        queue(&mut state, FlightClass::Takeoff, 1);

        let result = dispatch(&mut state, 4).unwrap();

        assert_eq!(
            result,
            Dispatch::TookOff {
                plane: first,
                wait: 3
            }
        );
        assert_eq!(state.takeoff.len(), 1);
        assert_eq!(state.total_took_off, 1);
        assert_eq!(state.takeoff_wait_sum, 3);
        assert_eq!(state.landing_wait_sum, 0);
    }

    #[test]
    fn empty_queues_mean_idle() {
        let mut state = AirportState::new(3);
        assert_eq!(dispatch(&mut state, 1).unwrap(), Dispatch::Idle);
        assert_eq!(dispatch(&mut state, 2).unwrap(), Dispatch::Idle);
        assert_eq!(state.idle_ticks, 2);
    }

    #[test]
    fn landing_waits_accumulate() {
        let mut state = AirportState::new(3);
        queue(&mut state, FlightClass::Landing, 1);
        queue(&mut state, FlightClass::Landing, 1);

        dispatch(&mut state, 1).unwrap();
        dispatch(&mut state, 2).unwrap();

        assert_eq!(state.total_landed, 2);
        assert_eq!(state.landing_wait_sum, 1);
    }

    #[test]
    fn service_before_request_is_fatal() {
        let mut state = AirportState::new(3);
        queue(&mut state, FlightClass::Landing, 5);

        let err = dispatch(&mut state, 3).unwrap_err();
        assert!(matches!(err, SimulationError::Invariant(_)));
    }
}
