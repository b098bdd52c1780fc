// src/simulation/admission.rs

use crate::model::airport::AirportState;
use crate::model::plane::{FlightClass, Plane};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Admitted,
    Refused,
}

/// What happened to one new request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Admission {
    pub plane: Plane,
    pub class: FlightClass,
    pub outcome: Outcome,
}

/// Create a plane for a new request and try to queue it.
///
/// A full queue is not an error here: the plane is refused and counted.
pub fn admit(state: &mut AirportState, class: FlightClass, tick: u32) -> Admission {
    let plane = state.new_plane(tick);

    let outcome = match state.queue_mut(class).enqueue(plane) {
        Ok(()) => {
            debug!(id = plane.id(), %class, tick, "Plane queued");
            Outcome::Admitted
        }
        // enqueue only fails with Full
        Err(err) => {
            state.total_refused += 1;
            warn!(id = plane.id(), %class, tick, %err, "Plane refused");
            Outcome::Refused
        }
    };

    Admission {
        plane,
        class,
        outcome,
    }
}

/// Admit `count` requests one after another, in creation order.
pub fn admit_all(
    state: &mut AirportState,
    class: FlightClass,
    count: u32,
    tick: u32,
) -> Vec<Admission> {
    (0..count).map(|_| admit(state, class, tick)).collect()
}
