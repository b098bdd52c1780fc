//! Single-runway airport traffic simulation.
//!
//! Planes ask to land or take off each tick. They wait in two bounded queues,
//! and the runway serves at most one plane per tick, landings first.

pub mod error;
pub mod io;
pub mod model;
pub mod simulation;

pub use error::{ConfigError, PromptError, QueueError, SimulationError};
pub use model::plane::{FlightClass, Plane};
pub use simulation::config::SimulationConfig;
pub use simulation::engine::{AirportSimulation, Event};
pub use simulation::stats::Report;
