//! Errors.

use thiserror::Error;

/// A queue operation could not be carried out.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The queue already holds `capacity` planes.
    ///
    /// Recoverable: admission turns this into a refusal.
    #[error("Queue is full (capacity {capacity})")]
    Full { capacity: usize },

    /// There was nothing to dequeue.
    ///
    /// Unrecoverable. The dispatcher checks for emptiness first, so seeing this
    /// means the simulation logic is broken.
    #[error("Queue is empty")]
    Empty,
}

/// The run parameters were rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A rate was negative, NaN or infinite.
    #[error("Invalid {name}: {value} (must be a finite, nonnegative number)")]
    InvalidRate { name: &'static str, value: f64 },

    /// Queues must be able to hold at least one plane.
    #[error("Queue capacity must be at least 1")]
    ZeroCapacity,
}

/// Something stopped the simulation loop.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Internal invariant violated. Fatal.
    #[error("Simulation invariant violated: {0}")]
    Invariant(String),

    /// `step` was called after the last tick.
    #[error("The simulation has already concluded")]
    Concluded,
}

/// The interactive prompt could not produce a configuration.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("I/O error while prompting: {0}")]
    Io(#[from] std::io::Error),

    /// Settings fixed before the dialogue started were already unusable.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Input closed before every question was answered.
    #[error("Input ended before the simulation was configured")]
    EndOfInput,
}
