// src/simulation/config.rs

use crate::error::ConfigError;

/// Planes that may wait in each queue unless told otherwise.
pub const DEFAULT_QUEUE_CAPACITY: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub duration: u32,
    pub arrival_rate: f64,
    pub departure_rate: f64,
    pub queue_capacity: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            duration: 0,
            arrival_rate: 0.0,
            departure_rate: 0.0,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl SimulationConfig {
    pub fn new(duration: u32, arrival_rate: f64, departure_rate: f64) -> Self {
        Self {
            duration,
            arrival_rate,
            departure_rate,
            ..Self::default()
        }
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_rate("arrival rate", self.arrival_rate)?;
        check_rate("departure rate", self.departure_rate)?;
        if self.queue_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }

    /// More than one expected request per tick outpaces a runway that serves one.
    /// Not an error: the run just piles up refusals.
    pub fn is_saturated(&self) -> bool {
        self.arrival_rate + self.departure_rate > 1.0
    }
}

/// Rates must be finite and nonnegative.
pub fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidRate { name, value })
    }
}
