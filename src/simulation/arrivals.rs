// src/simulation/arrivals.rs

//! How many new requests show up each tick.

use crate::error::ConfigError;
use crate::model::plane::FlightClass;
use crate::simulation::config::check_rate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::fmt::Debug;

/// Supplies uniformly distributed values in `[0, 1)`.
pub trait UniformSource: Debug {
    fn next_uniform(&mut self) -> f64;
}

/// Adapts any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
    /// Seeded for reproducible runs, or from OS entropy when `seed` is `None`.
    pub fn std(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => RngSource(StdRng::seed_from_u64(s)),
            None => RngSource(StdRng::from_entropy()),
        }
    }
}

impl<R: Rng + Debug> UniformSource for RngSource<R> {
    fn next_uniform(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Replays a fixed list of values, starting over when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    position: usize,
}

impl ScriptedSource {
    /// # Panics
    /// If `values` is empty, or any value is outside `[0, 1)`. A value of 1.0
    /// or more would keep `sample` multiplying forever.
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "ScriptedSource needs at least one value");
        assert!(
            values.iter().all(|v| (0.0..1.0).contains(v)),
            "ScriptedSource values must lie in [0, 1)"
        );
        Self {
            values,
            position: 0,
        }
    }
}

impl UniformSource for ScriptedSource {
    fn next_uniform(&mut self) -> f64 {
        let value = self.values[self.position];
        self.position = (self.position + 1) % self.values.len();
        value
    }
}

/// Draws a Poisson-distributed count with mean `expected_rate` (Knuth's method).
///
/// Multiplies uniform draws together until the product drops to `e^-rate`
/// or below; the number of extra draws needed is the count.
pub fn sample<U>(expected_rate: f64, source: &mut U) -> Result<u32, ConfigError>
where
    U: UniformSource + ?Sized,
{
    check_rate("expected rate", expected_rate)?;

    let limit = (-expected_rate).exp();
    let mut count = 0;
    let mut product = source.next_uniform();
    while product > limit {
        count += 1;
        product *= source.next_uniform();
    }
    Ok(count)
}

/// Decides how many requests of a class arrive at a tick.
///
/// The simulation loop only talks to this, so tests can swap the random
/// generator for a fixed schedule.
pub trait ArrivalProcess: Debug {
    fn arrivals(
        &mut self,
        class: FlightClass,
        expected_rate: f64,
        tick: u32,
    ) -> Result<u32, ConfigError>;
}

/// Random arrivals drawn with [`sample`].
#[derive(Debug, Clone)]
pub struct PoissonArrivals<U> {
    source: U,
}

impl<U: UniformSource> PoissonArrivals<U> {
    pub fn new(source: U) -> Self {
        Self { source }
    }
}

impl PoissonArrivals<RngSource<StdRng>> {
    pub fn seeded(seed: Option<u64>) -> Self {
        Self::new(RngSource::std(seed))
    }
}

impl<U: UniformSource> ArrivalProcess for PoissonArrivals<U> {
    fn arrivals(
        &mut self,
        _class: FlightClass,
        expected_rate: f64,
        _tick: u32,
    ) -> Result<u32, ConfigError> {
        sample(expected_rate, &mut self.source)
    }
}

/// A hand-written schedule. Ticks and classes not listed get no arrivals.
#[derive(Debug, Clone, Default)]
pub struct FixedArrivals {
    schedule: HashMap<(u32, FlightClass), u32>,
}

impl FixedArrivals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(mut self, tick: u32, class: FlightClass, count: u32) -> Self {
        self.schedule.insert((tick, class), count);
        self
    }
}

impl ArrivalProcess for FixedArrivals {
    fn arrivals(
        &mut self,
        class: FlightClass,
        _expected_rate: f64,
        tick: u32,
    ) -> Result<u32, ConfigError> {
        Ok(self.schedule.get(&(tick, class)).copied().unwrap_or(0))
    }
}
