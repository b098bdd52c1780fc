pub mod admission;
pub mod arrivals;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod stats;
