// src/simulation/stats.rs

use crate::model::airport::AirportState;
use serde::Serialize;

/// End-of-run figures. Built from the airport's counters once the last tick
/// has been dispatched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub duration: u32,
    pub total_created: u32,
    pub total_landed: u32,
    pub total_took_off: u32,
    pub total_refused: u32,
    pub landing_queue_remaining: usize,
    pub takeoff_queue_remaining: usize,
    pub idle_ticks: u32,
    pub idle_percentage: f64,
    pub avg_landing_wait: Option<f64>,
    pub avg_takeoff_wait: Option<f64>,
}

impl Report {
    pub fn from_state(state: &AirportState, duration: u32) -> Self {
        Self {
            duration,
            total_created: state.total_created,
            total_landed: state.total_landed,
            total_took_off: state.total_took_off,
            total_refused: state.total_refused,
            landing_queue_remaining: state.landing.len(),
            takeoff_queue_remaining: state.takeoff.len(),
            idle_ticks: state.idle_ticks,
            idle_percentage: idle_percentage(state.idle_ticks, duration),
            avg_landing_wait: average(state.landing_wait_sum, state.total_landed),
            avg_takeoff_wait: average(state.takeoff_wait_sum, state.total_took_off),
        }
    }

    /// Planes that used the runway.
    pub fn total_serviced(&self) -> u32 {
        self.total_landed + self.total_took_off
    }
}

/// Share of ticks the runway sat idle. A zero-length run counts as 0%.
pub fn idle_percentage(idle_ticks: u32, duration: u32) -> f64 {
    if duration == 0 {
        return 0.0;
    }
    100.0 * f64::from(idle_ticks) / f64::from(duration)
}

fn average(sum: u64, count: u32) -> Option<f64> {
    if count == 0 {
        None
    } else {
        Some(sum as f64 / f64::from(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_run_has_no_averages() {
        let report = Report::from_state(&AirportState::new(3), 0);
        assert_eq!(report.idle_percentage, 0.0);
        assert_eq!(report.avg_landing_wait, None);
        assert_eq!(report.avg_takeoff_wait, None);
        assert_eq!(report.total_created, 0);
    }

    #[test]
    fn averages_divide_by_serviced_planes() {
        let mut state = AirportState::new(3);
        state.total_landed = 4;
        state.landing_wait_sum = 6;
        state.total_took_off = 1;
        state.takeoff_wait_sum = 3;
        state.idle_ticks = 5;

        let report = Report::from_state(&state, 10);
        assert_eq!(report.avg_landing_wait, Some(1.5));
        assert_eq!(report.avg_takeoff_wait, Some(3.0));
        assert_eq!(report.idle_percentage, 50.0);
        assert_eq!(report.total_serviced(), 5);
    }
}
