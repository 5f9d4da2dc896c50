//! Driver control state shared between the tick loop and its owner.
//!
//! The stop flag is an atomic so a signal handler task can request a stop
//! without locking the loop. Everything else is fixed for the run.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SimulationBoundsConfig;

/// Reason why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunEndReason {
    /// Reached the configured `max_ticks` limit.
    MaxTicksReached,
    /// Reached the configured `max_real_time_seconds` limit.
    MaxRealTimeReached,
    /// The owner asked the loop to stop.
    OperatorStop,
}

/// Shared control state for one run.
#[derive(Debug)]
pub struct DriverControls {
    /// Whether a stop has been requested.
    stop_requested: AtomicBool,

    /// Wall-clock milliseconds between ticks.
    tick_interval_ms: u64,

    /// Wall-clock time when the run started.
    started_at: DateTime<Utc>,

    /// Maximum number of ticks (0 = unlimited).
    max_ticks: u64,

    /// Maximum wall-clock seconds (0 = unlimited).
    max_real_time_seconds: u64,
}

impl DriverControls {
    /// Create controls for a run starting now.
    pub fn new(tick_interval_ms: u64, bounds: &SimulationBoundsConfig) -> Self {
        Self {
            stop_requested: AtomicBool::new(false),
            tick_interval_ms,
            started_at: Utc::now(),
            max_ticks: bounds.max_ticks,
            max_real_time_seconds: bounds.max_real_time_seconds,
        }
    }

    /// Request a clean stop before the next tick.
    pub fn request_stop(&self) {
        self.stop_requested.store(true, Ordering::Release);
    }

    /// Check whether a stop has been requested.
    pub fn is_stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::Acquire)
    }

    /// Pause between ticks in milliseconds. Zero runs ticks back to back.
    pub const fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }

    /// Configured tick limit (0 = unlimited).
    pub const fn max_ticks(&self) -> u64 {
        self.max_ticks
    }

    /// Configured wall-clock limit in seconds (0 = unlimited).
    pub const fn max_real_time_seconds(&self) -> u64 {
        self.max_real_time_seconds
    }

    /// Wall-clock time the run started.
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Whole wall-clock seconds since the run started.
    pub fn elapsed_seconds(&self) -> u64 {
        let secs = Utc::now().signed_duration_since(self.started_at).num_seconds();
        u64::try_from(secs).unwrap_or(0)
    }

    /// Whether `tick` has reached the tick limit.
    pub const fn tick_limit_reached(&self, tick: u64) -> bool {
        self.max_ticks > 0 && tick >= self.max_ticks
    }

    /// Whether the wall-clock limit has passed.
    pub fn time_limit_reached(&self) -> bool {
        self.max_real_time_seconds > 0 && self.elapsed_seconds() >= self.max_real_time_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(max_ticks: u64, max_real_time_seconds: u64) -> SimulationBoundsConfig {
        SimulationBoundsConfig {
            max_ticks,
            max_real_time_seconds,
        }
    }

    #[test]
    fn unlimited_bounds_never_trip() {
        let controls = DriverControls::new(100, &bounds(0, 0));
        assert!(!controls.tick_limit_reached(u64::MAX));
        assert!(!controls.time_limit_reached());
    }

    #[test]
    fn tick_limit_is_inclusive() {
        let controls = DriverControls::new(100, &bounds(5, 0));
        assert!(!controls.tick_limit_reached(4));
        assert!(controls.tick_limit_reached(5));
    }

    #[test]
    fn stop_request_is_sticky() {
        let controls = DriverControls::new(100, &bounds(0, 0));
        assert!(!controls.is_stop_requested());
        controls.request_stop();
        assert!(controls.is_stop_requested());
    }

    #[test]
    fn started_at_is_not_in_the_future() {
        let before = Utc::now();
        let controls = DriverControls::new(25, &bounds(0, 0));
        assert_eq!(controls.tick_interval_ms(), 25);
        assert!(controls.started_at() >= before);
        assert!(controls.started_at() <= Utc::now());
    }
}
