//! Simulation clock owned by the driver.
//!
//! The clock is the single source of truth for elapsed simulated time. It
//! stores only the tick counter; elapsed seconds are derived as
//! `tick * tick_seconds` on every read so repeated small additions never
//! accumulate floating-point drift.
//!
//! # Design Principles
//!
//! - The tick counter uses checked arithmetic (no silent overflow).
//! - Hour, season and sky state are never stored here. They are derived
//!   from the elapsed time by [`TimeModel`](crate::model::TimeModel).

use crate::error::{TimeModelError, check_duration};

/// Errors that can occur during clock operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClockError {
    /// Tick counter would overflow.
    #[error("tick counter overflow: cannot advance beyond u64::MAX")]
    TickOverflow,

    /// Invalid tick length.
    #[error("invalid clock configuration: {source}")]
    InvalidConfig {
        /// What was wrong with the tick length.
        #[from]
        source: TimeModelError,
    },
}

/// Monotonic simulated clock advanced once per driver tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationClock {
    /// Number of ticks since start (0-indexed).
    tick: u64,

    /// Simulated seconds added per tick.
    tick_seconds: f64,
}

impl SimulationClock {
    /// Create a clock at tick 0.
    pub fn new(tick_seconds: f64) -> Result<Self, ClockError> {
        Self::from_parts(0, tick_seconds)
    }

    /// Create a clock at an explicit tick (useful for testing and replay).
    pub fn from_parts(tick: u64, tick_seconds: f64) -> Result<Self, ClockError> {
        let tick_seconds = check_duration("tick_seconds", tick_seconds)?;
        Ok(Self { tick, tick_seconds })
    }

    /// Advance the clock by one tick. Returns the new tick number.
    pub fn advance(&mut self) -> Result<u64, ClockError> {
        self.tick = self.tick.checked_add(1).ok_or(ClockError::TickOverflow)?;
        Ok(self.tick)
    }

    /// Current tick number.
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    /// Simulated seconds per tick.
    pub const fn tick_seconds(&self) -> f64 {
        self.tick_seconds
    }

    /// Simulated seconds since the clock started.
    #[allow(clippy::cast_precision_loss)]
    pub fn elapsed_seconds(&self) -> f64 {
        // Exact for tick counts below 2^53.
        self.tick as f64 * self.tick_seconds
    }
}
