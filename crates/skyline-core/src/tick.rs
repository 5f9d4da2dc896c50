//! Tick cycle: advance the clock, then compose the frame for the new time.
//!
//! Each tick is one atomic read-compute-publish step:
//!
//! 1. **Advance** -- move the [`SimulationClock`] forward one tick.
//! 2. **Compose** -- derive day, season, celestial, sky and lighting state
//!    from the new elapsed time via [`TimeModel::frame`].
//! 3. **Remember** -- keep the season so the next frame can report a change
//!    exactly once per transition.
//!
//! The only state carried between ticks is the tick counter and the last
//! season seen; everything else is recomputed.

use skyline_types::{Season, SkyFrame};
use tracing::{debug, info};

use crate::clock::{ClockError, SimulationClock};
use crate::config::TimeConfig;
use crate::error::TimeModelError;
use crate::model::TimeModel;

/// Errors that can occur during tick execution.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TickError {
    /// A clock operation failed.
    #[error("clock error: {source}")]
    Clock {
        /// The underlying clock error.
        #[from]
        source: ClockError,
    },

    /// The time model rejected its input.
    #[error("time model error: {source}")]
    Model {
        /// The underlying model error.
        #[from]
        source: TimeModelError,
    },
}

/// Everything the driver owns between ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct SkyState {
    /// The validated time model.
    pub model: TimeModel,
    /// The simulation clock.
    pub clock: SimulationClock,
    /// The season reported by the most recent frame.
    pub last_season: Option<Season>,
}

impl SkyState {
    /// Build the initial state from a time configuration.
    pub fn new(config: &TimeConfig) -> Result<Self, TickError> {
        Ok(Self {
            model: TimeModel::from_config(config)?,
            clock: SimulationClock::new(config.tick_seconds)?,
            last_season: None,
        })
    }

    /// Compose the frame for the current tick without advancing.
    ///
    /// Used for the initial render before the first tick. Records the season
    /// like [`run_tick`] does.
    pub fn current_frame(&mut self) -> Result<SkyFrame, TickError> {
        let frame = self.model.frame(
            self.clock.tick(),
            self.clock.elapsed_seconds(),
            self.last_season,
        )?;
        self.observe(&frame);
        Ok(frame)
    }

    fn observe(&mut self, frame: &SkyFrame) {
        if frame.season.changed {
            info!(
                tick = frame.tick,
                season = frame.season.season.name(),
                month = frame.season.month.name(),
                season_class = frame.season.season.css_class(),
                previous = ?self.last_season,
                "Season changed"
            );
        }
        self.last_season = Some(frame.season.season);
    }
}

/// Execute one tick: advance the clock and compose the new frame.
pub fn run_tick(state: &mut SkyState) -> Result<SkyFrame, TickError> {
    let tick = state.clock.advance()?;
    let frame = state
        .model
        .frame(tick, state.clock.elapsed_seconds(), state.last_season)?;
    state.observe(&frame);

    debug!(
        tick,
        hour = frame.day.hour_of_day,
        bucket = frame.sky.bucket.css_class(),
        "Tick complete"
    );
    Ok(frame)
}
