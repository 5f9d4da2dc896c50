//! The time model: validated durations plus frame composition.
//!
//! [`TimeModel`] holds nothing but configuration. Every query takes the
//! elapsed time as an argument, so two calls with the same elapsed time
//! always produce the same answer.

use skyline_types::{DayState, Season, SeasonState, SkyFrame};

use crate::celestial::celestial_positions;
use crate::config::TimeConfig;
use crate::day::day_state;
use crate::display::{format_clock, format_season_label};
use crate::error::TimeModelError;
use crate::lighting::lighting_state;
use crate::season::season_state;
use crate::sky::sky_classification;

/// Validated cycle durations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeModel {
    day_duration_seconds: f64,
    season_duration_seconds: f64,
    start_hour: f64,
    days_per_season: u32,
}

impl TimeModel {
    /// Build a model from a time configuration.
    pub fn from_config(config: &TimeConfig) -> Result<Self, TimeModelError> {
        config.validate()?;
        Ok(Self {
            day_duration_seconds: config.day_duration_seconds,
            season_duration_seconds: config.season_duration_seconds,
            start_hour: config.start_hour,
            days_per_season: config.days_per_season,
        })
    }

    /// Real seconds per simulated day.
    pub const fn day_duration_seconds(&self) -> f64 {
        self.day_duration_seconds
    }

    /// Real seconds per season.
    pub const fn season_duration_seconds(&self) -> f64 {
        self.season_duration_seconds
    }

    /// Real seconds per year (four seasons).
    pub fn year_duration_seconds(&self) -> f64 {
        self.season_duration_seconds * 4.0
    }

    /// Hour of day and day/night flags at `elapsed_seconds`.
    pub fn day_state(&self, elapsed_seconds: f64) -> Result<DayState, TimeModelError> {
        day_state(elapsed_seconds, self.day_duration_seconds, self.start_hour)
    }

    /// Season, month and day of year at `elapsed_seconds`.
    pub fn season_state(
        &self,
        elapsed_seconds: f64,
        previous: Option<Season>,
    ) -> Result<SeasonState, TimeModelError> {
        season_state(
            elapsed_seconds,
            self.season_duration_seconds,
            self.days_per_season,
            previous,
        )
    }

    /// Compose the complete frame for one tick.
    ///
    /// Either every field is populated or an error is returned; there are no
    /// partial frames.
    pub fn frame(
        &self,
        tick: u64,
        elapsed_seconds: f64,
        previous_season: Option<Season>,
    ) -> Result<SkyFrame, TimeModelError> {
        let day = self.day_state(elapsed_seconds)?;
        let season = self.season_state(elapsed_seconds, previous_season)?;
        let celestial = celestial_positions(day.hour_of_day)?;
        let sky = sky_classification(day.hour_of_day)?;

        Ok(SkyFrame {
            tick,
            elapsed_seconds,
            clock_label: format_clock(day.hour_of_day),
            season_label: format_season_label(&season),
            lighting: lighting_state(&day),
            day,
            season,
            celestial,
            sky,
        })
    }
}

impl Default for TimeModel {
    fn default() -> Self {
        let config = TimeConfig::default();
        Self {
            day_duration_seconds: config.day_duration_seconds,
            season_duration_seconds: config.season_duration_seconds,
            start_hour: config.start_hour,
            days_per_season: config.days_per_season,
        }
    }
}
