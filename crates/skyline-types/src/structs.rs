//! Value structs produced by the time model.
//!
//! Every struct here is a derived snapshot: recomputed from elapsed time on
//! each query, never stored as independent state.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Month, Season, TimeBucket};
use crate::thresholds::{DAY_START_HOUR, NIGHT_START_HOUR};

// ---------------------------------------------------------------------------
// Day
// ---------------------------------------------------------------------------

/// Simulated hour of day with the derived day/night flags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DayState {
    /// Hour of day in `[0, 24)`.
    pub hour_of_day: f64,
    /// Sun above the horizon (`[6, 18)`).
    pub is_daytime: bool,
    /// Sun below the horizon. Always the complement of `is_daytime`.
    pub is_night: bool,
}

impl DayState {
    /// Whether pedestrians are out (from day start until night falls).
    pub fn pedestrian_hours(&self) -> bool {
        (DAY_START_HOUR..NIGHT_START_HOUR).contains(&self.hour_of_day)
    }
}

// ---------------------------------------------------------------------------
// Season
// ---------------------------------------------------------------------------

/// Season, month and day-of-year derived from elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SeasonState {
    /// Current season.
    pub season: Season,
    /// Which third of the season we are in (`0..3`).
    pub month_slot: u8,
    /// Calendar month selected by `(season, month_slot)`.
    pub month: Month,
    /// 1-based day within the simulated year.
    pub day_of_year: u32,
    /// The season differs from the one the caller last saw.
    pub changed: bool,
}

// ---------------------------------------------------------------------------
// Celestial
// ---------------------------------------------------------------------------

/// Screen-normalized placement of one celestial body.
///
/// Coordinates are percentages of the sky viewport. Parked bodies use
/// coordinates outside `[0, 100]` so they sit off-screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CelestialPosition {
    /// Horizontal position, percent from the left edge.
    pub x_percent: f64,
    /// Vertical position, percent from the top edge.
    pub y_percent: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl CelestialPosition {
    /// Construct a position.
    pub const fn new(x_percent: f64, y_percent: f64, opacity: f64) -> Self {
        Self {
            x_percent,
            y_percent,
            opacity,
        }
    }

    /// A fully transparent body parked at the given off-screen point.
    pub const fn parked(x_percent: f64, y_percent: f64) -> Self {
        Self::new(x_percent, y_percent, 0.0)
    }
}

/// Sun and moon placement for one hour of day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CelestialPositions {
    /// The sun.
    pub sun: CelestialPosition,
    /// The moon.
    pub moon: CelestialPosition,
}

// ---------------------------------------------------------------------------
// Sky
// ---------------------------------------------------------------------------

/// Sky colour bucket and ambient layer opacities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SkyClassification {
    /// Time-of-day bucket driving the sky gradient.
    pub bucket: TimeBucket,
    /// Star layer opacity, either 0 or 1.
    pub stars_opacity: f64,
    /// Cloud layer opacity.
    pub clouds_opacity: f64,
}

/// Street lamp and window lighting switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LightingState {
    /// Street lamps glow.
    pub street_lamps_on: bool,
    /// Occupied building windows are lit.
    pub windows_lit: bool,
}

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

/// Everything a renderer needs for one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SkyFrame {
    /// Tick number this frame was composed for.
    pub tick: u64,
    /// Simulated seconds since the clock started.
    pub elapsed_seconds: f64,
    /// Hour of day and day/night flags.
    pub day: DayState,
    /// `HH:MM` label for the clock display.
    pub clock_label: String,
    /// Season, month and day of year.
    pub season: SeasonState,
    /// Season display label.
    pub season_label: String,
    /// Sun and moon placement.
    pub celestial: CelestialPositions,
    /// Sky bucket and ambient opacities.
    pub sky: SkyClassification,
    /// Lamp and window switches.
    pub lighting: LightingState,
}
