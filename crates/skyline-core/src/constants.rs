//! Cycle durations, regime thresholds, and ambient opacities.
//!
//! The hour thresholds are re-exported from `skyline_types::thresholds`
//! so the time model and the scene samplers share one definition.

/// Hours in one simulated day.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Seasons in one simulated year.
pub const SEASONS_PER_YEAR: u8 = 4;

/// Month slots in one season.
pub const MONTHS_PER_SEASON: u8 = 3;

/// Default real seconds for one full simulated day.
pub const DEFAULT_DAY_DURATION_SECONDS: f64 = 240.0;

/// Default real seconds for one season. A year is four of these.
pub const DEFAULT_SEASON_DURATION_SECONDS: f64 = 150.0;

/// Default hour of day at elapsed time zero (sunrise).
pub const DEFAULT_START_HOUR: f64 = 6.0;

/// Default simulated seconds added per tick.
pub const DEFAULT_TICK_SECONDS: f64 = 0.1;

/// Default wall-clock pause between ticks.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Default calendar days per season (a 120-day year).
pub const DEFAULT_DAYS_PER_SEASON: u32 = 30;

// ---------------------------------------------------------------------------
// Regime thresholds
// ---------------------------------------------------------------------------

pub use skyline_types::thresholds::{
    DAWN_START_HOUR, DAY_START_HOUR, DUSK_START_HOUR, NIGHT_START_HOUR,
};

// ---------------------------------------------------------------------------
// Ambient layers
// ---------------------------------------------------------------------------

/// Cloud layer opacity while the sun is below the horizon.
pub const CLOUDS_NIGHT_OPACITY: f64 = 0.2;

/// Cloud layer opacity while the sun is up.
pub const CLOUDS_DAY_OPACITY: f64 = 0.7;
