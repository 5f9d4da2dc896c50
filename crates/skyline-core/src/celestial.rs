//! Sun and moon placement across the day.
//!
//! The day is partitioned into four disjoint half-open regimes. Each
//! regime owns one transform from local progress `p` in `[0, 1)` to both
//! bodies' positions, so the whole day is a lookup in [`REGIMES`] followed
//! by one function call.
//!
//! | Regime | Hours    | Sun                          | Moon                          |
//! |--------|----------|------------------------------|-------------------------------|
//! | Day    | [6, 18)  | x 10->90, y arc 15->40->15   | parked (-50, 50)              |
//! | Dusk   | [18, 20) | x 90->100, y 40->80, 1->0.2  | x 5->35, y arc 25->35->25, 0->1 |
//! | Night  | [20, 4)  | parked (-50, 100)            | x 35->85, y arc 20->35->20    |
//! | Dawn   | [4, 6)   | x 5->10, y 40->15, 0->1      | x 85->35, y 35->60, 1->0      |
//!
//! Night wraps through midnight. Its progress is measured from 20:00, with
//! 24 hours added after midnight, so 23:59 and 00:01 sit next to each other
//! on one sweep. Membership is decided by comparing against the thresholds
//! before any progress arithmetic happens.

use skyline_types::{CelestialPosition, CelestialPositions, TimeBucket};

use crate::constants::{
    DAWN_START_HOUR, DAY_START_HOUR, DUSK_START_HOUR, HOURS_PER_DAY, NIGHT_START_HOUR,
};
use crate::error::{TimeModelError, check_hour};

/// One half-open slice of the day with its interpolation.
#[derive(Debug, Clone, Copy)]
pub struct Regime {
    /// Time-of-day bucket this regime belongs to.
    pub bucket: TimeBucket,
    /// First hour of the regime (inclusive).
    pub start_hour: f64,
    /// First hour after the regime (exclusive). Below `start_hour` when the
    /// regime wraps through midnight.
    pub end_hour: f64,
    /// Maps local progress to both bodies' positions.
    pub transform: fn(f64) -> CelestialPositions,
}

impl Regime {
    /// Whether the regime wraps through midnight.
    pub const fn wraps(&self) -> bool {
        self.end_hour <= self.start_hour
    }

    /// Length in hours.
    pub const fn length_hours(&self) -> f64 {
        if self.wraps() {
            self.end_hour + HOURS_PER_DAY - self.start_hour
        } else {
            self.end_hour - self.start_hour
        }
    }

    /// Whether `hour` falls in `[start_hour, end_hour)`.
    ///
    /// Plain comparisons against the thresholds, so adjacent regimes meet
    /// exactly with no rounding gap.
    pub const fn contains(&self, hour: f64) -> bool {
        if self.wraps() {
            hour >= self.start_hour || hour < self.end_hour
        } else {
            self.start_hour <= hour && hour < self.end_hour
        }
    }

    /// Local progress of `hour` within this regime, or `None` if outside.
    ///
    /// Clamped to `[0, 1]`: near the end of a regime the offset can round
    /// up to the full length.
    pub fn progress(&self, hour: f64) -> Option<f64> {
        if !self.contains(hour) {
            return None;
        }
        let offset = if hour >= self.start_hour {
            hour - self.start_hour
        } else {
            hour + HOURS_PER_DAY - self.start_hour
        };
        Some((offset / self.length_hours()).clamp(0.0, 1.0))
    }

    /// Evaluate the regime's transform at `hour`, if the hour belongs here.
    pub fn positions(&self, hour: f64) -> Option<CelestialPositions> {
        self.progress(hour).map(self.transform)
    }
}

/// The four regimes in day order. Together they cover `[0, 24)` exactly once.
pub const REGIMES: [Regime; 4] = [
    Regime {
        bucket: TimeBucket::Dawn,
        start_hour: DAWN_START_HOUR,
        end_hour: DAY_START_HOUR,
        transform: dawn,
    },
    Regime {
        bucket: TimeBucket::Day,
        start_hour: DAY_START_HOUR,
        end_hour: DUSK_START_HOUR,
        transform: day,
    },
    Regime {
        bucket: TimeBucket::Dusk,
        start_hour: DUSK_START_HOUR,
        end_hour: NIGHT_START_HOUR,
        transform: dusk,
    },
    Regime {
        bucket: TimeBucket::Night,
        start_hour: NIGHT_START_HOUR,
        end_hour: DAWN_START_HOUR,
        transform: night,
    },
];

/// Sun parking spot while the moon owns the sky.
const SUN_PARKED: CelestialPosition = CelestialPosition::parked(-50.0, 100.0);

/// Moon parking spot while the sun owns the sky.
const MOON_PARKED: CelestialPosition = CelestialPosition::parked(-50.0, 50.0);

/// Find the regime that owns `hour`.
pub fn regime_for_hour(hour: f64) -> Result<&'static Regime, TimeModelError> {
    let hour = check_hour(hour)?;
    REGIMES
        .iter()
        .find(|regime| regime.progress(hour).is_some())
        .ok_or(TimeModelError::HourOutOfRange { hour })
}

/// Compute sun and moon placement for an hour of day in `[0, 24)`.
pub fn celestial_positions(hour_of_day: f64) -> Result<CelestialPositions, TimeModelError> {
    let regime = regime_for_hour(hour_of_day)?;
    regime
        .positions(hour_of_day)
        .ok_or(TimeModelError::HourOutOfRange { hour: hour_of_day })
}

/// Parabolic arc: 0 at both ends, 1 at `p = 0.5`.
pub fn arc(progress: f64) -> f64 {
    let centered = progress.mul_add(2.0, -1.0);
    centered.mul_add(-centered, 1.0)
}

/// Linear interpolation from `from` to `to`.
fn lerp(from: f64, to: f64, progress: f64) -> f64 {
    (to - from).mul_add(progress, from)
}

fn day(p: f64) -> CelestialPositions {
    CelestialPositions {
        sun: CelestialPosition::new(lerp(10.0, 90.0, p), arc(p).mul_add(25.0, 15.0), 1.0),
        moon: MOON_PARKED,
    }
}

fn dusk(p: f64) -> CelestialPositions {
    CelestialPositions {
        sun: CelestialPosition::new(lerp(90.0, 100.0, p), lerp(40.0, 80.0, p), lerp(1.0, 0.2, p)),
        moon: CelestialPosition::new(lerp(5.0, 35.0, p), arc(p).mul_add(10.0, 25.0), p),
    }
}

fn night(p: f64) -> CelestialPositions {
    CelestialPositions {
        sun: SUN_PARKED,
        moon: CelestialPosition::new(lerp(35.0, 85.0, p), arc(p).mul_add(15.0, 20.0), 1.0),
    }
}

fn dawn(p: f64) -> CelestialPositions {
    CelestialPositions {
        sun: CelestialPosition::new(lerp(5.0, 10.0, p), lerp(40.0, 15.0, p), p),
        moon: CelestialPosition::new(lerp(85.0, 35.0, p), lerp(35.0, 60.0, p), 1.0 - p),
    }
}
