//! Hour-of-day derivation.
//!
//! The hour is a pure function of elapsed time: the position within the
//! current day, scaled to 24 hours and shifted by the configured start hour
//! so that elapsed time zero lands at sunrise by default.

use skyline_types::DayState;

use crate::constants::{DAY_START_HOUR, DUSK_START_HOUR, HOURS_PER_DAY};
use crate::error::{TimeModelError, check_duration, check_elapsed, check_hour};

/// Compute the hour of day in `[0, 24)` for the given elapsed time.
///
/// `hour = ((elapsed mod day) / day * 24 + start_hour) mod 24`.
pub fn hour_of_day(
    elapsed_seconds: f64,
    day_duration_seconds: f64,
    start_hour: f64,
) -> Result<f64, TimeModelError> {
    let elapsed = check_elapsed(elapsed_seconds)?;
    let day = check_duration("day_duration_seconds", day_duration_seconds)?;
    let offset = check_hour(start_hour)?;

    let progress = elapsed.rem_euclid(day) / day;
    Ok(wrap_hour(progress.mul_add(HOURS_PER_DAY, offset)))
}

/// Compute the full [`DayState`] for the given elapsed time.
pub fn day_state(
    elapsed_seconds: f64,
    day_duration_seconds: f64,
    start_hour: f64,
) -> Result<DayState, TimeModelError> {
    let hour = hour_of_day(elapsed_seconds, day_duration_seconds, start_hour)?;
    let is_daytime = (DAY_START_HOUR..DUSK_START_HOUR).contains(&hour);
    Ok(DayState {
        hour_of_day: hour,
        is_daytime,
        is_night: !is_daytime,
    })
}

/// Fold any finite hour into `[0, 24)`.
///
/// `rem_euclid` can round up to exactly 24.0 for values a hair below a
/// multiple of 24; that case maps to midnight.
fn wrap_hour(hour: f64) -> f64 {
    let wrapped = hour.rem_euclid(HOURS_PER_DAY);
    if wrapped >= HOURS_PER_DAY { 0.0 } else { wrapped }
}
