//! Season, month, and day-of-year derivation.
//!
//! A year is four equal seasons. Each season is split into three equal
//! month slots, and each slot maps to one calendar month through a fixed
//! table. Indices computed from floating-point division are clamped at the
//! top so a rounding error on an exact boundary cannot produce a fifth
//! season or a fourth month.

use skyline_types::{Month, Season, SeasonState};

use crate::constants::{MONTHS_PER_SEASON, SEASONS_PER_YEAR};
use crate::error::{TimeModelError, check_duration, check_elapsed};

/// Calendar months per season, indexed by `[season][month_slot]`.
pub const MONTH_TABLE: [[Month; 3]; 4] = [
    [Month::March, Month::April, Month::May],
    [Month::June, Month::July, Month::August],
    [Month::September, Month::October, Month::November],
    [Month::December, Month::January, Month::February],
];

/// Look up the calendar month for a season and month slot.
///
/// Slots past the last third clamp to the final month of the season.
pub fn month_for(season: Season, month_slot: u8) -> Month {
    let row = match season {
        Season::Spring => MONTH_TABLE[0],
        Season::Summer => MONTH_TABLE[1],
        Season::Autumn => MONTH_TABLE[2],
        Season::Winter => MONTH_TABLE[3],
    };
    let [first, second, third] = row;
    match month_slot {
        0 => first,
        1 => second,
        _ => third,
    }
}

/// Compute season, month and day of year for the given elapsed time.
///
/// `previous` is the season the caller last acted on; `changed` in the
/// result is set whenever the new season differs from it, including the
/// very first call (`previous == None`) so initial styling gets applied.
pub fn season_state(
    elapsed_seconds: f64,
    season_duration_seconds: f64,
    days_per_season: u32,
    previous: Option<Season>,
) -> Result<SeasonState, TimeModelError> {
    let elapsed = check_elapsed(elapsed_seconds)?;
    let season_duration = check_duration("season_duration_seconds", season_duration_seconds)?;
    if days_per_season == 0 {
        return Err(TimeModelError::ZeroDaysPerSeason);
    }

    let seasons = f64::from(SEASONS_PER_YEAR);
    let year = season_duration * seasons;
    let position = elapsed.rem_euclid(year);

    let season_index = floor_index(position / year * seasons, SEASONS_PER_YEAR - 1);
    let season = Season::from_index(season_index).unwrap_or(Season::Winter);

    let within = f64::from(season_index)
        .mul_add(-season_duration, position)
        .max(0.0);
    let month_duration = season_duration / f64::from(MONTHS_PER_SEASON);
    let month_slot = floor_index(within / month_duration, MONTHS_PER_SEASON - 1);

    let days_per_year = days_per_season.saturating_mul(u32::from(SEASONS_PER_YEAR));
    let day_length = year / f64::from(days_per_year);
    let day_of_year = floor_day(position / day_length, days_per_year.saturating_sub(1))
        .saturating_add(1);

    Ok(SeasonState {
        season,
        month_slot,
        month: month_for(season, month_slot),
        day_of_year,
        changed: previous != Some(season),
    })
}

/// Floor a non-negative ratio into an index no greater than `max`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn floor_index(ratio: f64, max: u8) -> u8 {
    // Clamped to [0, max] before the cast, so truncation is exact.
    ratio.floor().clamp(0.0, f64::from(max)) as u8
}

/// Floor a non-negative ratio into a day index no greater than `max`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn floor_day(ratio: f64, max: u32) -> u32 {
    ratio.floor().clamp(0.0, f64::from(max)) as u32
}
