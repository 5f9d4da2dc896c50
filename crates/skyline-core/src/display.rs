//! Text labels for the clock and calendar displays.

use skyline_types::SeasonState;

/// Format an hour of day as zero-padded `HH:MM`.
///
/// Minutes are truncated, not rounded, so 06:59.9 still reads `06:59`.
pub fn format_clock(hour_of_day: f64) -> String {
    let hours = whole(hour_of_day.floor(), 23);
    let minutes = whole((hour_of_day.fract() * 60.0).floor(), 59);
    format!("{hours:02}:{minutes:02}")
}

/// Format a season state as `Season · Month · Day N`.
pub fn format_season_label(state: &SeasonState) -> String {
    format!(
        "{} \u{b7} {} \u{b7} Day {}",
        state.season.name(),
        state.month.name(),
        state.day_of_year
    )
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole(value: f64, max: u32) -> u32 {
    value.clamp(0.0, f64::from(max)) as u32
}
