//! Property and scenario tests for the time model.
//!
//! These exercise the public API only: hour range and periodicity, season
//! cycling, regime partition, boundary continuity, and the reference
//! scenarios for a 240-second day and 150-second season.

#![allow(clippy::unwrap_used)]

use skyline_core::celestial::{REGIMES, Regime, celestial_positions, regime_for_hour};
use skyline_core::config::TimeConfig;
use skyline_core::day::{day_state, hour_of_day};
use skyline_core::season::season_state;
use skyline_core::sky::sky_classification;
use skyline_core::{TimeModel, TimeModelError};
use skyline_types::{CelestialPosition, Month, Season, TimeBucket};

const DAY: f64 = 240.0;
const SEASON: f64 = 150.0;
const YEAR: f64 = 600.0;
const START: f64 = 6.0;

fn close(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

/// Distance between two hours on the 24-hour circle.
fn hour_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs();
    d.min(24.0 - d)
}

fn sample_hours() -> impl Iterator<Item = f64> {
    (0..24_000_u32).map(|i| f64::from(i) / 1000.0)
}

fn off_screen(pos: &CelestialPosition) -> bool {
    pos.opacity < 1e-12 && !(0.0..=100.0).contains(&pos.x_percent)
}

// ---------------------------------------------------------------------------
// Range and periodicity
// ---------------------------------------------------------------------------

#[test]
fn hour_is_always_in_range() {
    for i in 0..5_000_u32 {
        let elapsed = f64::from(i) * 0.37;
        let hour = hour_of_day(elapsed, DAY, START).unwrap();
        assert!((0.0..24.0).contains(&hour), "hour {hour} at {elapsed}");
    }
    for n in 0..100_u32 {
        let hour = hour_of_day(f64::from(n) * DAY, DAY, 0.0).unwrap();
        assert!((0.0..24.0).contains(&hour));
        assert!(close(hour, 0.0, 1e-9));
    }
}

#[test]
fn day_state_is_periodic() {
    for i in 0..2_000_u32 {
        let t = f64::from(i) * 0.37;
        let a = day_state(t, DAY, START).unwrap();
        let b = day_state(t + DAY, DAY, START).unwrap();
        assert!(hour_distance(a.hour_of_day, b.hour_of_day) < 1e-9, "t = {t}");
    }
}

#[test]
fn season_cycles_every_year() {
    for i in 0..2_000_u32 {
        let t = f64::from(i) * 0.29 + 0.01;
        let a = season_state(t, SEASON, 30, None).unwrap();
        let b = season_state(t + YEAR, SEASON, 30, None).unwrap();
        assert_eq!(a.season, b.season, "t = {t}");
        assert_eq!(a.month, b.month, "t = {t}");
    }
}

// ---------------------------------------------------------------------------
// Regime partition
// ---------------------------------------------------------------------------

#[test]
fn regimes_partition_the_day() {
    for hour in sample_hours() {
        let owners = REGIMES
            .iter()
            .filter(|regime| regime.progress(hour).is_some())
            .count();
        assert_eq!(owners, 1, "hour {hour} owned by {owners} regimes");
    }
}

#[test]
fn hours_adjacent_to_thresholds_are_classified() {
    for threshold in [4.0_f64, 6.0, 18.0, 20.0] {
        let bits = threshold.to_bits();
        let below = f64::from_bits(bits.saturating_sub(1));
        let above = f64::from_bits(bits.saturating_add(1));
        for hour in [below, threshold, above] {
            let owners = REGIMES
                .iter()
                .filter(|regime| regime.progress(hour).is_some())
                .count();
            assert_eq!(owners, 1, "hour {hour} owned by {owners} regimes");
            let regime = regime_for_hour(hour).unwrap();
            let sky = sky_classification(hour).unwrap();
            assert_eq!(regime.bucket, sky.bucket, "hour {hour}");
            assert!(celestial_positions(hour).is_ok(), "hour {hour}");
        }
    }
}

#[test]
fn sky_and_celestial_agree_on_buckets() {
    for hour in sample_hours() {
        let regime = regime_for_hour(hour).unwrap();
        let sky = sky_classification(hour).unwrap();
        assert_eq!(regime.bucket, sky.bucket, "hour {hour}");
    }
}

#[test]
fn regime_lengths_sum_to_a_day() {
    let total: f64 = REGIMES.iter().map(Regime::length_hours).sum();
    assert!(close(total, 24.0, 1e-12));
}

// ---------------------------------------------------------------------------
// Continuity
// ---------------------------------------------------------------------------

#[test]
fn bodies_do_not_jump_across_boundaries() {
    let eps = 1e-6;
    for boundary in [4.0, 6.0, 18.0, 20.0] {
        let before = celestial_positions(boundary - 1e-9).unwrap();
        let after = celestial_positions(boundary).unwrap();

        for (name, a, b) in [
            ("sun", before.sun, after.sun),
            ("moon", before.moon, after.moon),
        ] {
            assert!(
                (0.0..=1.0).contains(&a.opacity) && (0.0..=1.0).contains(&b.opacity),
                "{name} opacity out of range at {boundary}"
            );
            if off_screen(&a) || off_screen(&b) {
                continue;
            }
            assert!(
                close(a.opacity, b.opacity, eps),
                "{name} opacity jumps at {boundary}: {} -> {}",
                a.opacity,
                b.opacity
            );
            assert!(
                close(a.x_percent, b.x_percent, eps),
                "{name} x jumps at {boundary}: {} -> {}",
                a.x_percent,
                b.x_percent
            );
        }
    }
}

#[test]
fn moon_sweep_is_continuous_through_midnight() {
    let late = celestial_positions(23.999).unwrap();
    let early = celestial_positions(0.001).unwrap();
    let dx = early.moon.x_percent - late.moon.x_percent;
    // 0.002 hours of an 8-hour, 50-point sweep.
    assert!(close(dx, 50.0 * 0.002 / 8.0, 1e-9), "dx = {dx}");
    assert!(close(late.moon.y_percent, early.moon.y_percent, 1e-3));
}

#[test]
fn sun_and_moon_are_never_both_fully_opaque() {
    for hour in sample_hours() {
        let pos = celestial_positions(hour).unwrap();
        assert!(
            !(close(pos.sun.opacity, 1.0, 1e-12) && close(pos.moon.opacity, 1.0, 1e-12)),
            "both bodies opaque at {hour}"
        );
    }
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn scenario_sunrise_at_elapsed_zero() {
    let model = TimeModel::default();
    let frame = model.frame(0, 0.0, None).unwrap();
    assert!(close(frame.day.hour_of_day, 6.0, 1e-12));
    assert!(close(frame.celestial.sun.opacity, 1.0, 1e-12));
    assert!(close(frame.celestial.sun.x_percent, 10.0, 1e-9));
    assert!(close(frame.celestial.moon.opacity, 0.0, 1e-12));
}

#[test]
fn scenario_half_day_is_dusk_boundary() {
    let hour = hour_of_day(120.0, DAY, START).unwrap();
    assert!(close(hour, 18.0, 1e-9));
    assert_eq!(regime_for_hour(hour).unwrap().bucket, TimeBucket::Dusk);

    let at = celestial_positions(hour).unwrap();
    let later = celestial_positions(hour + 0.5).unwrap();
    assert!(close(at.moon.opacity, 0.0, 1e-9));
    assert!(later.moon.opacity > at.moon.opacity);
    assert!(later.sun.opacity < at.sun.opacity);
    assert!(later.sun.opacity > 0.2);
}

#[test]
fn scenario_spring_march_at_start() {
    let state = season_state(0.0, SEASON, 30, None).unwrap();
    assert_eq!(state.season, Season::Spring);
    assert_eq!(state.season.index(), 0);
    assert_eq!(state.month, Month::March);
    assert_eq!(state.month.index(), 2);
}

#[test]
fn scenario_mid_season_is_april() {
    let state = season_state(75.0, SEASON, 30, None).unwrap();
    assert_eq!(state.month_slot, 1);
    assert_eq!(state.month, Month::April);
    assert_eq!(state.month.index(), 3);
}

#[test]
fn scenario_year_wraps_to_spring() {
    let state = season_state(600.0, SEASON, 30, None).unwrap();
    assert_eq!(state.season, Season::Spring);
    assert_eq!(state.month, Month::March);
}

#[test]
fn scenario_deep_night() {
    let sky = sky_classification(2.0).unwrap();
    assert_eq!(sky.bucket, TimeBucket::Night);
    assert!(close(sky.stars_opacity, 1.0, 1e-12));
    assert!(sky.clouds_opacity < 0.5);

    let pos = celestial_positions(2.0).unwrap();
    assert!(close(pos.sun.opacity, 0.0, 1e-12));
    assert!(pos.sun.x_percent < 0.0);
}

// ---------------------------------------------------------------------------
// Determinism and rejection
// ---------------------------------------------------------------------------

#[test]
fn frames_are_deterministic() {
    let model = TimeModel::from_config(&TimeConfig::default()).unwrap();
    for i in 0..500_u32 {
        let t = f64::from(i) * 1.3;
        let a = model.frame(u64::from(i), t, Some(Season::Spring)).unwrap();
        let b = model.frame(u64::from(i), t, Some(Season::Spring)).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn precondition_violations_are_rejected() {
    assert!(matches!(
        hour_of_day(-0.001, DAY, START),
        Err(TimeModelError::InvalidElapsed { .. })
    ));
    assert!(matches!(
        season_state(0.0, -SEASON, 30, None),
        Err(TimeModelError::InvalidDuration { .. })
    ));
    assert!(matches!(
        celestial_positions(24.0),
        Err(TimeModelError::HourOutOfRange { .. })
    ));
    assert!(matches!(
        sky_classification(-0.5),
        Err(TimeModelError::HourOutOfRange { .. })
    ));
}
