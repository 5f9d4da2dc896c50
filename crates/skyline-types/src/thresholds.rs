//! Hour thresholds where dawn, day, dusk and night begin.
//!
//! This is the only definition. The celestial regime table, the sky
//! classification, the day/night flags and pedestrian hours all read them
//! from here.

/// Dawn begins: moon setting, sun rising.
pub const DAWN_START_HOUR: f64 = 4.0;

/// Day begins: sun fully up.
pub const DAY_START_HOUR: f64 = 6.0;

/// Dusk begins: sun setting, moon rising.
pub const DUSK_START_HOUR: f64 = 18.0;

/// Night begins. Night runs through midnight until dawn.
pub const NIGHT_START_HOUR: f64 = 20.0;
