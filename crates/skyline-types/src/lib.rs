//! Shared type definitions for the Skyline day/night cycle.
//!
//! This crate is the single source of truth for the data handed from the
//! time model to rendering collaborators. Types defined here flow
//! downstream to `TypeScript` via `ts-rs` for the browser renderer.
//!
//! # Modules
//!
//! - [`enums`] -- Seasons, months, time-of-day buckets, decoration enums
//! - [`structs`] -- Day, season, celestial, sky and lighting snapshots
//! - [`scene`] -- Stars, clouds, traffic and window updates
//! - [`thresholds`] -- Hours where dawn, day, dusk and night begin

pub mod enums;
pub mod scene;
pub mod structs;
pub mod thresholds;

// Re-export all public types at crate root for convenience.
pub use enums::{CarColor, CloudSize, Heading, Month, Season, TimeBucket};
pub use scene::{Cloud, Star, TrafficKind, TrafficSpawn, WindowUpdate};
pub use structs::{
    CelestialPosition, CelestialPositions, DayState, LightingState, SeasonState, SkyClassification,
    SkyFrame,
};
