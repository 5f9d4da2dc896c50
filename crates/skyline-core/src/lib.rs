//! Time model, simulation clock, and tick runner for the Skyline day/night cycle.
//!
//! The heart of this crate is a set of pure functions that turn an elapsed
//! time into hour of day, season and month, sun and moon placement, and a
//! sky classification. The driver owns the elapsed time and threads it into
//! every call; nothing here keeps hidden process-wide state.
//!
//! # Modules
//!
//! - [`constants`] -- Cycle durations and the shared regime thresholds.
//! - [`error`] -- [`TimeModelError`] for precondition violations.
//! - [`day`] -- Hour of day and day/night flags.
//! - [`season`] -- Season, month slot, calendar month, day of year.
//! - [`celestial`] -- Regime table and sun/moon placement.
//! - [`sky`] -- Sky bucket plus star and cloud opacities.
//! - [`lighting`] -- Street lamp and window switches.
//! - [`display`] -- `HH:MM` and season labels.
//! - [`model`] -- [`TimeModel`] bundling validated durations into frames.
//! - [`clock`] -- Tick-counting [`SimulationClock`].
//! - [`config`] -- Loading `skyline-config.yaml` into typed structs.
//! - [`tick`] -- One advance-and-compose step.
//! - [`operator`] -- Run bounds and stop control.
//! - [`runner`] -- The async driver loop.
//!
//! [`TimeModel`]: model::TimeModel
//! [`SimulationClock`]: clock::SimulationClock

pub mod celestial;
pub mod clock;
pub mod config;
pub mod constants;
pub mod day;
pub mod display;
pub mod error;
pub mod lighting;
pub mod model;
pub mod operator;
pub mod runner;
pub mod season;
pub mod sky;
pub mod tick;

pub use error::TimeModelError;
pub use model::TimeModel;
