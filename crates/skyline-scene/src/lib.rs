//! Seeded decorative samplers for the Skyline scene.
//!
//! Everything random in the scene lives here: star placement, cloud sizes,
//! window occupancy and street traffic. The time model never consumes
//! randomness; these samplers read the frames it produces.
//!
//! # Modules
//!
//! - [`config`] -- [`SceneConfig`] from the `scene:` YAML section.
//! - [`backdrop`] -- Star field and cloud layer.
//! - [`windows`] -- [`WindowGrid`] occupancy and night flicker.
//! - [`traffic`] -- [`TrafficPlanner`] for cars and pedestrians.
//! - [`error`] -- [`SceneError`].

pub mod backdrop;
pub mod config;
pub mod error;
pub mod traffic;
pub mod windows;

pub use backdrop::{cloud_layer, star_field};
pub use config::SceneConfig;
pub use error::SceneError;
pub use traffic::TrafficPlanner;
pub use windows::WindowGrid;

use serde::Serialize;
use skyline_types::{Cloud, SkyFrame, Star, TrafficSpawn, WindowUpdate};

/// The sampled scene: static backdrop plus the per-tick samplers.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Star field, fixed for the run.
    pub stars: Vec<Star>,
    /// Cloud layer, fixed for the run.
    pub clouds: Vec<Cloud>,
    windows: WindowGrid,
    traffic: TrafficPlanner,
}

/// Scene changes produced for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneUpdate {
    /// Lit windows and any flicker.
    pub windows: WindowUpdate,
    /// Traffic entering the street.
    pub spawns: Vec<TrafficSpawn>,
}

impl Scene {
    /// Validate `config` and sample every layer from `seed`.
    pub fn new(config: &SceneConfig, seed: u64) -> Result<Self, SceneError> {
        config.validate()?;
        Ok(Self {
            stars: star_field(config, seed),
            clouds: cloud_layer(config, seed),
            windows: WindowGrid::new(config, seed),
            traffic: TrafficPlanner::new(config, seed),
        })
    }

    /// Advance the per-tick samplers to `frame`.
    pub fn update(&mut self, frame: &SkyFrame) -> SceneUpdate {
        SceneUpdate {
            windows: self.windows.update(frame.lighting.windows_lit),
            spawns: self.traffic.plan(frame.elapsed_seconds, &frame.day),
        }
    }

    /// Window occupancy sampler.
    pub const fn windows(&self) -> &WindowGrid {
        &self.windows
    }

    /// Traffic planner.
    pub const fn traffic(&self) -> &TrafficPlanner {
        &self.traffic
    }
}
