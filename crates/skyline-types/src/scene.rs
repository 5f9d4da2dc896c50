//! Decorative scene elements produced by the seeded samplers.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{CarColor, CloudSize, Heading};

/// One twinkling star.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Star {
    /// Horizontal position, percent.
    pub x_percent: f64,
    /// Vertical position, percent (upper part of the sky only).
    pub y_percent: f64,
    /// Seconds before the twinkle animation starts.
    pub twinkle_delay_seconds: f64,
    /// Length of one twinkle cycle in seconds.
    pub twinkle_duration_seconds: f64,
}

/// One drifting cloud.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Cloud {
    /// Sprite size.
    pub size: CloudSize,
    /// Vertical position, percent.
    pub top_percent: f64,
    /// Seconds before the drift animation starts.
    pub drift_delay_seconds: f64,
}

/// What kind of traffic entered the street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum TrafficKind {
    /// A car driving left to right.
    Car {
        /// Body colour.
        color: CarColor,
    },
    /// A pedestrian on the sidewalk.
    Pedestrian {
        /// Walking direction.
        heading: Heading,
    },
}

/// A traffic participant entering the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TrafficSpawn {
    /// Car or pedestrian.
    pub kind: TrafficKind,
    /// Elapsed simulated seconds at spawn.
    pub spawned_at: f64,
    /// Speed in pixels per second.
    pub speed_px_per_second: f64,
    /// Seconds needed to cross the viewport; the element is removed afterwards.
    pub crossing_seconds: f64,
}

impl TrafficSpawn {
    /// Elapsed time at which the element leaves the scene.
    pub fn despawn_at(&self) -> f64 {
        self.spawned_at + self.crossing_seconds
    }
}

/// Window occupancy after one update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct WindowUpdate {
    /// Indices of windows that should carry the lit style.
    pub lit: Vec<u32>,
    /// Index of a window whose occupancy flipped this update, if any.
    pub toggled: Option<u32>,
}
