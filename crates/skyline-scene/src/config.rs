//! Scene sampler configuration.
//!
//! Deserialized from the `scene:` section of `skyline-config.yaml`. Every
//! field has a default matching the stock city scene.

use serde::Deserialize;

use crate::error::SceneError;

/// Tunables for every decorative sampler.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneConfig {
    /// Number of stars in the field.
    #[serde(default = "default_star_count")]
    pub star_count: u32,

    /// Stars are placed above this percentage of the sky height.
    #[serde(default = "default_star_max_top_percent")]
    pub star_max_top_percent: f64,

    /// Number of drifting clouds.
    #[serde(default = "default_cloud_count")]
    pub cloud_count: u32,

    /// Clouds are placed above this percentage of the sky height.
    #[serde(default = "default_cloud_max_top_percent")]
    pub cloud_max_top_percent: f64,

    /// Upper bound for a cloud's drift start delay.
    #[serde(default = "default_cloud_max_delay_seconds")]
    pub cloud_max_delay_seconds: f64,

    /// Number of building windows.
    #[serde(default = "default_window_count")]
    pub window_count: u32,

    /// Chance that a window is occupied (lit at night).
    #[serde(default = "default_window_lit_probability")]
    pub window_lit_probability: f64,

    /// Per-tick chance at night that one window flips occupancy.
    #[serde(default = "default_window_toggle_probability")]
    pub window_toggle_probability: f64,

    /// Viewport width in pixels, used for crossing times.
    #[serde(default = "default_viewport_width_px")]
    pub viewport_width_px: f64,

    /// Simulated seconds after start at which the opening cars appear.
    #[serde(default = "default_initial_car_delays")]
    pub initial_car_delays_seconds: Vec<f64>,

    /// Shortest gap between traffic checks.
    #[serde(default = "default_traffic_check_min_seconds")]
    pub traffic_check_min_seconds: f64,

    /// Longest gap between traffic checks.
    #[serde(default = "default_traffic_check_max_seconds")]
    pub traffic_check_max_seconds: f64,

    /// Most cars on the street at once.
    #[serde(default = "default_max_cars")]
    pub max_cars: u32,

    /// Chance a traffic check adds a car.
    #[serde(default = "default_car_spawn_probability")]
    pub car_spawn_probability: f64,

    /// Slowest car, pixels per second.
    #[serde(default = "default_car_speed_min")]
    pub car_speed_min_px: f64,

    /// Fastest car, pixels per second.
    #[serde(default = "default_car_speed_max")]
    pub car_speed_max_px: f64,

    /// Most pedestrians on the sidewalk at once.
    #[serde(default = "default_max_pedestrians")]
    pub max_pedestrians: u32,

    /// Chance a traffic check adds a pedestrian.
    #[serde(default = "default_pedestrian_spawn_probability")]
    pub pedestrian_spawn_probability: f64,

    /// Slowest pedestrian, pixels per second.
    #[serde(default = "default_pedestrian_speed_min")]
    pub pedestrian_speed_min_px: f64,

    /// Fastest pedestrian, pixels per second.
    #[serde(default = "default_pedestrian_speed_max")]
    pub pedestrian_speed_max_px: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            star_count: default_star_count(),
            star_max_top_percent: default_star_max_top_percent(),
            cloud_count: default_cloud_count(),
            cloud_max_top_percent: default_cloud_max_top_percent(),
            cloud_max_delay_seconds: default_cloud_max_delay_seconds(),
            window_count: default_window_count(),
            window_lit_probability: default_window_lit_probability(),
            window_toggle_probability: default_window_toggle_probability(),
            viewport_width_px: default_viewport_width_px(),
            initial_car_delays_seconds: default_initial_car_delays(),
            traffic_check_min_seconds: default_traffic_check_min_seconds(),
            traffic_check_max_seconds: default_traffic_check_max_seconds(),
            max_cars: default_max_cars(),
            car_spawn_probability: default_car_spawn_probability(),
            car_speed_min_px: default_car_speed_min(),
            car_speed_max_px: default_car_speed_max(),
            max_pedestrians: default_max_pedestrians(),
            pedestrian_spawn_probability: default_pedestrian_spawn_probability(),
            pedestrian_speed_min_px: default_pedestrian_speed_min(),
            pedestrian_speed_max_px: default_pedestrian_speed_max(),
        }
    }
}

impl SceneConfig {
    /// Reject values the samplers cannot draw from.
    pub fn validate(&self) -> Result<(), SceneError> {
        for (name, value) in [
            ("window_lit_probability", self.window_lit_probability),
            ("window_toggle_probability", self.window_toggle_probability),
            ("car_spawn_probability", self.car_spawn_probability),
            ("pedestrian_spawn_probability", self.pedestrian_spawn_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SceneError::Probability { name, value });
            }
        }

        for (name, value) in [
            ("viewport_width_px", self.viewport_width_px),
            ("star_max_top_percent", self.star_max_top_percent),
            ("cloud_max_top_percent", self.cloud_max_top_percent),
            ("cloud_max_delay_seconds", self.cloud_max_delay_seconds),
            ("car_speed_min_px", self.car_speed_min_px),
            ("pedestrian_speed_min_px", self.pedestrian_speed_min_px),
            ("traffic_check_min_seconds", self.traffic_check_min_seconds),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SceneError::NotPositive { name, value });
            }
        }

        for (name, min, max) in [
            ("car_speed", self.car_speed_min_px, self.car_speed_max_px),
            (
                "pedestrian_speed",
                self.pedestrian_speed_min_px,
                self.pedestrian_speed_max_px,
            ),
            (
                "traffic_check",
                self.traffic_check_min_seconds,
                self.traffic_check_max_seconds,
            ),
        ] {
            if !(max.is_finite() && min < max) {
                return Err(SceneError::EmptyRange { name, min, max });
            }
        }

        if let Some(&delay) = self
            .initial_car_delays_seconds
            .iter()
            .find(|delay| !(delay.is_finite() && **delay >= 0.0))
        {
            return Err(SceneError::NotPositive {
                name: "initial_car_delays_seconds",
                value: delay,
            });
        }

        Ok(())
    }
}

const fn default_star_count() -> u32 {
    100
}

const fn default_star_max_top_percent() -> f64 {
    60.0
}

const fn default_cloud_count() -> u32 {
    8
}

const fn default_cloud_max_top_percent() -> f64 {
    30.0
}

const fn default_cloud_max_delay_seconds() -> f64 {
    20.0
}

const fn default_window_count() -> u32 {
    48
}

const fn default_window_lit_probability() -> f64 {
    0.7
}

const fn default_window_toggle_probability() -> f64 {
    0.01
}

const fn default_viewport_width_px() -> f64 {
    1280.0
}

fn default_initial_car_delays() -> Vec<f64> {
    vec![1.0, 3.0]
}

const fn default_traffic_check_min_seconds() -> f64 {
    3.0
}

const fn default_traffic_check_max_seconds() -> f64 {
    8.0
}

const fn default_max_cars() -> u32 {
    3
}

const fn default_car_spawn_probability() -> f64 {
    0.4
}

const fn default_car_speed_min() -> f64 {
    50.0
}

const fn default_car_speed_max() -> f64 {
    80.0
}

const fn default_max_pedestrians() -> u32 {
    2
}

const fn default_pedestrian_spawn_probability() -> f64 {
    0.3
}

const fn default_pedestrian_speed_min() -> f64 {
    30.0
}

const fn default_pedestrian_speed_max() -> f64 {
    50.0
}
