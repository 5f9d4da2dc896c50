//! Configuration loading and typed config structures for Skyline.
//!
//! The configuration lives in `skyline-config.yaml` in the working
//! directory. This module defines strongly-typed structs that mirror the
//! YAML structure and a loader that reads, overrides, and validates it.
//! Every field has a serde default, so an empty file (or no file at all)
//! yields the stock 4-minute day and 10-minute year.

use std::path::Path;

use serde::Deserialize;

use crate::constants::{
    DEFAULT_DAY_DURATION_SECONDS, DEFAULT_DAYS_PER_SEASON, DEFAULT_SEASON_DURATION_SECONDS,
    DEFAULT_START_HOUR, DEFAULT_TICK_INTERVAL_MS, DEFAULT_TICK_SECONDS,
};
use crate::error::{TimeModelError, check_duration, check_hour};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but is outside its allowed range.
    #[error("invalid time configuration: {source}")]
    Time {
        /// The rejected value, as reported by the time model.
        #[from]
        source: TimeModelError,
    },

    /// An environment override could not be parsed.
    #[error("invalid value for {key}: {value}")]
    EnvOverride {
        /// Environment variable name.
        key: &'static str,
        /// The unparseable value.
        value: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
///
/// Mirrors the structure of `skyline-config.yaml`. The `scene:` section is
/// read separately by the engine, since the samplers live in their own crate.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SkylineConfig {
    /// Scene name and random seed.
    #[serde(default)]
    pub world: WorldConfig,

    /// Cycle durations and tick length.
    #[serde(default)]
    pub time: TimeConfig,

    /// Run bounds.
    #[serde(default)]
    pub simulation: SimulationBoundsConfig,

    /// Log level and format.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Frame output options.
    #[serde(default)]
    pub output: OutputConfig,
}

impl SkylineConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `SKYLINE_SEED` overrides `world.seed`
    /// - `SKYLINE_MAX_TICKS` overrides `simulation.max_ticks`
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string, then apply environment
    /// overrides and validate.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config = Self::parse_without_env(yaml)?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse and validate without consulting the environment.
    pub fn parse_without_env(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.time.validate()?;
        Ok(config)
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("SKYLINE_SEED") {
            self.world.seed = value.trim().parse().map_err(|_err| ConfigError::EnvOverride {
                key: "SKYLINE_SEED",
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup("SKYLINE_MAX_TICKS") {
            self.simulation.max_ticks =
                value.trim().parse().map_err(|_err| ConfigError::EnvOverride {
                    key: "SKYLINE_MAX_TICKS",
                    value: value.clone(),
                })?;
        }
        Ok(())
    }
}

/// Scene-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Human-readable scene name.
    #[serde(default = "default_world_name")]
    pub name: String,

    /// Seed for every decorative random sampler.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            name: default_world_name(),
            seed: default_seed(),
        }
    }
}

/// Cycle durations and tick length.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimeConfig {
    /// Real seconds for one full simulated day.
    #[serde(default = "default_day_duration_seconds")]
    pub day_duration_seconds: f64,

    /// Real seconds for one season. A year is four seasons.
    #[serde(default = "default_season_duration_seconds")]
    pub season_duration_seconds: f64,

    /// Hour of day at elapsed time zero.
    #[serde(default = "default_start_hour")]
    pub start_hour: f64,

    /// Simulated seconds added per tick.
    #[serde(default = "default_tick_seconds")]
    pub tick_seconds: f64,

    /// Wall-clock milliseconds between ticks.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Calendar days per season, used for the day counter.
    #[serde(default = "default_days_per_season")]
    pub days_per_season: u32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            day_duration_seconds: default_day_duration_seconds(),
            season_duration_seconds: default_season_duration_seconds(),
            start_hour: default_start_hour(),
            tick_seconds: default_tick_seconds(),
            tick_interval_ms: default_tick_interval_ms(),
            days_per_season: default_days_per_season(),
        }
    }
}

impl TimeConfig {
    /// Check every duration and the start hour.
    pub fn validate(&self) -> Result<(), TimeModelError> {
        check_duration("day_duration_seconds", self.day_duration_seconds)?;
        check_duration("season_duration_seconds", self.season_duration_seconds)?;
        check_duration("tick_seconds", self.tick_seconds)?;
        check_hour(self.start_hour)?;
        if self.days_per_season == 0 {
            return Err(TimeModelError::ZeroDaysPerSeason);
        }
        Ok(())
    }
}

/// Run bounds for the driver loop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SimulationBoundsConfig {
    /// Maximum number of ticks before the run ends (0 = unlimited).
    #[serde(default)]
    pub max_ticks: u64,

    /// Maximum wall-clock seconds before the run ends (0 = unlimited).
    #[serde(default)]
    pub max_real_time_seconds: u64,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins if set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Frame output options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Write every frame to stdout as one JSON line.
    #[serde(default)]
    pub json_frames: bool,

    /// Log a frame summary every N ticks (0 = never).
    #[serde(default = "default_summary_every_ticks")]
    pub summary_every_ticks: u64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json_frames: false,
            summary_every_ticks: default_summary_every_ticks(),
        }
    }
}

fn default_world_name() -> String {
    "Skyline".to_owned()
}

const fn default_seed() -> u64 {
    42
}

const fn default_day_duration_seconds() -> f64 {
    DEFAULT_DAY_DURATION_SECONDS
}

const fn default_season_duration_seconds() -> f64 {
    DEFAULT_SEASON_DURATION_SECONDS
}

const fn default_start_hour() -> f64 {
    DEFAULT_START_HOUR
}

const fn default_tick_seconds() -> f64 {
    DEFAULT_TICK_SECONDS
}

const fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

const fn default_days_per_season() -> u32 {
    DEFAULT_DAYS_PER_SEASON
}

fn default_log_level() -> String {
    "info".to_owned()
}

const fn default_summary_every_ticks() -> u64 {
    100
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SkylineConfig::default();
        assert_eq!(config.world.seed, 42);
        assert!(config.time.validate().is_ok());
        assert_eq!(config.time.tick_interval_ms, 100);
        assert_eq!(config.time.days_per_season, 30);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
world:
  name: "Harbor"
  seed: 7

time:
  day_duration_seconds: 120.0
  season_duration_seconds: 60.0
  start_hour: 0.0
  tick_seconds: 0.5
  tick_interval_ms: 50
  days_per_season: 10

simulation:
  max_ticks: 1000
  max_real_time_seconds: 30

logging:
  level: debug
  format: json

output:
  json_frames: true
  summary_every_ticks: 10
"#;
        let config = SkylineConfig::parse_without_env(yaml).unwrap();
        assert_eq!(config.world.name, "Harbor");
        assert_eq!(config.world.seed, 7);
        assert_eq!(config.time.tick_interval_ms, 50);
        assert_eq!(config.time.days_per_season, 10);
        assert_eq!(config.simulation.max_ticks, 1000);
        assert_eq!(config.simulation.max_real_time_seconds, 30);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.output.json_frames);
        assert_eq!(config.output.summary_every_ticks, 10);
    }

    #[test]
    fn partial_yaml_uses_defaults() {
        let config = SkylineConfig::parse_without_env("world:\n  seed: 9\n").unwrap();
        assert_eq!(config.world.seed, 9);
        assert_eq!(config.world.name, "Skyline");
        assert_eq!(config.time, TimeConfig::default());
    }

    #[test]
    fn empty_yaml_is_default() {
        let config = SkylineConfig::parse_without_env("   \n").unwrap();
        assert_eq!(config, SkylineConfig::default());
    }

    #[test]
    fn zero_day_duration_is_rejected() {
        let result = SkylineConfig::parse_without_env("time:\n  day_duration_seconds: 0.0\n");
        assert!(matches!(result, Err(ConfigError::Time { .. })));
    }

    #[test]
    fn start_hour_must_be_inside_the_day() {
        let result = SkylineConfig::parse_without_env("time:\n  start_hour: 24.0\n");
        assert!(matches!(result, Err(ConfigError::Time { .. })));
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        let result = SkylineConfig::parse_without_env("time: [unclosed");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = SkylineConfig::default();
        config
            .apply_env_overrides(|key| match key {
                "SKYLINE_SEED" => Some("1234".to_owned()),
                "SKYLINE_MAX_TICKS" => Some(" 50 ".to_owned()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.world.seed, 1234);
        assert_eq!(config.simulation.max_ticks, 50);
    }

    #[test]
    fn bad_env_override_is_reported() {
        let mut config = SkylineConfig::default();
        let result = config.apply_env_overrides(|key| {
            (key == "SKYLINE_SEED").then(|| "not-a-number".to_owned())
        });
        assert!(matches!(
            result,
            Err(ConfigError::EnvOverride { key: "SKYLINE_SEED", .. })
        ));
    }
}
