//! Skyline engine binary.
//!
//! Wires the time model, the scene samplers and the driver loop together.
//! It loads configuration, initializes logging, samples the scene from the
//! configured seed, and ticks the sky until a bound is reached or the
//! process is interrupted.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `skyline-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Build the sky state (time model and clock)
//! 4. Sample the scene from the world seed
//! 5. Create driver controls and install the Ctrl-C handler
//! 6. Run the tick loop
//! 7. Log the result

mod error;
mod scene_callback;

use std::path::Path;
use std::sync::Arc;

use skyline_core::config::{LogFormat, LoggingConfig, SkylineConfig};
use skyline_core::operator::DriverControls;
use skyline_core::runner;
use skyline_core::tick::SkyState;
use skyline_scene::{Scene, SceneConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::scene_callback::SceneCallback;

const CONFIG_FILE: &str = "skyline-config.yaml";

/// Application entry point for the Skyline engine.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the run fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration. Logging depends on it, so this comes first.
    let config = load_config()?;

    // 2. Initialize structured logging.
    init_logging(&config.logging);
    info!(
        world_name = config.world.name,
        seed = config.world.seed,
        day_duration_seconds = config.time.day_duration_seconds,
        season_duration_seconds = config.time.season_duration_seconds,
        tick_seconds = config.time.tick_seconds,
        "Configuration loaded"
    );

    // 3. Build the sky state.
    let mut state = SkyState::new(&config.time)?;
    info!(
        year_duration_seconds = state.model.year_duration_seconds(),
        start_hour = config.time.start_hour,
        "Time model initialized"
    );

    // 4. Sample the scene.
    let scene_config = load_scene_config()?;
    let scene = Scene::new(&scene_config, config.world.seed)?;
    info!(
        stars = scene.stars.len(),
        clouds = scene.clouds.len(),
        windows = scene.windows().len(),
        "Scene sampled"
    );

    // 5. Driver controls and Ctrl-C.
    let controls = Arc::new(DriverControls::new(
        config.time.tick_interval_ms,
        &config.simulation,
    ));
    let stop_handle = Arc::clone(&controls);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Interrupt received, stopping after the current tick");
                stop_handle.request_stop();
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for Ctrl-C");
            }
        }
    });

    // 6. Run.
    let mut callback = SceneCallback::new(
        scene,
        config.output.json_frames,
        config.output.summary_every_ticks,
    );
    let result = runner::run_simulation(&mut state, &controls, &mut callback)
        .await
        .map_err(EngineError::from)?;

    // 7. Log results.
    runner::log_run_end(&result);
    info!(
        end_reason = ?result.end_reason,
        total_ticks = result.total_ticks,
        "skyline-engine shutdown complete"
    );

    Ok(())
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
///
/// Logs go to stderr so stdout stays free for JSON frames.
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    match logging.format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }
}

/// Load the main configuration from `skyline-config.yaml`.
///
/// Looks for the file relative to the current working directory. Without a
/// file, defaults apply and environment overrides still do.
fn load_config() -> Result<SkylineConfig, EngineError> {
    let config_path = Path::new(CONFIG_FILE);
    if config_path.exists() {
        Ok(SkylineConfig::from_file(config_path)?)
    } else {
        let mut config = SkylineConfig::default();
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }
}

/// Load the `scene:` section from `skyline-config.yaml`.
///
/// Missing file or missing section yields the default scene.
fn load_scene_config() -> Result<SceneConfig, EngineError> {
    let config_path = Path::new(CONFIG_FILE);
    if !config_path.exists() {
        info!("Config file not found, using default scene");
        return Ok(SceneConfig::default());
    }

    let contents = std::fs::read_to_string(config_path).map_err(|e| EngineError::SceneConfig {
        message: format!("failed to read config file: {e}"),
    })?;
    scene_config_from_yaml(&contents)
}

fn scene_config_from_yaml(contents: &str) -> Result<SceneConfig, EngineError> {
    if contents.trim().is_empty() {
        return Ok(SceneConfig::default());
    }

    let raw: serde_yml::Value =
        serde_yml::from_str(contents).map_err(|e| EngineError::SceneConfig {
            message: format!("failed to parse config YAML: {e}"),
        })?;

    raw.get("scene").map_or_else(
        || Ok(SceneConfig::default()),
        |scene_value| {
            serde_yml::from_value(scene_value.clone()).map_err(|e| EngineError::SceneConfig {
                message: format!("failed to parse scene config: {e}"),
            })
        },
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn scene_section_is_optional() {
        let config = scene_config_from_yaml("time:\n  day_duration_seconds: 60\n").unwrap();
        assert_eq!(config, SceneConfig::default());
        assert_eq!(scene_config_from_yaml("").unwrap(), SceneConfig::default());
    }

    #[test]
    fn scene_section_overrides_defaults() {
        let yaml = "scene:\n  star_count: 5\n  max_pedestrians: 0\n";
        let config = scene_config_from_yaml(yaml).unwrap();
        assert_eq!(config.star_count, 5);
        assert_eq!(config.max_pedestrians, 0);
        assert_eq!(config.cloud_count, 8);
    }

    #[test]
    fn malformed_scene_section_is_an_error() {
        let yaml = "scene:\n  star_count: many\n";
        assert!(matches!(
            scene_config_from_yaml(yaml),
            Err(EngineError::SceneConfig { .. })
        ));
    }
}
