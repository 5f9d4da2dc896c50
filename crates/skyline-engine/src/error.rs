//! Error types for the Skyline engine binary.
//!
//! [`EngineError`] is the top-level error type that wraps every failure
//! mode during startup and the run.

/// Top-level error for the engine binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: skyline_core::config::ConfigError,
    },

    /// The `scene:` section could not be read.
    #[error("scene config error: {message}")]
    SceneConfig {
        /// Description of the failure.
        message: String,
    },

    /// The scene configuration was rejected.
    #[error("scene error: {source}")]
    Scene {
        /// The underlying scene error.
        #[from]
        source: skyline_scene::SceneError,
    },

    /// Building the initial sky state failed.
    #[error("tick error: {source}")]
    Tick {
        /// The underlying tick error.
        #[from]
        source: skyline_core::tick::TickError,
    },

    /// The driver loop failed.
    #[error("runner error: {source}")]
    Runner {
        /// The underlying runner error.
        #[from]
        source: skyline_core::runner::RunnerError,
    },
}
