//! Error types for the scene samplers.

/// Invalid scene configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    /// A probability was outside `[0, 1]`.
    #[error("{name} must be a probability in [0, 1], got {value}")]
    Probability {
        /// Config field name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A size, speed or duration was zero, negative or not finite.
    #[error("{name} must be positive and finite, got {value}")]
    NotPositive {
        /// Config field name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A `min..max` pair does not describe a non-empty range.
    #[error("{name} range is empty: min {min}, max {max}")]
    EmptyRange {
        /// Range name (without the `_min`/`_max` suffix).
        name: &'static str,
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
}
