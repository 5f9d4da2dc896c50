//! Error types for the time model.
//!
//! Every variant is a precondition violation. The model never clamps an
//! invalid input into range; it rejects it so configuration bugs surface at
//! the boundary instead of as a frozen or jumping sky.

/// Errors raised by the pure time-model functions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimeModelError {
    /// Elapsed time was negative or not a finite number.
    #[error("elapsed seconds must be finite and non-negative, got {elapsed}")]
    InvalidElapsed {
        /// The rejected value.
        elapsed: f64,
    },

    /// A cycle duration was zero, negative, or not finite.
    #[error("{name} must be finite and positive, got {value}")]
    InvalidDuration {
        /// Which duration was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// An hour of day outside `[0, 24)` reached a celestial or sky function.
    #[error("hour of day must be in [0, 24), got {hour}")]
    HourOutOfRange {
        /// The rejected hour.
        hour: f64,
    },

    /// The calendar needs at least one day per season.
    #[error("days per season must be at least 1")]
    ZeroDaysPerSeason,
}

/// Reject a non-finite or negative elapsed time.
pub(crate) fn check_elapsed(elapsed: f64) -> Result<f64, TimeModelError> {
    if elapsed.is_finite() && elapsed >= 0.0 {
        Ok(elapsed)
    } else {
        Err(TimeModelError::InvalidElapsed { elapsed })
    }
}

/// Reject a non-finite or non-positive duration.
pub(crate) fn check_duration(name: &'static str, value: f64) -> Result<f64, TimeModelError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TimeModelError::InvalidDuration { name, value })
    }
}

/// Reject an hour outside `[0, 24)`.
pub(crate) fn check_hour(hour: f64) -> Result<f64, TimeModelError> {
    if (0.0..crate::constants::HOURS_PER_DAY).contains(&hour) {
        Ok(hour)
    } else {
        Err(TimeModelError::HourOutOfRange { hour })
    }
}
