//! Sky colour bucket and ambient layer opacities.
//!
//! The bucket is read from the celestial regime table, so sky colour and
//! sun/moon placement switch at exactly the same hours. Star and cloud
//! opacities are binary per hour; any fade between them is left to the
//! renderer.

use skyline_types::SkyClassification;

use crate::celestial::regime_for_hour;
use crate::constants::{
    CLOUDS_DAY_OPACITY, CLOUDS_NIGHT_OPACITY, DAY_START_HOUR, DUSK_START_HOUR, NIGHT_START_HOUR,
};
use crate::error::TimeModelError;

/// Classify an hour of day in `[0, 24)`.
pub fn sky_classification(hour_of_day: f64) -> Result<SkyClassification, TimeModelError> {
    let regime = regime_for_hour(hour_of_day)?;

    let stars_visible = hour_of_day >= NIGHT_START_HOUR || hour_of_day < DAY_START_HOUR;
    let sun_down = hour_of_day >= DUSK_START_HOUR || hour_of_day < DAY_START_HOUR;

    Ok(SkyClassification {
        bucket: regime.bucket,
        stars_opacity: if stars_visible { 1.0 } else { 0.0 },
        clouds_opacity: if sun_down {
            CLOUDS_NIGHT_OPACITY
        } else {
            CLOUDS_DAY_OPACITY
        },
    })
}
