//! Street lamp and window switches.

use skyline_types::{DayState, LightingState};

/// Lamps and windows light up whenever the sun is below the horizon.
pub const fn lighting_state(day: &DayState) -> LightingState {
    LightingState {
        street_lamps_on: day.is_night,
        windows_lit: day.is_night,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::day::day_state;

    #[test]
    fn lights_follow_the_sun() {
        let dusk = day_state(0.0, 240.0, 18.5).unwrap();
        let lit = lighting_state(&dusk);
        assert!(lit.street_lamps_on);
        assert!(lit.windows_lit);

        let morning = day_state(0.0, 240.0, 9.0).unwrap();
        assert_eq!(
            lighting_state(&morning),
            LightingState {
                street_lamps_on: false,
                windows_lit: false,
            }
        );
    }
}
