//! Enumeration types for the Skyline day/night cycle.
//!
//! Calendar enums ([`Season`], [`Month`]), the time-of-day bucket shared by
//! the celestial and sky models, and the small presentation enums used by
//! the scene samplers.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Seasons
// ---------------------------------------------------------------------------

/// A season in the simulated annual cycle.
///
/// Seasons are ordered Spring, Summer, Autumn, Winter and cycle back to
/// Spring. Each season lasts one configured season duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Season {
    /// Months March, April, May.
    Spring,
    /// Months June, July, August.
    Summer,
    /// Months September, October, November.
    Autumn,
    /// Months December, January, February.
    Winter,
}

impl Season {
    /// All seasons in cycle order.
    pub const ALL: [Self; 4] = [Self::Spring, Self::Summer, Self::Autumn, Self::Winter];

    /// Zero-based position in the annual cycle (Spring = 0).
    pub const fn index(self) -> u8 {
        match self {
            Self::Spring => 0,
            Self::Summer => 1,
            Self::Autumn => 2,
            Self::Winter => 3,
        }
    }

    /// Look up a season by its cycle position.
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Spring),
            1 => Some(Self::Summer),
            2 => Some(Self::Autumn),
            3 => Some(Self::Winter),
            _ => None,
        }
    }


    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
            Self::Winter => "Winter",
        }
    }

    /// Sky style class applied by the renderer.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Spring => "sky-spring",
            Self::Summer => "sky-summer",
            Self::Autumn => "sky-autumn",
            Self::Winter => "sky-winter",
        }
    }
}

// ---------------------------------------------------------------------------
// Months
// ---------------------------------------------------------------------------

/// A calendar month. Discriminant order matches the calendar (January = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Month {
    /// Calendar index 0.
    January,
    /// Calendar index 1.
    February,
    /// Calendar index 2.
    March,
    /// Calendar index 3.
    April,
    /// Calendar index 4.
    May,
    /// Calendar index 5.
    June,
    /// Calendar index 6.
    July,
    /// Calendar index 7.
    August,
    /// Calendar index 8.
    September,
    /// Calendar index 9.
    October,
    /// Calendar index 10.
    November,
    /// Calendar index 11.
    December,
}

impl Month {
    /// Calendar index in `0..12` (January = 0, December = 11).
    pub const fn index(self) -> u8 {
        match self {
            Self::January => 0,
            Self::February => 1,
            Self::March => 2,
            Self::April => 3,
            Self::May => 4,
            Self::June => 5,
            Self::July => 6,
            Self::August => 7,
            Self::September => 8,
            Self::October => 9,
            Self::November => 10,
            Self::December => 11,
        }
    }


    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }
}

// ---------------------------------------------------------------------------
// Time of day
// ---------------------------------------------------------------------------

/// Coarse time-of-day bucket.
///
/// The same buckets select both the celestial interpolation regime and the
/// sky colour class, so the two can never disagree about where a boundary is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum TimeBucket {
    /// 04:00 to 06:00. Moon setting, sun rising.
    Dawn,
    /// 06:00 to 18:00. Sun arcs across the sky.
    Day,
    /// 18:00 to 20:00. Sun setting, moon rising.
    Dusk,
    /// 20:00 to 04:00, wrapping through midnight.
    Night,
}

impl TimeBucket {
    /// Sky style class applied by the renderer.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Dawn => "dawn",
            Self::Day => "day",
            Self::Dusk => "dusk",
            Self::Night => "night",
        }
    }
}

// ---------------------------------------------------------------------------
// Scene decoration
// ---------------------------------------------------------------------------

/// Size class of a drifting cloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum CloudSize {
    /// Smallest cloud sprite.
    Small,
    /// Mid-sized cloud sprite.
    Medium,
    /// Largest cloud sprite.
    Large,
}

impl CloudSize {
    /// All sizes, in sampling order.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];
}

/// Paint colour of a car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum CarColor {
    /// The stylesheet's default car colour.
    Default,
    /// Blue body.
    Blue,
    /// Green body.
    Green,
    /// Yellow body.
    Yellow,
}

impl CarColor {
    /// All colours, in sampling order.
    pub const ALL: [Self; 4] = [Self::Default, Self::Blue, Self::Green, Self::Yellow];
}

/// Direction a pedestrian walks across the street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Heading {
    /// Enters at the left edge, leaves at the right.
    Right,
    /// Enters at the right edge, leaves at the left.
    Left,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_index_round_trips_through_cycle() {
        for season in Season::ALL {
            assert_eq!(Season::from_index(season.index()), Some(season));
        }
        assert_eq!(Season::from_index(4), None);
    }

    #[test]
    fn season_classes_are_distinct() {
        assert_eq!(Season::Spring.css_class(), "sky-spring");
        assert_eq!(Season::Winter.css_class(), "sky-winter");
        let mut classes: Vec<&str> = Season::ALL.into_iter().map(Season::css_class).collect();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), 4);
    }

    #[test]
    fn month_indices_follow_calendar() {
        assert_eq!(Month::March.index(), 2);
        assert_eq!(Month::December.index(), 11);
        assert_eq!(Month::January.index(), 0);
    }
}
