//! Error types for rise/set and location handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

use suncalc_time::Epoch;

/// The Sun never reaches the requested altitude on the requested day.
///
/// The variant names follow the sign of the hour-angle cosine:
/// `SunNeverRise` when it exceeds 1 (the Sun stays below the target
/// altitude), `SunNeverSet` when it is below −1 (the Sun stays above it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEventError {
    /// The Sun stays below the target altitude all day (polar night side).
    SunNeverRise,
    /// The Sun stays above the target altitude all day (midnight sun side).
    SunNeverSet,
}

impl Display for SolarEventError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SunNeverRise => write!(f, "sun never rises to the requested altitude"),
            Self::SunNeverSet => write!(f, "sun never sets below the requested altitude"),
        }
    }
}

impl Error for SolarEventError {}

/// The Moon did not both rise and set during the UTC day searched.
///
/// Each variant carries the one event that *was* found, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LunarEventError {
    /// No rise found; carries the set instant if the Moon set that day.
    MoonNeverRise(Option<Epoch>),
    /// No set found; carries the rise instant if the Moon rose that day.
    MoonNeverSet(Option<Epoch>),
}

impl Display for LunarEventError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MoonNeverRise(None) => write!(f, "moon never rises"),
            Self::MoonNeverRise(Some(set)) => write!(f, "moon never rises (sets at {set})"),
            Self::MoonNeverSet(None) => write!(f, "moon never sets"),
            Self::MoonNeverSet(Some(rise)) => write!(f, "moon never sets (rises at {rise})"),
        }
    }
}

impl Error for LunarEventError {}

/// Geographic coordinates outside the valid range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum LocationError {
    /// Latitude not finite or outside [-90, 90] degrees.
    InvalidLatitude(f64),
    /// Longitude not finite or outside [-180, 180] degrees.
    InvalidLongitude(f64),
}

impl Display for LocationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLatitude(v) => write!(f, "invalid latitude {v}: expected [-90, 90]"),
            Self::InvalidLongitude(v) => {
                write!(f, "invalid longitude {v}: expected [-180, 180]")
            }
        }
    }
}

impl Error for LocationError {}
