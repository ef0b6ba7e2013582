//! Instant and Julian Day conversions for the suncalc engine.
//!
//! This crate provides:
//! - `Epoch`, an absolute instant stored as seconds past the Unix epoch
//! - Julian Day ↔ instant conversions and J2000 day counts
//! - UTC day truncation and hour-offset arithmetic
//! - `UtcTime`, a UTC calendar date-time for parsing and display
//!
//! All arithmetic is in UTC with no leap-second or time-zone handling.

pub mod error;
pub mod julian;
pub mod utc_time;

use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

pub use error::TimeError;
pub use julian::{
    J1970_JD, J2000_JD, SECONDS_PER_DAY, SECONDS_PER_HOUR, calendar_to_jd, days_in_month,
    jd_to_calendar, jd_to_unix_seconds, unix_seconds_to_jd,
};
pub use utc_time::UtcTime;

/// An absolute instant, represented as seconds past 1970-01-01T00:00:00Z.
///
/// This is the time type consumed and produced by every solver.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Epoch {
    unix_seconds: f64,
}

impl Epoch {
    /// Create an epoch from seconds past the Unix epoch.
    pub fn from_unix_seconds(s: f64) -> Self {
        Self { unix_seconds: s }
    }

    /// Create an epoch from a Julian Day.
    pub fn from_jd(jd: f64) -> Self {
        Self {
            unix_seconds: jd_to_unix_seconds(jd),
        }
    }

    /// The current wall-clock instant.
    pub fn now() -> Self {
        let s = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_secs_f64(),
            Err(e) => -e.duration().as_secs_f64(),
        };
        Self::from_unix_seconds(s)
    }

    /// Seconds past the Unix epoch.
    pub fn as_unix_seconds(self) -> f64 {
        self.unix_seconds
    }

    /// Julian Day.
    pub fn as_jd(self) -> f64 {
        unix_seconds_to_jd(self.unix_seconds)
    }

    /// Days elapsed since J2000.0 (JD 2451545.0).
    pub fn days_since_j2000(self) -> f64 {
        julian::days_since_j2000(self.as_jd())
    }

    /// The instant `hours` later (negative values move backwards).
    pub fn hours_later(self, hours: f64) -> Self {
        Self::from_unix_seconds(self.unix_seconds + hours * SECONDS_PER_HOUR)
    }

    /// 00:00:00 UTC of the calendar date containing this instant.
    ///
    /// Always UTC, never local time: the moon rise/set search depends on
    /// sampling a UTC day window.
    pub fn day_beginning(self) -> Self {
        Self::from_unix_seconds((self.unix_seconds / SECONDS_PER_DAY).floor() * SECONDS_PER_DAY)
    }

    /// Signed difference `self - other` in hours.
    pub fn hours_since(self, other: Epoch) -> f64 {
        (self.unix_seconds - other.unix_seconds) / SECONDS_PER_HOUR
    }
}

impl Display for Epoch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", UtcTime::from_epoch(*self))
    }
}
