//! UTC calendar date/time with sub-second precision.
//!
//! `UtcTime` is the human-facing form of an [`Epoch`]: it is what callers
//! parse from the command line and what results are printed as.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::Epoch;
use crate::error::TimeError;
use crate::julian::{
    SECONDS_PER_DAY, SECONDS_PER_HOUR, calendar_to_jd, days_in_month, jd_to_calendar,
    jd_to_unix_seconds,
};

const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight UTC at the start of the given date.
    pub fn date(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Check that every field lies inside its calendar range.
    pub fn validate(&self) -> Result<(), TimeError> {
        let max_day = days_in_month(self.year, self.month)
            .ok_or_else(|| TimeError::InvalidDate(format!("month {} out of range", self.month)))?;
        if self.day == 0 || self.day > max_day {
            return Err(TimeError::InvalidDate(format!(
                "day {} out of range for {:04}-{:02}",
                self.day, self.year, self.month
            )));
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidDate(format!("hour {} out of range", self.hour)));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidDate(format!(
                "minute {} out of range",
                self.minute
            )));
        }
        if !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidDate(format!(
                "second {} out of range",
                self.second
            )));
        }
        Ok(())
    }

    /// Convert to an instant.
    pub fn to_epoch(&self) -> Epoch {
        // Midnight JD ends in .5 and converts to whole Unix seconds exactly.
        let midnight = jd_to_unix_seconds(calendar_to_jd(self.year, self.month, f64::from(self.day)));
        let seconds_of_day = f64::from(self.hour) * SECONDS_PER_HOUR
            + f64::from(self.minute) * 60.0
            + self.second;
        Epoch::from_unix_seconds(midnight + seconds_of_day)
    }

    /// Convert an instant back to a UTC calendar date.
    ///
    /// Seconds are rounded to the microsecond, carrying into the minute,
    /// hour and day, so the fields always print as a valid timestamp.
    pub fn from_epoch(epoch: Epoch) -> Self {
        let mut midnight = epoch.day_beginning();
        let mut seconds_of_day = ((epoch.as_unix_seconds() - midnight.as_unix_seconds())
            * MICROS_PER_SECOND)
            .round()
            / MICROS_PER_SECOND;
        if seconds_of_day >= SECONDS_PER_DAY {
            midnight = midnight.hours_later(24.0);
            seconds_of_day -= SECONDS_PER_DAY;
        }

        // Take the calendar date at noon so the JD never straddles a day edge.
        let (year, month, day_frac) = jd_to_calendar(midnight.as_jd() + 0.5);
        let day = day_frac.floor() as u32;

        let hour = (seconds_of_day / SECONDS_PER_HOUR).floor() as u32;
        let minute = ((seconds_of_day % SECONDS_PER_HOUR) / 60.0).floor() as u32;
        let second = seconds_of_day % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl From<Epoch> for UtcTime {
    fn from(epoch: Epoch) -> Self {
        Self::from_epoch(epoch)
    }
}

impl From<UtcTime> for Epoch {
    fn from(utc: UtcTime) -> Self {
        utc.to_epoch()
    }
}

impl Display for UtcTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDThh:mm:ss[Z]` or a bare `YYYY-MM-DD` (midnight UTC).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_end_matches('Z');
        let (date_part, time_part) = match s.split_once('T') {
            Some((d, t)) => (d, Some(t)),
            None => (s, None),
        };

        let date_fields: Vec<&str> = date_part.split('-').collect();
        // A leading '-' (negative year) is not supported.
        if date_fields.len() != 3 {
            return Err(TimeError::Parse(format!(
                "expected YYYY-MM-DD[Thh:mm:ss[Z]], got {s}"
            )));
        }
        let year: i32 = parse_field(date_fields[0], "year")?;
        let month: u32 = parse_field(date_fields[1], "month")?;
        let day: u32 = parse_field(date_fields[2], "day")?;

        let (hour, minute, second) = match time_part {
            None => (0, 0, 0.0),
            Some(t) => {
                let time_fields: Vec<&str> = t.split(':').collect();
                if time_fields.len() != 3 {
                    return Err(TimeError::Parse(format!("expected hh:mm:ss, got {t}")));
                }
                (
                    parse_field(time_fields[0], "hour")?,
                    parse_field(time_fields[1], "minute")?,
                    parse_field(time_fields[2], "second")?,
                )
            }
        };

        let utc = Self::new(year, month, day, hour, minute, second);
        utc.validate()?;
        Ok(utc)
    }
}

fn parse_field<T: FromStr>(text: &str, name: &str) -> Result<T, TimeError>
where
    T::Err: Display,
{
    text.parse()
        .map_err(|e| TimeError::Parse(format!("{name} '{text}': {e}")))
}
