//! Julian Day arithmetic.
//!
//! The Julian Day used here is the plain UTC day count: no leap seconds and
//! no TT/TDB offset, which is all a one-arcminute ephemeris needs.
//!
//! Calendar conversions follow Meeus, *Astronomical Algorithms*, ch. 7
//! (proleptic Gregorian calendar).

/// Julian Day of 1970-01-01T12:00:00Z (the Unix epoch sits at `J1970_JD - 0.5`).
pub const J1970_JD: f64 = 2_440_588.0;

/// Julian Day of the J2000.0 epoch (2000-01-01T12:00:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Seconds in one hour.
pub const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Convert seconds since the Unix epoch to a Julian Day.
///
/// `jd = s / 86400 - 0.5 + 2440588.0`
pub fn unix_seconds_to_jd(unix_seconds: f64) -> f64 {
    unix_seconds / SECONDS_PER_DAY - 0.5 + J1970_JD
}

/// Convert a Julian Day to seconds since the Unix epoch.
///
/// Inverse of [`unix_seconds_to_jd`].
pub fn jd_to_unix_seconds(jd: f64) -> f64 {
    (jd + 0.5 - J1970_JD) * SECONDS_PER_DAY
}

/// Days elapsed since J2000.0 for a given Julian Day.
pub fn days_since_j2000(jd: f64) -> f64 {
    jd - J2000_JD
}

/// Convert a Gregorian calendar date to a Julian Day.
///
/// `day` may carry a fraction (e.g. `21.5` is noon on the 21st).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (f64::from(y) / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (f64::from(y) + 4716.0)).floor() + (30.6001 * (f64::from(m) + 1.0)).floor() + day + b
        - 1524.5
}

/// Convert a Julian Day to a Gregorian calendar date.
///
/// Returns `(year, month, day_with_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}

/// Number of days in a Gregorian month, or `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if leap => Some(29),
        2 => Some(28),
        _ => None,
    }
}
