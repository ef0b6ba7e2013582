//! Property checks for instant ↔ Julian Day conversion and UTC day bounds.
//!
//! Sweeps a deterministic grid of instants between 1900 and 2100.

use suncalc_time::{Epoch, SECONDS_PER_DAY, UtcTime};

/// Instants from 1900 to 2100, stepping an irregular ~7.3 days.
fn sample_instants() -> impl Iterator<Item = Epoch> {
    let start = UtcTime::date(1900, 1, 1).to_epoch().as_unix_seconds();
    let end = UtcTime::date(2100, 1, 1).to_epoch().as_unix_seconds();
    let step = 7.3 * SECONDS_PER_DAY + 1234.5;
    let count = ((end - start) / step) as usize;
    (0..count).map(move |i| Epoch::from_unix_seconds(start + i as f64 * step))
}

#[test]
fn jd_roundtrip_within_one_second() {
    for t in sample_instants() {
        let back = Epoch::from_jd(t.as_jd());
        let diff = (back.as_unix_seconds() - t.as_unix_seconds()).abs();
        assert!(diff < 1.0, "roundtrip drift {diff}s at {t}");
    }
}

#[test]
fn jd_from_epoch_inverse_within_microday() {
    for t in sample_instants() {
        let jd = t.as_jd();
        let again = Epoch::from_jd(jd).as_jd();
        assert!((again - jd).abs() <= 1e-6, "jd drift at {t}");
    }
}

#[test]
fn day_beginning_bounds_instant() {
    for t in sample_instants() {
        let start = t.day_beginning();
        assert!(start <= t, "{start} > {t}");
        assert!(t < start.hours_later(24.0), "{t} not within day of {start}");
    }
}

#[test]
fn day_beginning_is_idempotent() {
    for t in sample_instants() {
        let start = t.day_beginning();
        assert_eq!(start.day_beginning(), start);
    }
}

#[test]
fn day_beginning_is_utc_midnight() {
    for t in sample_instants() {
        let utc = UtcTime::from_epoch(t.day_beginning());
        assert_eq!((utc.hour, utc.minute), (0, 0), "{utc}");
        assert!(utc.second.abs() < 1e-6, "{utc}");
    }
}

#[test]
fn calendar_roundtrip_preserves_date() {
    for t in sample_instants() {
        let utc = UtcTime::from_epoch(t);
        let back = utc.to_epoch();
        let diff = (back.as_unix_seconds() - t.as_unix_seconds()).abs();
        assert!(diff < 1e-3, "calendar roundtrip drift {diff}s at {utc}");
    }
}
