//! Golden-value tests for moonrise/moonset and illumination.
//!
//! New/full moon instants are from published lunar phase tables (UTC).

use suncalc_riseset::{
    Location, LunarEventError, moon_illumination, moon_position, moon_times,
};
use suncalc_time::{Epoch, UtcTime};

fn london() -> Location {
    Location::new(51.5074, -0.1278)
}

fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Epoch {
    UtcTime::new(year, month, day, hour, minute, 0.0).to_epoch()
}

fn assert_within_minutes(actual: Epoch, expected: Epoch, minutes: f64, label: &str) {
    let diff = actual.hours_since(expected).abs() * 60.0;
    assert!(
        diff < minutes,
        "{label}: got {actual}, expected {expected} (off by {diff:.1} min)"
    );
}

#[test]
fn new_moon_june_2020() {
    // New Moon 2020-06-21 06:41 UTC
    let ill = moon_illumination(utc(2020, 6, 21, 6, 41));
    assert!(ill.fraction < 0.05, "fraction = {}", ill.fraction);
}

#[test]
fn full_moon_july_2020() {
    // Full Moon 2020-07-05 04:44 UTC
    let ill = moon_illumination(utc(2020, 7, 5, 4, 44));
    assert!(ill.fraction > 0.95, "fraction = {}", ill.fraction);
    assert!((ill.phase - 0.5).abs() < 0.02, "phase = {}", ill.phase);
}

#[test]
fn new_and_full_moon_january_2024() {
    let new = moon_illumination(utc(2024, 1, 11, 11, 57));
    let full = moon_illumination(utc(2024, 1, 25, 17, 54));
    assert!(new.fraction < 0.05, "new fraction = {}", new.fraction);
    assert!(full.fraction > 0.95, "full fraction = {}", full.fraction);
}

#[test]
fn illumination_bounds_over_a_year() {
    let start = utc(2023, 1, 1, 0, 0);
    for i in 0..(365 * 4) {
        let ill = moon_illumination(start.hours_later(f64::from(i) * 6.0 + 0.37));
        assert!((0.0..=1.0).contains(&ill.fraction), "fraction {}", ill.fraction);
        assert!((0.0..1.0).contains(&ill.phase), "phase {}", ill.phase);
    }
}

#[test]
fn london_solstice_moon_times() {
    let times = moon_times(utc(2020, 6, 21, 12, 0), &london()).unwrap();
    assert_within_minutes(times.rise, utc(2020, 6, 21, 3, 35), 1.0, "moonrise");
    assert_within_minutes(times.set, utc(2020, 6, 21, 20, 53), 1.0, "moonset");
}

#[test]
fn set_may_precede_rise() {
    let times = moon_times(utc(2020, 6, 28, 9, 0), &london()).unwrap();
    assert_within_minutes(times.set, utc(2020, 6, 28, 0, 13), 1.0, "moonset");
    assert_within_minutes(times.rise, utc(2020, 6, 28, 12, 13), 1.0, "moonrise");
    assert!(times.set < times.rise);
}

#[test]
fn moon_never_sets_carries_rise() {
    // The previous set fell just before midnight on the 26th
    match moon_times(utc(2020, 6, 27, 12, 0), &london()) {
        Err(LunarEventError::MoonNeverSet(Some(rise))) => {
            assert_within_minutes(rise, utc(2020, 6, 27, 10, 50), 1.0, "moonrise");
        }
        other => panic!("expected MoonNeverSet with rise, got {other:?}"),
    }
}

#[test]
fn moon_never_rises_carries_set() {
    // Near last quarter the next rise slips past 24:00 UTC
    match moon_times(utc(2020, 7, 14, 12, 0), &london()) {
        Err(LunarEventError::MoonNeverRise(Some(set))) => {
            assert_within_minutes(set, utc(2020, 7, 14, 14, 6), 1.0, "moonset");
        }
        other => panic!("expected MoonNeverRise with set, got {other:?}"),
    }
}

#[test]
fn svalbard_circumpolar_moon() {
    let svalbard = Location::new(78.0, 15.0);
    assert_eq!(
        moon_times(utc(2020, 6, 20, 12, 0), &svalbard),
        Err(LunarEventError::MoonNeverSet(None))
    );
}

#[test]
fn svalbard_moon_below_horizon_all_day() {
    let svalbard = Location::new(78.0, 15.0);
    assert_eq!(
        moon_times(utc(2020, 6, 5, 12, 0), &svalbard),
        Err(LunarEventError::MoonNeverRise(None))
    );
}

#[test]
fn successful_times_fall_inside_the_utc_day() {
    let first = utc(2020, 1, 1, 1, 0);
    for &lat in &[-60.0, -35.0, 0.0, 35.0, 51.5, 65.0, 70.0, 78.0] {
        let loc = Location::new(lat, 10.0);
        for k in 0..130 {
            let t = first.hours_later(f64::from(k) * 72.0);
            if let Ok(times) = moon_times(t, &loc) {
                let start = t.day_beginning();
                let end = start.hours_later(24.0);
                assert!(start <= times.rise && times.rise < end, "rise {} on {start}", times.rise);
                assert!(start <= times.set && times.set < end, "set {} on {start}", times.set);
            }
        }
    }
}

#[test]
fn moon_near_horizon_at_reported_rise() {
    let loc = london();
    let times = moon_times(utc(2020, 6, 21, 12, 0), &loc).unwrap();
    let alt = moon_position(times.rise, &loc).altitude.to_degrees();
    // Target is the 0.133° correction; the 2 h parabola fit is good to ~0.15°
    assert!((alt - 0.133).abs() < 0.25, "altitude at rise {alt}°");
    assert!(times.set.hours_since(times.rise) < 24.0);
}
