//! Types for sunrise/sunset, twilight and moonrise/moonset calculations.
//!
//! Provides the observer location, the solar event table, solver
//! configuration and the moon rise/set result.

use suncalc_core::RAD_PER_DEG;
use suncalc_time::Epoch;

use crate::error::LocationError;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl Location {
    /// Create a location without range checks.
    ///
    /// Out-of-range or NaN coordinates flow through the trigonometry
    /// unchanged; use [`Location::checked`] at input boundaries.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Create a location, rejecting non-finite or out-of-range coordinates.
    pub fn checked(latitude_deg: f64, longitude_deg: f64) -> Result<Self, LocationError> {
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(LocationError::InvalidLatitude(latitude_deg));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(LocationError::InvalidLongitude(longitude_deg));
        }
        Ok(Self::new(latitude_deg, longitude_deg))
    }

    /// Latitude φ in radians.
    pub fn latitude_rad(&self) -> f64 {
        RAD_PER_DEG * self.latitude_deg
    }

    /// West longitude `lw` in radians (west positive).
    pub fn west_longitude_rad(&self) -> f64 {
        -RAD_PER_DEG * self.longitude_deg
    }
}

/// Which part of the solar day an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Crossing {
    /// Upper transit (solar noon).
    Noon,
    /// Lower transit (solar midnight).
    Nadir,
    /// Morning crossing of the event altitude.
    Rising,
    /// Evening crossing of the event altitude.
    Setting,
}

/// Solar events, including twilight and golden-hour boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEvent {
    /// Upper limb appears: Sun center at −0.833°.
    Sunrise,
    /// Upper limb disappears: Sun center at −0.833°.
    Sunset,
    /// Lower limb clears the horizon: −0.3°.
    SunriseEnd,
    /// Lower limb touches the horizon: −0.3°.
    SunsetEnd,
    /// Civil dawn, −6°.
    Dawn,
    /// Civil dusk, −6°.
    Dusk,
    /// Nautical dawn, −12°.
    NauticalDawn,
    /// Nautical dusk, −12°.
    NauticalDusk,
    /// Astronomical dawn, −18°.
    AstronomicalDawn,
    /// Astronomical dusk, −18°.
    AstronomicalDusk,
    /// Morning golden hour ends, +6°.
    GoldenHourEnd,
    /// Evening golden hour starts, +6°.
    GoldenHour,
    /// Solar noon.
    Noon,
    /// Solar midnight.
    Nadir,
}

impl SolarEvent {
    /// Every event, in chronological order within one solar day.
    pub const ALL: [SolarEvent; 14] = [
        Self::Nadir,
        Self::AstronomicalDawn,
        Self::NauticalDawn,
        Self::Dawn,
        Self::Sunrise,
        Self::SunriseEnd,
        Self::GoldenHourEnd,
        Self::Noon,
        Self::GoldenHour,
        Self::SunsetEnd,
        Self::Sunset,
        Self::Dusk,
        Self::NauticalDusk,
        Self::AstronomicalDusk,
    ];

    /// Sun-center altitude defining the event, in degrees.
    ///
    /// Noon and nadir are reference values only; the solver places them
    /// at the transits without solving for an altitude.
    pub fn angle_deg(self) -> f64 {
        match self {
            Self::Sunrise | Self::Sunset => -0.833,
            Self::SunriseEnd | Self::SunsetEnd => -0.3,
            Self::Dawn | Self::Dusk => -6.0,
            Self::NauticalDawn | Self::NauticalDusk => -12.0,
            Self::AstronomicalDawn | Self::AstronomicalDusk => -18.0,
            Self::GoldenHourEnd | Self::GoldenHour => 6.0,
            Self::Noon => 90.0,
            Self::Nadir => -90.0,
        }
    }

    /// Where in the solar day the event falls.
    pub fn crossing(self) -> Crossing {
        match self {
            Self::Noon => Crossing::Noon,
            Self::Nadir => Crossing::Nadir,
            Self::Sunrise
            | Self::SunriseEnd
            | Self::Dawn
            | Self::NauticalDawn
            | Self::AstronomicalDawn
            | Self::GoldenHourEnd => Crossing::Rising,
            Self::Sunset
            | Self::SunsetEnd
            | Self::Dusk
            | Self::NauticalDusk
            | Self::AstronomicalDusk
            | Self::GoldenHour => Crossing::Setting,
        }
    }

    /// Whether this is a morning event.
    pub fn is_rising(self) -> bool {
        self.crossing() == Crossing::Rising
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sunrise => "Sunrise",
            Self::Sunset => "Sunset",
            Self::SunriseEnd => "Sunrise end",
            Self::SunsetEnd => "Sunset start",
            Self::Dawn => "Dawn",
            Self::Dusk => "Dusk",
            Self::NauticalDawn => "Nautical dawn",
            Self::NauticalDusk => "Nautical dusk",
            Self::AstronomicalDawn => "Astronomical dawn",
            Self::AstronomicalDusk => "Astronomical dusk",
            Self::GoldenHourEnd => "Golden hour end",
            Self::GoldenHour => "Golden hour",
            Self::Noon => "Solar noon",
            Self::Nadir => "Nadir",
        }
    }
}

/// Configurable parameters for the moon rise/set search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetConfig {
    /// Refracted altitude of the Moon's center at which rise/set is taken,
    /// in degrees. Default: 0.133.
    pub moon_horizon_correction_deg: f64,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            moon_horizon_correction_deg: 0.133,
        }
    }
}

impl RiseSetConfig {
    /// Horizon correction in radians.
    pub fn moon_horizon_correction_rad(&self) -> f64 {
        RAD_PER_DEG * self.moon_horizon_correction_deg
    }
}

/// Moonrise and moonset within one UTC day.
///
/// Either may come first: the Moon can set in the morning and rise later.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonTimes {
    pub rise: Epoch,
    pub set: Epoch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_table() {
        assert_eq!(SolarEvent::Sunrise.angle_deg(), -0.833);
        assert_eq!(SolarEvent::Sunset.angle_deg(), -0.833);
        assert_eq!(SolarEvent::SunriseEnd.angle_deg(), -0.3);
        assert_eq!(SolarEvent::Dusk.angle_deg(), -6.0);
        assert_eq!(SolarEvent::NauticalDawn.angle_deg(), -12.0);
        assert_eq!(SolarEvent::AstronomicalDusk.angle_deg(), -18.0);
        assert_eq!(SolarEvent::GoldenHour.angle_deg(), 6.0);
    }

    #[test]
    fn morning_and_evening_pairs_share_angles() {
        let pairs = [
            (SolarEvent::Sunrise, SolarEvent::Sunset),
            (SolarEvent::SunriseEnd, SolarEvent::SunsetEnd),
            (SolarEvent::Dawn, SolarEvent::Dusk),
            (SolarEvent::NauticalDawn, SolarEvent::NauticalDusk),
            (SolarEvent::AstronomicalDawn, SolarEvent::AstronomicalDusk),
            (SolarEvent::GoldenHourEnd, SolarEvent::GoldenHour),
        ];
        for (morning, evening) in pairs {
            assert_eq!(morning.angle_deg(), evening.angle_deg());
            assert_eq!(morning.crossing(), Crossing::Rising, "{morning:?}");
            assert_eq!(evening.crossing(), Crossing::Setting, "{evening:?}");
        }
    }

    #[test]
    fn is_rising_correct() {
        assert!(SolarEvent::Sunrise.is_rising());
        assert!(SolarEvent::SunriseEnd.is_rising());
        assert!(SolarEvent::GoldenHourEnd.is_rising());
        assert!(!SolarEvent::Sunset.is_rising());
        assert!(!SolarEvent::SunsetEnd.is_rising());
        assert!(!SolarEvent::Noon.is_rising());
        assert!(!SolarEvent::Nadir.is_rising());
    }

    #[test]
    fn all_lists_each_event_once() {
        for (i, a) in SolarEvent::ALL.iter().enumerate() {
            for b in &SolarEvent::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn default_config() {
        let c = RiseSetConfig::default();
        assert_eq!(c.moon_horizon_correction_deg, 0.133);
        assert!((c.moon_horizon_correction_rad() - 0.133_f64.to_radians()).abs() < 1e-15);
    }

    #[test]
    fn location_radians() {
        let loc = Location::new(51.5074, -0.1278);
        assert!((loc.latitude_rad() - 51.5074_f64.to_radians()).abs() < 1e-15);
        assert!((loc.west_longitude_rad() - 0.1278_f64.to_radians()).abs() < 1e-15);
    }

    #[test]
    fn checked_location_accepts_bounds() {
        assert!(Location::checked(90.0, 180.0).is_ok());
        assert!(Location::checked(-90.0, -180.0).is_ok());
    }

    #[test]
    fn checked_location_rejects_out_of_range() {
        assert_eq!(
            Location::checked(91.0, 0.0),
            Err(LocationError::InvalidLatitude(91.0))
        );
        assert_eq!(
            Location::checked(0.0, -181.0),
            Err(LocationError::InvalidLongitude(-181.0))
        );
    }

    #[test]
    fn checked_location_rejects_nan() {
        assert!(matches!(
            Location::checked(f64::NAN, 0.0),
            Err(LocationError::InvalidLatitude(_))
        ));
    }
}
