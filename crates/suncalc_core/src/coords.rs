//! Coordinate records returned by the ephemeris formulas.
//!
//! Named fields instead of tuples, so field order is never part of the API.

/// Horizon-frame direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AzimuthCoordinate {
    /// Azimuth in radians, measured from south, positive westward.
    pub azimuth: f64,
    /// Altitude above the horizon in radians.
    pub altitude: f64,
}

/// Equatorial direction of a body.
///
/// Derived from ecliptic longitude/latitude via [`crate::right_ascension`]
/// and [`crate::declination`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticCoordinate {
    /// Right ascension in radians, range (-π, π].
    pub right_ascension: f64,
    /// Declination in radians, range [-π/2, π/2].
    pub declination: f64,
}

/// Equatorial direction of the Moon plus geocentric distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonCoordinate {
    /// Right ascension in radians.
    pub right_ascension: f64,
    /// Declination in radians.
    pub declination: f64,
    /// Earth–Moon distance in km.
    pub distance_km: f64,
}
