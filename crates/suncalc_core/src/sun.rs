//! Mean-element solar coordinates.

use std::f64::consts::PI;

use crate::coords::EclipticCoordinate;
use crate::equatorial::{declination, right_ascension};
use crate::obliquity::RAD_PER_DEG;

/// Mean Earth–Sun distance in km.
pub const SUN_DISTANCE_KM: f64 = 149_598_000.0;

/// Ecliptic longitude of Earth's perihelion in degrees.
const PERIHELION_DEG: f64 = 102.9372;

/// Solar mean anomaly for `d` days since J2000.
pub fn solar_mean_anomaly(d: f64) -> f64 {
    RAD_PER_DEG * (357.5291 + 0.985_600_28 * d)
}

/// Equation of center for mean anomaly `m`.
pub fn equation_of_center(m: f64) -> f64 {
    RAD_PER_DEG * (1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin())
}

/// Apparent ecliptic longitude of the Sun for mean anomaly `m`.
pub fn ecliptic_longitude(m: f64) -> f64 {
    m + equation_of_center(m) + RAD_PER_DEG * PERIHELION_DEG + PI
}

/// Sun right ascension and declination for `d` days since J2000.
pub fn sun_coordinates(d: f64) -> EclipticCoordinate {
    let l = ecliptic_longitude(solar_mean_anomaly(d));
    EclipticCoordinate {
        right_ascension: right_ascension(l, 0.0),
        declination: declination(l, 0.0),
    }
}
