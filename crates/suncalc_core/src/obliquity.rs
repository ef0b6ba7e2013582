//! Angle constants shared by the ephemeris formulas.

use std::f64::consts::PI;

/// Radians per degree.
pub const RAD_PER_DEG: f64 = PI / 180.0;

/// Obliquity of the ecliptic in degrees (J2000 mean value, rounded).
pub const OBLIQUITY_DEG: f64 = 23.4397;

/// Obliquity of the ecliptic in radians.
pub const OBLIQUITY_RAD: f64 = OBLIQUITY_DEG * RAD_PER_DEG;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rad_per_deg_matches_std() {
        assert!((RAD_PER_DEG - 1.0_f64.to_radians()).abs() < 1e-18);
    }

    #[test]
    fn obliquity_radians() {
        assert!((OBLIQUITY_RAD - 23.4397_f64.to_radians()).abs() < 1e-15);
    }
}
