//! Sidereal time, equatorial → horizon transforms and refraction.
//!
//! `h` is the local hour angle, `phi` the observer latitude and `dec` the
//! body declination, all in radians.

use crate::obliquity::RAD_PER_DEG;

/// Local sidereal time for `d` days since J2000 at west longitude `lw`.
///
/// `θ = rad(280.16 + 360.9856235 d) − lw`. Not reduced to [0, 2π).
pub fn sidereal_time(d: f64, lw: f64) -> f64 {
    RAD_PER_DEG * (280.16 + 360.985_623_5 * d) - lw
}

/// Azimuth from south, positive westward.
pub fn azimuth(h: f64, phi: f64, dec: f64) -> f64 {
    h.sin().atan2(h.cos() * phi.sin() - dec.tan() * phi.cos())
}

/// Geometric altitude above the horizon.
pub fn altitude(h: f64, phi: f64, dec: f64) -> f64 {
    (phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos()).asin()
}

/// Angle between the directions to the zenith and to the celestial pole,
/// as seen at the body.
pub fn parallactic_angle(h: f64, phi: f64, dec: f64) -> f64 {
    h.sin().atan2(phi.tan() * dec.cos() - dec.sin() * h.cos())
}

/// Cosine of the hour angle at which a body of declination `dec` reaches
/// altitude `h0`.
///
/// Values outside [-1, 1] mean the altitude is never crossed that day.
pub fn hour_angle_cos(h0: f64, phi: f64, dec: f64) -> f64 {
    (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos())
}

/// Atmospheric refraction to add to a geometric altitude, in radians.
///
/// Bennett-style fit; altitudes below the horizon are clamped to zero so
/// the correction stays finite.
pub fn astro_refraction(altitude: f64) -> f64 {
    let h = altitude.max(0.0);
    0.000_296_7 / (h + 0.003_125_36 / (h + 0.089_011_79)).tan()
}
