//! Ecliptic → equatorial conversion at the fixed J2000 obliquity.

use crate::obliquity::OBLIQUITY_RAD;

/// Right ascension of a point at ecliptic longitude `l`, latitude `b`.
///
/// `α = atan2(sin l cos ε − tan b sin ε, cos l)`
pub fn right_ascension(l: f64, b: f64) -> f64 {
    let e = OBLIQUITY_RAD;
    (l.sin() * e.cos() - b.tan() * e.sin()).atan2(l.cos())
}

/// Declination of a point at ecliptic longitude `l`, latitude `b`.
///
/// `δ = asin(sin b cos ε + cos b sin ε sin l)`
pub fn declination(l: f64, b: f64) -> f64 {
    let e = OBLIQUITY_RAD;
    (b.sin() * e.cos() + b.cos() * e.sin() * l.sin()).asin()
}
