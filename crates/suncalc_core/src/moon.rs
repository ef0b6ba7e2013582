//! Simplified lunar theory: mean longitude plus the largest periodic term.

use crate::coords::MoonCoordinate;
use crate::equatorial::{declination, right_ascension};
use crate::obliquity::RAD_PER_DEG;

/// Moon right ascension, declination and distance for `d` days since J2000.
///
/// - `L = 218.316° + 13.176396° d` (mean longitude)
/// - `M = 134.963° + 13.064993° d` (mean anomaly)
/// - `F = 93.272° + 13.229350° d` (mean distance from ascending node)
/// - `λ = L + 6.289° sin M`, `β = 5.128° sin F`
/// - `Δ = 385001 − 20905 cos M` km
pub fn moon_coordinates(d: f64) -> MoonCoordinate {
    let mean_lon = RAD_PER_DEG * (218.316 + 13.176_396 * d);
    let m = RAD_PER_DEG * (134.963 + 13.064_993 * d);
    let f = RAD_PER_DEG * (93.272 + 13.229_350 * d);

    let l = mean_lon + RAD_PER_DEG * 6.289 * m.sin();
    let b = RAD_PER_DEG * 5.128 * f.sin();
    let distance_km = 385_001.0 - 20_905.0 * m.cos();

    MoonCoordinate {
        right_ascension: right_ascension(l, b),
        declination: declination(l, b),
        distance_km,
    }
}
