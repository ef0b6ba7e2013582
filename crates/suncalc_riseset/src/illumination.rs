//! Moon illuminated fraction and phase.
//!
//! The phase angle (Sun–Moon–Earth) comes from the geocentric elongation
//! and the two distances; its sign from the bright limb's position angle.

use std::f64::consts::PI;

use suncalc_core::{SUN_DISTANCE_KM, moon_coordinates, sun_coordinates};
use suncalc_time::Epoch;

use crate::moon_types::MoonIllumination;

/// Illuminated fraction, phase and bright-limb angle of the Moon at `epoch`.
///
/// Independent of the observer's location.
pub fn moon_illumination(epoch: Epoch) -> MoonIllumination {
    let d = epoch.days_since_j2000();
    let s = sun_coordinates(d);
    let m = moon_coordinates(d);

    let d_ra = s.right_ascension - m.right_ascension;

    // Geocentric elongation
    let psi = (s.declination.sin() * m.declination.sin()
        + s.declination.cos() * m.declination.cos() * d_ra.cos())
    .acos();
    // Phase angle
    let inc = (SUN_DISTANCE_KM * psi.sin()).atan2(m.distance_km - SUN_DISTANCE_KM * psi.cos());
    let angle = (s.declination.cos() * d_ra.sin()).atan2(
        s.declination.sin() * m.declination.cos()
            - s.declination.cos() * m.declination.sin() * d_ra.cos(),
    );

    let sign = if angle < 0.0 { -1.0 } else { 1.0 };
    MoonIllumination {
        fraction: (1.0 + inc.cos()) / 2.0,
        phase: 0.5 + 0.5 * inc * sign / PI,
        angle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_over_two_lunations() {
        let start = 1_577_836_800.0; // 2020-01-01
        for i in 0..(59 * 8) {
            let t = Epoch::from_unix_seconds(start + f64::from(i) * 10_800.0);
            let ill = moon_illumination(t);
            assert!((0.0..=1.0).contains(&ill.fraction), "fraction {}", ill.fraction);
            assert!((0.0..1.0).contains(&ill.phase), "phase {}", ill.phase);
        }
    }

    #[test]
    fn waxing_half_matches_angle_sign() {
        // 2020-06-28 is a week after new moon: waxing
        let ill = moon_illumination(Epoch::from_unix_seconds(1_593_345_600.0));
        assert!(ill.is_waxing());
        assert!(ill.angle < 0.0);
        assert!(ill.fraction > 0.3 && ill.fraction < 0.7, "fraction {}", ill.fraction);
    }
}
