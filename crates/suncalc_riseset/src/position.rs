//! Instantaneous Sun and Moon positions in the observer's sky.

use suncalc_core::{
    AzimuthCoordinate, altitude, astro_refraction, azimuth, moon_coordinates, parallactic_angle,
    sidereal_time, sun_coordinates,
};
use suncalc_time::Epoch;

use crate::moon_types::MoonPosition;
use crate::riseset_types::Location;

/// Sun azimuth and geometric altitude (no refraction).
pub fn sun_position(epoch: Epoch, location: &Location) -> AzimuthCoordinate {
    let lw = location.west_longitude_rad();
    let phi = location.latitude_rad();
    let d = epoch.days_since_j2000();

    let c = sun_coordinates(d);
    let h = sidereal_time(d, lw) - c.right_ascension;

    AzimuthCoordinate {
        azimuth: azimuth(h, phi, c.declination),
        altitude: altitude(h, phi, c.declination),
    }
}

/// Moon azimuth, refracted altitude, distance and parallactic angle.
pub fn moon_position(epoch: Epoch, location: &Location) -> MoonPosition {
    let lw = location.west_longitude_rad();
    let phi = location.latitude_rad();
    let d = epoch.days_since_j2000();

    let c = moon_coordinates(d);
    let h = sidereal_time(d, lw) - c.right_ascension;
    let geometric = altitude(h, phi, c.declination);

    MoonPosition {
        azimuth: azimuth(h, phi, c.declination),
        altitude: geometric + astro_refraction(geometric),
        distance_km: c.distance_km,
        parallactic_angle: parallactic_angle(h, phi, c.declination),
    }
}
