//! Low-precision solar and lunar ephemeris formulas.
//!
//! Provides mean-element Sun and Moon coordinates, ecliptic → equatorial
//! conversion, sidereal time, horizon transforms and a single-constant
//! atmospheric refraction model. Accuracy is about one arcminute, enough
//! for rise/set times to within a minute or two.
//!
//! All angles are radians. Time arguments are days since J2000.0.

pub mod coords;
pub mod equatorial;
pub mod horizon;
pub mod moon;
pub mod obliquity;
pub mod sun;

pub use coords::{AzimuthCoordinate, EclipticCoordinate, MoonCoordinate};
pub use equatorial::{declination, right_ascension};
pub use horizon::{
    altitude, astro_refraction, azimuth, hour_angle_cos, parallactic_angle, sidereal_time,
};
pub use moon::moon_coordinates;
pub use obliquity::{OBLIQUITY_DEG, OBLIQUITY_RAD, RAD_PER_DEG};
pub use sun::{
    SUN_DISTANCE_KM, ecliptic_longitude, equation_of_center, solar_mean_anomaly, sun_coordinates,
};
