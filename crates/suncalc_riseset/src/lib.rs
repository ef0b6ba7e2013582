//! Sun and Moon rise/set, twilight, sky position and illumination.
//!
//! This crate provides:
//! - Sunrise/sunset, civil/nautical/astronomical twilight, golden hour,
//!   solar noon and nadir
//! - Moonrise/moonset within a UTC day
//! - Instantaneous Sun and Moon azimuth/altitude
//! - Moon illuminated fraction and phase
//!
//! Every function is pure: inputs are an [`Epoch`](suncalc_time::Epoch) and
//! a [`Location`], outputs are instants, records or typed errors.

pub mod error;
pub mod illumination;
pub mod moon_times;
pub mod moon_types;
pub mod position;
pub mod riseset;
pub mod riseset_types;

pub use error::{LocationError, LunarEventError, SolarEventError};
pub use illumination::moon_illumination;
pub use moon_times::{moon_times, moon_times_with_config};
pub use moon_types::{MoonIllumination, MoonPosition};
pub use position::{moon_position, sun_position};
pub use riseset::{solar_events_for_day, solve_solar_event};
pub use riseset_types::{Crossing, Location, MoonTimes, RiseSetConfig, SolarEvent};
