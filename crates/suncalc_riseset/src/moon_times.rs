//! Moonrise and moonset within a UTC day.
//!
//! The Moon moves too fast for the closed-form solar solution, so the day is
//! sampled instead: every two hours, fit a parabola through the altitudes at
//! the window start, midpoint and end, and look for horizon crossings inside
//! the window. Twelve windows cover the day; the search stops as soon as
//! both a rise and a set are known.

use suncalc_time::Epoch;

use crate::error::LunarEventError;
use crate::position::moon_position;
use crate::riseset_types::{Location, MoonTimes, RiseSetConfig};

/// Horizon crossings found in one window, as offsets in hours from the
/// window midpoint, each in (-1, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
enum Crossings {
    None,
    /// One crossing; direction depends on the altitude at the window start.
    One(f64),
    /// Two crossings in the same window.
    Two { rise: f64, set: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct WindowFit {
    /// Value of the parabola at its vertex.
    extremum: f64,
    crossings: Crossings,
}

/// Fit `y = a x² + b x + h1` through `(-1, h0)`, `(0, h1)`, `(1, h2)` and
/// find its roots inside the window.
fn fit_window(h0: f64, h1: f64, h2: f64) -> WindowFit {
    let a = (h0 + h2) / 2.0 - h1;
    let b = (h2 - h0) / 2.0;
    let xe = -b / (2.0 * a);
    let ye = (a * xe + b) * xe + h1;
    let disc = b * b - 4.0 * a * h1;

    let crossings = if disc >= 0.0 {
        let dx = disc.sqrt() / (a.abs() * 2.0);
        let mut x1 = xe - dx;
        let x2 = xe + dx;
        let roots = usize::from(x1.abs() < 1.0) + usize::from(x2.abs() < 1.0);
        if x1 < -1.0 {
            x1 = x2;
        }
        match roots {
            1 => Crossings::One(x1),
            2 => Crossings::Two {
                rise: if ye < 0.0 { x2 } else { x1 },
                set: if ye < 0.0 { x1 } else { x2 },
            },
            _ => Crossings::None,
        }
    } else {
        Crossings::None
    };

    WindowFit {
        extremum: ye,
        crossings,
    }
}

/// Moonrise and moonset on the UTC calendar day containing `epoch`.
///
/// Uses the default [`RiseSetConfig`].
///
/// # Errors
/// * `LunarEventError::MoonNeverSet` when no set was found and the Moon was
///   above the horizon at the end of the search; carries the rise, if any
/// * `LunarEventError::MoonNeverRise` otherwise; carries the set, if any
pub fn moon_times(epoch: Epoch, location: &Location) -> Result<MoonTimes, LunarEventError> {
    moon_times_with_config(epoch, location, &RiseSetConfig::default())
}

/// [`moon_times`] with an explicit configuration.
pub fn moon_times_with_config(
    epoch: Epoch,
    location: &Location,
    config: &RiseSetConfig,
) -> Result<MoonTimes, LunarEventError> {
    let day_start = epoch.day_beginning();
    let hc = config.moon_horizon_correction_rad();
    let altitude_at = |hours: f64| moon_position(day_start.hours_later(hours), location).altitude - hc;

    let mut h0 = altitude_at(0.0);
    let mut rise_hour: Option<f64> = None;
    let mut set_hour: Option<f64> = None;
    let mut ye = 0.0;

    for i in (1..24u32).step_by(2) {
        let hour = f64::from(i);
        let h1 = altitude_at(hour);
        let h2 = altitude_at(hour + 1.0);

        let fit = fit_window(h0, h1, h2);
        ye = fit.extremum;
        match fit.crossings {
            Crossings::None => {}
            Crossings::One(x) => {
                if h0 < 0.0 {
                    rise_hour = Some(hour + x);
                } else {
                    set_hour = Some(hour + x);
                }
            }
            Crossings::Two { rise, set } => {
                rise_hour = Some(hour + rise);
                set_hour = Some(hour + set);
            }
        }

        if let (Some(rise), Some(set)) = (rise_hour, set_hour) {
            return Ok(MoonTimes {
                rise: day_start.hours_later(rise),
                set: day_start.hours_later(set),
            });
        }

        h0 = h2;
    }

    if ye > 0.0 {
        Err(LunarEventError::MoonNeverSet(
            rise_hour.map(|h| day_start.hours_later(h)),
        ))
    } else {
        Err(LunarEventError::MoonNeverRise(
            set_hour.map(|h| day_start.hours_later(h)),
        ))
    }
}
