//! Sunrise/sunset, twilight, golden hour and solar transit times.
//!
//! Closed-form solution on one solar day: find the integer Julian cycle
//! nearest the input, compute the Sun's declination at the approximate
//! transit, then solve the hour angle at which the Sun center reaches the
//! event altitude. Rising events mirror the setting time about solar noon.
//!
//! Precision is about a minute for mid latitudes. The day chosen is the one
//! whose local solar noon is nearest the input instant, so pass a time near
//! local midday to get "today".

use std::f64::consts::TAU;

use suncalc_core::{
    RAD_PER_DEG, declination, ecliptic_longitude, hour_angle_cos, solar_mean_anomaly,
};
use suncalc_time::{Epoch, J2000_JD};

use crate::error::SolarEventError;
use crate::riseset_types::{Crossing, Location, SolarEvent};

/// Mean offset of solar transit from the Julian cycle boundary, in days.
const J0: f64 = 0.0009;

/// Integer solar-day count since J2000 containing day `d` at west longitude `lw`.
fn julian_cycle(d: f64, lw: f64) -> f64 {
    ((d - J0) - lw / TAU).round()
}

/// Approximate transit (days since J2000) for hour angle `ht`.
fn approximate_transit(ht: f64, lw: f64, n: f64) -> f64 {
    J0 + (ht + lw) / TAU + n
}

/// Julian Day of transit, corrected for the equation of time.
fn solar_transit_jd(ds: f64, m: f64, l: f64) -> f64 {
    J2000_JD + ds + 0.0053 * m.sin() - 0.0069 * (2.0 * l).sin()
}

/// Hour angle at which the Sun center reaches altitude `h`.
fn hour_angle(h: f64, phi: f64, dec: f64) -> Result<f64, SolarEventError> {
    let cos_h = hour_angle_cos(h, phi, dec);
    if cos_h > 1.0 {
        return Err(SolarEventError::SunNeverRise);
    }
    if cos_h < -1.0 {
        return Err(SolarEventError::SunNeverSet);
    }
    Ok(cos_h.acos())
}

/// Quantities shared by every event of one solar day.
struct SolarDay {
    lw: f64,
    phi: f64,
    n: f64,
    m: f64,
    l: f64,
    dec: f64,
    jd_noon: f64,
}

impl SolarDay {
    fn new(epoch: Epoch, location: &Location) -> Self {
        let lw = location.west_longitude_rad();
        let phi = location.latitude_rad();
        let d = epoch.days_since_j2000();

        let n = julian_cycle(d, lw);
        let ds = approximate_transit(0.0, lw, n);
        let m = solar_mean_anomaly(ds);
        let l = ecliptic_longitude(m);
        let dec = declination(l, 0.0);
        let jd_noon = solar_transit_jd(ds, m, l);

        Self {
            lw,
            phi,
            n,
            m,
            l,
            dec,
            jd_noon,
        }
    }

    /// Julian Day of the evening crossing of altitude `h` (radians).
    fn set_jd(&self, h: f64) -> Result<f64, SolarEventError> {
        let w = hour_angle(h, self.phi, self.dec)?;
        let a = approximate_transit(w, self.lw, self.n);
        Ok(solar_transit_jd(a, self.m, self.l))
    }

    fn event_jd(&self, event: SolarEvent) -> Result<f64, SolarEventError> {
        let h = event.angle_deg() * RAD_PER_DEG;
        match event.crossing() {
            Crossing::Noon => Ok(self.jd_noon),
            Crossing::Nadir => Ok(self.jd_noon - 0.5),
            Crossing::Setting => self.set_jd(h),
            Crossing::Rising => {
                let jd_set = self.set_jd(h)?;
                Ok(self.jd_noon - (jd_set - self.jd_noon))
            }
        }
    }
}

/// Compute the instant of a solar event on the solar day nearest `epoch`.
///
/// # Errors
/// * `SolarEventError::SunNeverRise` if the Sun stays below the event
///   altitude (e.g. sunrise during polar night)
/// * `SolarEventError::SunNeverSet` if the Sun stays above it
///   (e.g. sunset under the midnight sun)
///
/// Noon and nadir always succeed.
pub fn solve_solar_event(
    epoch: Epoch,
    event: SolarEvent,
    location: &Location,
) -> Result<Epoch, SolarEventError> {
    SolarDay::new(epoch, location)
        .event_jd(event)
        .map(Epoch::from_jd)
}

/// Compute every [`SolarEvent`] for the solar day nearest `epoch`.
///
/// Returns results in the chronological order of [`SolarEvent::ALL`].
/// Events that cannot occur at this latitude/date carry their error.
pub fn solar_events_for_day(
    epoch: Epoch,
    location: &Location,
) -> Vec<(SolarEvent, Result<Epoch, SolarEventError>)> {
    let day = SolarDay::new(epoch, location);
    SolarEvent::ALL
        .iter()
        .map(|&event| (event, day.event_jd(event).map(Epoch::from_jd)))
        .collect()
}
