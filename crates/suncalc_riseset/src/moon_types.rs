//! Result types for lunar position and illumination.

/// Moon position seen by an observer: geocentric coordinates with refracted altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPosition {
    /// Azimuth in radians, from south, positive westward.
    pub azimuth: f64,
    /// Altitude in radians, including atmospheric refraction.
    pub altitude: f64,
    /// Earth–Moon distance in km.
    pub distance_km: f64,
    /// Parallactic angle in radians.
    pub parallactic_angle: f64,
}

/// Illuminated fraction and phase of the Moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonIllumination {
    /// Illuminated fraction of the disc, 0.0 (new) to 1.0 (full).
    pub fraction: f64,
    /// Phase in [0, 1): 0 new, 0.25 first quarter, 0.5 full, 0.75 last quarter.
    pub phase: f64,
    /// Position angle of the bright limb's midpoint, radians.
    /// Negative while waxing, positive while waning.
    pub angle: f64,
}

impl MoonIllumination {
    /// Whether the illuminated fraction is growing.
    pub fn is_waxing(&self) -> bool {
        self.phase < 0.5
    }
}
