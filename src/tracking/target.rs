//! Horizontal (alt-azimuth) targets.

use crate::config::units::Degrees;

/// A direction on the sky in horizontal coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HorizontalTarget {
    /// Azimuth in `[0, 360)`.
    pub azimuth: Degrees,
    /// Altitude above the horizon, negative below it.
    pub altitude: Degrees,
}

impl HorizontalTarget {
    /// Create a target, wrapping azimuth into `[0, 360)`.
    pub fn new(azimuth: Degrees, altitude: Degrees) -> Self {
        Self {
            azimuth: azimuth.normalized(),
            altitude,
        }
    }

    /// Convert a unit view vector as reported by planetarium software.
    ///
    /// `z` points at the zenith; azimuth runs clockwise from `(-1, 0, 0)`.
    pub fn from_view_vector(x: f32, y: f32, z: f32) -> Self {
        let altitude = Degrees::from_radians(libm::asinf(z.clamp(-1.0, 1.0)));
        let azimuth = Degrees(180.0 - Degrees::from_radians(libm::atan2f(y, x)).0);
        Self::new(azimuth, altitude)
    }
}
