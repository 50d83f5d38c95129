use crate::{core::geo::LatLng, traits::Lerp};

/// Main interpolation utilities for camera fields
pub struct Interpolation;

impl Interpolation {
    /// Linear interpolation between two f64 values
    pub fn linear(start: f64, end: f64, t: f64) -> f64 {
        start.lerp(&end, t)
    }

    /// Interpolates a camera target. Latitude moves linearly; longitude takes
    /// the shorter way around, crossing the antimeridian when that is closer.
    pub fn target(start: &LatLng, end: &LatLng, t: f64) -> LatLng {
        start.lerp(end, t)
    }

    /// Signed shortest angular difference `end - start`, in (-180, 180]
    pub fn shortest_angle_delta(start: f64, end: f64) -> f64 {
        let delta = (end - start).rem_euclid(360.0);
        if delta > 180.0 {
            delta - 360.0
        } else {
            delta
        }
    }

    /// Circular interpolation of a bearing in degrees, always turning the
    /// short way. The result lies in [0, 360).
    pub fn bearing(start: f64, end: f64, t: f64) -> f64 {
        let value = start + Self::shortest_angle_delta(start, end) * t;
        let wrapped = value.rem_euclid(360.0);
        if wrapped >= 360.0 {
            0.0
        } else {
            wrapped
        }
    }
}
