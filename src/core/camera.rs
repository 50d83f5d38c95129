//! Camera value type and the clamping rules every camera mutation goes through.

use crate::core::{
    constants::{
        MAX_LATITUDE, MAX_TILT, MAX_TILT_LOW_ZOOM, MAX_ZOOM, MIN_ZOOM, TILT_HIGH_ZOOM,
        TILT_LOW_ZOOM,
    },
    geo::LatLng,
};
use serde::{Deserialize, Serialize};

/// Clamps a zoom level to [`MIN_ZOOM`, `MAX_ZOOM`]. NaN maps to `MIN_ZOOM`.
pub fn clamp_zoom(zoom: f64) -> f64 {
    clamp_zoom_within(zoom, MIN_ZOOM, MAX_ZOOM)
}

/// Clamps a zoom level to `[min_zoom, max_zoom]`. NaN maps to `min_zoom`.
pub fn clamp_zoom_within(zoom: f64, min_zoom: f64, max_zoom: f64) -> f64 {
    if zoom.is_nan() {
        min_zoom
    } else {
        zoom.clamp(min_zoom, max_zoom)
    }
}

/// Normalizes a bearing into [0, 360). Non-finite bearings face north.
pub fn clamp_bearing(bearing: f64) -> f64 {
    if !bearing.is_finite() {
        return 0.0;
    }
    let normalized = bearing.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Steepest viewing angle allowed at `zoom`: 30° when zoomed out, rising
/// linearly to 45° close to the ground.
pub fn max_tilt_for_zoom(zoom: f64) -> f64 {
    if zoom <= TILT_LOW_ZOOM || zoom.is_nan() {
        MAX_TILT_LOW_ZOOM
    } else if zoom >= TILT_HIGH_ZOOM {
        MAX_TILT
    } else {
        let t = (zoom - TILT_LOW_ZOOM) / (TILT_HIGH_ZOOM - TILT_LOW_ZOOM);
        MAX_TILT_LOW_ZOOM + (MAX_TILT - MAX_TILT_LOW_ZOOM) * t
    }
}

/// Clamps a viewing angle to `[0, max_tilt_for_zoom(zoom)]`. NaN maps to 0.
pub fn clamp_tilt(tilt: f64, zoom: f64) -> f64 {
    if tilt.is_nan() {
        0.0
    } else {
        tilt.clamp(0.0, max_tilt_for_zoom(zoom))
    }
}

/// The logical viewpoint: what the map looks at and from where.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Location on the Earth at which the camera points
    pub target: LatLng,
    /// Zoom level; at zoom `z` the world is `256 * 2^z` points wide
    pub zoom: f64,
    /// Heading in degrees clockwise from true north, in [0, 360)
    pub bearing: f64,
    /// Viewing angle in degrees away from straight down
    pub tilt: f64,
}

impl Camera {
    /// Creates a north-up, top-down camera. Out-of-range values are clamped.
    pub fn new(target: LatLng, zoom: f64) -> Self {
        Self {
            target,
            zoom,
            bearing: 0.0,
            tilt: 0.0,
        }
        .clamped()
    }

    /// Makes a camera from latitude, longitude and zoom
    pub fn make(lat: f64, lng: f64, zoom: f64) -> Self {
        Self::new(LatLng::new(lat, lng), zoom)
    }

    pub fn with_bearing(mut self, bearing: f64) -> Self {
        self.bearing = bearing;
        self.clamped()
    }

    pub fn with_tilt(mut self, tilt: f64) -> Self {
        self.tilt = tilt;
        self.clamped()
    }

    /// Clamps against the global zoom range
    pub fn clamped(&self) -> Self {
        self.clamped_within(MIN_ZOOM, MAX_ZOOM)
    }

    /// Clamps every field into its valid range, using `[min_zoom, max_zoom]`
    /// for zoom. The target latitude saturates at the Mercator limit so the
    /// camera always has a finite screen position.
    pub fn clamped_within(&self, min_zoom: f64, max_zoom: f64) -> Self {
        let target = self.target.clamped();
        let zoom = clamp_zoom_within(self.zoom, min_zoom, max_zoom);
        Self {
            target: LatLng::new(target.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE), target.lng),
            zoom,
            bearing: clamp_bearing(self.bearing),
            tilt: clamp_tilt(self.tilt, zoom),
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(LatLng::default(), MIN_ZOOM)
    }
}
