//! Configuration for map view behavior
//!
//! Zoom limits, animation timing and hit-test tolerances are grouped into
//! serde-friendly structs so an embedding application can ship them as JSON
//! alongside its other settings. Every field has a default, so partial
//! documents are accepted.

use crate::{
    animation::easing::EasingFunction,
    core::constants::{
        DEFAULT_BEARING_DURATION_MS, DEFAULT_LOCATION_DURATION_MS, DEFAULT_MARKER_HIT_TOLERANCE,
        DEFAULT_POLYLINE_HIT_TOLERANCE, DEFAULT_VIEWING_ANGLE_DURATION_MS,
        DEFAULT_ZOOM_DURATION_MS, MAX_ZOOM, MIN_ZOOM,
    },
    MapError, Result,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timing of camera animations started without an explicit spec
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub location_duration_ms: u64,
    pub zoom_duration_ms: u64,
    pub bearing_duration_ms: u64,
    pub viewing_angle_duration_ms: u64,
    pub easing: EasingFunction,
}

impl AnimationConfig {
    /// Every animation completes on the next tick
    pub fn instant() -> Self {
        Self {
            location_duration_ms: 0,
            zoom_duration_ms: 0,
            bearing_duration_ms: 0,
            viewing_angle_duration_ms: 0,
            easing: EasingFunction::Linear,
        }
    }

    pub fn location_duration(&self) -> Duration {
        Duration::from_millis(self.location_duration_ms)
    }

    pub fn zoom_duration(&self) -> Duration {
        Duration::from_millis(self.zoom_duration_ms)
    }

    pub fn bearing_duration(&self) -> Duration {
        Duration::from_millis(self.bearing_duration_ms)
    }

    pub fn viewing_angle_duration(&self) -> Duration {
        Duration::from_millis(self.viewing_angle_duration_ms)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            location_duration_ms: DEFAULT_LOCATION_DURATION_MS,
            zoom_duration_ms: DEFAULT_ZOOM_DURATION_MS,
            bearing_duration_ms: DEFAULT_BEARING_DURATION_MS,
            viewing_angle_duration_ms: DEFAULT_VIEWING_ANGLE_DURATION_MS,
            easing: EasingFunction::EaseInOutCubic,
        }
    }
}

/// How close, in screen points, a tap must land to select an overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitTestConfig {
    /// Radius around a marker's anchor
    pub marker_tolerance: f64,
    /// Band around a polyline's stroke, added to half its width
    pub polyline_tolerance: f64,
}

impl Default for HitTestConfig {
    fn default() -> Self {
        Self {
            marker_tolerance: DEFAULT_MARKER_HIT_TOLERANCE,
            polyline_tolerance: DEFAULT_POLYLINE_HIT_TOLERANCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Deliver frame ticks immediately after construction
    pub start_rendering: bool,
    pub animation: AnimationConfig,
    pub hit_test: HitTestConfig,
}

impl MapConfig {
    /// Parses a (possibly partial) JSON document and validates it
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.min_zoom.is_finite() && self.max_zoom.is_finite()) {
            return Err(MapError::InvalidConfig(
                "zoom limits must be finite".to_string(),
            ));
        }
        if self.min_zoom < MIN_ZOOM || self.max_zoom > MAX_ZOOM {
            return Err(MapError::InvalidConfig(format!(
                "zoom limits [{}, {}] exceed [{}, {}]",
                self.min_zoom, self.max_zoom, MIN_ZOOM, MAX_ZOOM
            )));
        }
        if self.min_zoom > self.max_zoom {
            return Err(MapError::InvalidConfig(format!(
                "min_zoom {} is greater than max_zoom {}",
                self.min_zoom, self.max_zoom
            )));
        }
        let tolerances = [self.hit_test.marker_tolerance, self.hit_test.polyline_tolerance];
        if tolerances.iter().any(|t| !t.is_finite() || *t < 0.0) {
            return Err(MapError::InvalidConfig(
                "hit-test tolerances must be finite and non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            start_rendering: true,
            animation: AnimationConfig::default(),
            hit_test: HitTestConfig::default(),
        }
    }
}
