//! Notifications from a [`MapView`] to the embedding application.
//!
//! The map view keeps its delegate behind a [`std::rc::Weak`], so dropping
//! the delegate simply stops notifications. Every method has a no-op
//! default; implement only the ones you need. Delegates receive the map view
//! by shared reference and can query it, but cannot mutate it from inside a
//! callback.

use crate::{
    core::{camera::Camera, constants::MAX_INFO_WINDOW_SIZE, geo::LatLng, map::MapView},
    overlays::base::OverlayHandle,
};
use serde::{Deserialize, Serialize};

/// A position fix reported by the embedder's location provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub coordinate: LatLng,
    /// Radius of uncertainty in meters
    pub horizontal_accuracy_m: f64,
}

impl Location {
    pub fn new(coordinate: LatLng, horizontal_accuracy_m: f64) -> Self {
        Self {
            coordinate,
            horizontal_accuracy_m,
        }
    }
}

/// Custom info window content for a selected marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoWindow {
    pub width: f64,
    pub height: f64,
    /// Opaque to the map view, interpreted by the renderer
    pub content: String,
}

impl InfoWindow {
    /// Dimensions are clamped to [0, 500] points
    pub fn new(width: f64, height: f64, content: impl Into<String>) -> Self {
        Self {
            width: clamp_dimension(width),
            height: clamp_dimension(height),
            content: content.into(),
        }
    }
}

fn clamp_dimension(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, MAX_INFO_WINDOW_SIZE)
    }
}

#[allow(unused_variables)]
pub trait MapViewDelegate {
    /// The camera settled: after a direct change, or when the last running
    /// animation finished
    fn did_change_camera_position(&mut self, map: &MapView, camera: &Camera) {}

    /// A tap that hit no overlay
    fn did_tap_at_coordinate(&mut self, map: &MapView, coordinate: LatLng) {}

    fn did_long_press_at_coordinate(&mut self, map: &MapView, coordinate: LatLng) {}

    /// Return `true` to suppress the default behavior of selecting the marker
    fn did_tap_marker(&mut self, map: &MapView, marker: OverlayHandle) -> bool {
        false
    }

    fn did_tap_polyline(&mut self, map: &MapView, polyline: OverlayHandle) {}

    fn did_tap_info_window(&mut self, map: &MapView, marker: OverlayHandle) {}

    /// Custom info window for a marker about to be selected. `None` uses the
    /// default window built from the marker's title and snippet.
    fn marker_info_window(&mut self, map: &MapView, marker: OverlayHandle) -> Option<InfoWindow> {
        None
    }

    fn did_change_selected_marker(&mut self, map: &MapView, marker: Option<OverlayHandle>) {}

    fn did_change_my_location(&mut self, map: &MapView, location: Option<Location>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_window_is_clamped() {
        let window = InfoWindow::new(800.0, -3.0, "<b>hi</b>");
        assert_eq!(window.width, 500.0);
        assert_eq!(window.height, 0.0);
        assert_eq!(window.content, "<b>hi</b>");

        let nan = InfoWindow::new(f64::NAN, 120.0, "");
        assert_eq!(nan.width, 0.0);
        assert_eq!(nan.height, 120.0);
    }

    #[test]
    fn test_location() {
        let location = Location::new(LatLng::new(1.0, 2.0), 15.0);
        assert_eq!(location.coordinate, LatLng::new(1.0, 2.0));
        assert_eq!(location.horizontal_accuracy_m, 15.0);
    }
}
