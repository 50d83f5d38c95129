//! Screen-space hit-testing of overlays.
//!
//! Markers are tested first and always win over polylines. Within a kind the
//! overlay nearest to the tap wins; equal distances go to the overlay added
//! most recently. Hidden and non-tappable overlays are skipped.

use crate::{
    core::{config::HitTestConfig, geo::Point, projection::Projection},
    overlays::{
        base::{OverlayHandle, OverlayTrait},
        polyline::Polyline,
        registry::OverlayRegistry,
    },
};

/// Finds the overlay under `point`, if any
pub fn hit_test(
    registry: &OverlayRegistry,
    projection: &Projection,
    point: Point,
    config: &HitTestConfig,
) -> Option<OverlayHandle> {
    hit_test_markers(registry, projection, point, config.marker_tolerance)
        .or_else(|| hit_test_polylines(registry, projection, point, config.polyline_tolerance))
}

/// Nearest marker whose anchor lies within `tolerance` points of `point`
pub fn hit_test_markers(
    registry: &OverlayRegistry,
    projection: &Projection,
    point: Point,
    tolerance: f64,
) -> Option<OverlayHandle> {
    let world = projection.world_for_point(point);
    let world = Point::new(world.x.rem_euclid(1.0), world.y);
    let radius = projection.world_radius_for(tolerance);

    // Ids ascend in insertion order, so `<=` hands ties to the newest marker
    let mut best: Option<(f64, OverlayHandle)> = None;
    for id in registry.spatial_index().query_radius_wrapped(&world, radius) {
        let Some(marker) = registry.marker_by_id(id) else {
            continue;
        };
        if !marker.is_interactive() {
            continue;
        }
        let distance = projection.screen_distance(point, marker.position());
        if distance > tolerance {
            continue;
        }
        if best.map_or(true, |(nearest, _)| distance <= nearest) {
            best = Some((distance, marker.handle()));
        }
    }

    best.map(|(_, handle)| handle)
}

/// Nearest polyline whose stroke, widened by `tolerance` points, covers `point`
pub fn hit_test_polylines(
    registry: &OverlayRegistry,
    projection: &Projection,
    point: Point,
    tolerance: f64,
) -> Option<OverlayHandle> {
    let mut best: Option<(f64, OverlayHandle)> = None;
    for polyline in registry.polylines() {
        if !polyline.is_interactive() {
            continue;
        }
        let Some(distance) = screen_distance_to_path(projection, point, polyline) else {
            continue;
        };
        if distance > tolerance + polyline.width() / 2.0 {
            continue;
        }
        if best.map_or(true, |(nearest, _)| distance <= nearest) {
            best = Some((distance, polyline.handle()));
        }
    }

    best.map(|(_, handle)| handle)
}

/// Distance in points from `point` to the nearest segment of `polyline`,
/// over every world copy of the path near the point. `None` for a polyline
/// without vertices.
pub fn screen_distance_to_path(
    projection: &Projection,
    point: Point,
    polyline: &Polyline,
) -> Option<f64> {
    projection
        .screen_path_copies(point, polyline.vertices())
        .iter()
        .filter_map(|path| match path.as_slice() {
            [] => None,
            [single] => Some(point.distance_to(single)),
            _ => path
                .windows(2)
                .map(|segment| point.distance_to_segment(&segment[0], &segment[1]))
                .min_by(|a, b| a.total_cmp(b)),
        })
        .min_by(|a, b| a.total_cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{camera::Camera, geo::LatLng, viewport::Viewport},
        overlays::options::{MarkerOptions, PolylineOptions},
    };

    fn projection() -> Projection {
        Projection::new(Camera::make(0.0, 0.0, 10.0), Viewport::new(800.0, 600.0))
            .expect("valid viewport")
    }

    #[test]
    fn test_marker_within_tolerance() {
        let proj = projection();
        let mut registry = OverlayRegistry::new();
        let handle = registry.add_marker(&MarkerOptions::new(LatLng::new(0.0, 0.0)));

        let config = HitTestConfig::default();
        assert_eq!(hit_test(&registry, &proj, Point::new(410.0, 305.0), &config), Some(handle));
        assert_eq!(hit_test(&registry, &proj, Point::new(450.0, 300.0), &config), None);
    }

    #[test]
    fn test_nearest_marker_wins_and_ties_go_to_newest() {
        let proj = projection();
        let mut registry = OverlayRegistry::new();
        let first = registry.add_marker(&MarkerOptions::new(LatLng::new(0.0, 0.0)));
        let second = registry.add_marker(&MarkerOptions::new(LatLng::new(0.0, 0.0)));
        let east = proj.coordinate_for_point(Point::new(415.0, 300.0));
        let third = registry.add_marker(&MarkerOptions::new(east));

        let config = HitTestConfig::default();
        assert_eq!(hit_test(&registry, &proj, Point::new(400.0, 300.0), &config), Some(second));
        assert_eq!(hit_test(&registry, &proj, Point::new(414.0, 300.0), &config), Some(third));

        registry.remove(second);
        assert_eq!(hit_test(&registry, &proj, Point::new(400.0, 300.0), &config), Some(first));
    }

    #[test]
    fn test_markers_take_precedence_over_polylines() {
        let proj = projection();
        let mut registry = OverlayRegistry::new();
        let line = registry.add_polyline(&PolylineOptions::new(vec![
            LatLng::new(0.0, -1.0),
            LatLng::new(0.0, 1.0),
        ]));
        let config = HitTestConfig::default();
        assert_eq!(hit_test(&registry, &proj, Point::new(400.0, 300.0), &config), Some(line));

        let marker = registry.add_marker(&MarkerOptions::new(LatLng::new(0.0, 0.0)));
        assert_eq!(hit_test(&registry, &proj, Point::new(400.0, 300.0), &config), Some(marker));
    }

    #[test]
    fn test_polyline_band_includes_half_width() {
        let proj = projection();
        let mut registry = OverlayRegistry::new();
        let options = PolylineOptions::builder()
            .with_vertex(LatLng::new(0.0, -1.0))
            .with_vertex(LatLng::new(0.0, 1.0))
            .width(20.0)
            .build()
            .expect("valid options");
        let line = registry.add_polyline(&options);

        let config = HitTestConfig {
            polyline_tolerance: 5.0,
            ..HitTestConfig::default()
        };
        assert_eq!(hit_test(&registry, &proj, Point::new(400.0, 314.0), &config), Some(line));
        assert_eq!(hit_test(&registry, &proj, Point::new(400.0, 316.0), &config), None);
    }

    #[test]
    fn test_hidden_and_untappable_are_skipped() {
        let proj = projection();
        let mut registry = OverlayRegistry::new();
        registry.add_marker(
            &MarkerOptions::builder(LatLng::new(0.0, 0.0))
                .visible(false)
                .build()
                .expect("valid options"),
        );
        registry.add_polyline(
            &PolylineOptions::builder()
                .with_vertex(LatLng::new(0.0, -1.0))
                .with_vertex(LatLng::new(0.0, 1.0))
                .tappable(false)
                .build()
                .expect("valid options"),
        );

        let config = HitTestConfig::default();
        assert_eq!(hit_test(&registry, &proj, Point::new(400.0, 300.0), &config), None);
    }

    #[test]
    fn test_marker_across_antimeridian() {
        let proj = Projection::new(Camera::make(0.0, 180.0, 10.0), Viewport::new(800.0, 600.0))
            .expect("valid viewport");
        let mut registry = OverlayRegistry::new();
        let coordinate = proj.coordinate_for_point(Point::new(405.0, 300.0));
        let handle = registry.add_marker(&MarkerOptions::new(coordinate));

        let config = HitTestConfig::default();
        assert_eq!(hit_test(&registry, &proj, Point::new(395.0, 300.0), &config), Some(handle));
    }

    #[test]
    fn test_polyline_across_antimeridian() {
        let proj = Projection::new(Camera::make(0.0, 180.0, 6.0), Viewport::new(800.0, 600.0))
            .expect("valid viewport");
        let mut registry = OverlayRegistry::new();
        let line = registry.add_polyline(&PolylineOptions::new(vec![
            LatLng::new(0.0, 179.0),
            LatLng::new(0.0, -179.0),
        ]));

        let config = HitTestConfig::default();
        assert_eq!(hit_test(&registry, &proj, Point::new(400.0, 300.0), &config), Some(line));
    }

    #[test]
    fn test_tap_on_long_path_away_from_first_vertex() {
        let proj = Projection::new(Camera::make(0.0, 150.0, 3.0), Viewport::new(800.0, 600.0))
            .expect("valid viewport");
        let mut registry = OverlayRegistry::new();
        let vertices = [-170.0, -100.0, -30.0, 40.0, 110.0, 150.0]
            .iter()
            .map(|lng| LatLng::new(0.0, *lng))
            .collect();
        let line = registry.add_polyline(&PolylineOptions::new(vertices));

        let tap = proj.point_for_coordinate(LatLng::new(0.0, 130.0));
        let distance = screen_distance_to_path(&proj, tap, registry.polyline(line).expect("live"))
            .expect("non-empty path");
        assert!(distance < 1e-6);

        let config = HitTestConfig::default();
        assert_eq!(hit_test(&registry, &proj, tap, &config), Some(line));
    }
}
