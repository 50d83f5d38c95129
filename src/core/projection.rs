//! Immutable mapping between geographic coordinates and screen points.
//!
//! A [`Projection`] is a snapshot of one camera and one viewport. The
//! forward chain is: normalized Web Mercator world position, offset from
//! the camera target (wrapped to the nearest copy of the world), scaled by
//! `256 * 2^zoom`, rotated by `-bearing`, foreshortened vertically by
//! `cos(tilt)`, then translated to the viewport center. Every step is
//! invertible, so [`Projection::coordinate_for_point`] undoes it exactly.

use crate::{
    core::{
        camera::Camera,
        geo::{meters_per_pixel, world_size, LatLng, LatLngBounds, Point},
        viewport::Viewport,
    },
    MapError, Result,
};
use nalgebra::{Rotation2, Vector2};

/// Wraps a world-unit x offset into [-0.5, 0.5]
fn wrap_offset(dx: f64) -> f64 {
    dx - dx.round()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    camera: Camera,
    viewport: Viewport,
    /// World width in points at the camera zoom
    scale: f64,
    /// Camera target in normalized world units
    center: Point,
    /// World-to-screen rotation (`-bearing`)
    rotation: Rotation2<f64>,
    /// Vertical foreshortening factor, `cos(tilt)`
    foreshortening: f64,
}

impl Projection {
    /// Builds a projection for `camera` seen through `viewport`.
    ///
    /// Fails with [`MapError::InvalidViewport`] when the viewport has no
    /// area, since such a projection cannot be inverted.
    pub fn new(camera: Camera, viewport: Viewport) -> Result<Self> {
        if !viewport.is_valid() {
            log::warn!(
                "refusing to build projection for {}x{} viewport",
                viewport.width,
                viewport.height
            );
            return Err(MapError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let camera = camera.clamped();
        Ok(Self {
            camera,
            viewport,
            scale: world_size(camera.zoom),
            center: camera.target.to_world(),
            rotation: Rotation2::new(-camera.bearing.to_radians()),
            foreshortening: camera.tilt.to_radians().cos(),
        })
    }

    /// The camera this snapshot was taken from
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The viewport this snapshot was taken from
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Maps an Earth coordinate to a screen point
    pub fn point_for_coordinate(&self, coordinate: LatLng) -> Point {
        let world = coordinate.to_world();
        self.offset_to_screen(
            wrap_offset(world.x - self.center.x),
            world.y - self.center.y,
        )
    }

    /// Maps a screen point to an Earth coordinate
    pub fn coordinate_for_point(&self, point: Point) -> LatLng {
        LatLng::from_world(self.world_for_point(point))
    }

    /// Converts a ground distance at `coordinate` to screen points.
    /// Only accurate for short distances.
    pub fn points_for_meters(&self, meters: f64, coordinate: LatLng) -> f64 {
        meters / meters_per_pixel(coordinate.lat, self.camera.zoom)
    }

    /// Normalized world position under a screen point. `x` is not wrapped,
    /// so points left of the antimeridian may be negative.
    pub fn world_for_point(&self, point: Point) -> Point {
        let (dx, dy) = self.screen_to_offset(point);
        Point::new(self.center.x + dx, self.center.y + dy)
    }

    /// Largest world-unit distance that can appear as `pixels` on screen.
    /// Tilt stretches the ground away from the viewer, so the radius grows by
    /// `1 / cos(tilt)`.
    pub fn world_radius_for(&self, pixels: f64) -> f64 {
        pixels / (self.scale * self.foreshortening)
    }

    /// Screen distance between `point` and `coordinate`, measured to the copy
    /// of the coordinate nearest to the point.
    pub fn screen_distance(&self, point: Point, coordinate: LatLng) -> f64 {
        point.distance_to(&self.point_for_coordinate_near(point, coordinate))
    }

    /// Projects a path of vertices to screen space. The first vertex is
    /// placed on the world copy nearest to `near`, and every following vertex
    /// on the copy nearest its predecessor, so segments never jump across the
    /// screen at the antimeridian.
    pub fn screen_path(&self, near: Point, vertices: &[LatLng]) -> Vec<Point> {
        let anchor = self.world_for_point(near);
        self.unwrapped_world_path(anchor.x, vertices)
            .iter()
            .map(|world| self.world_to_screen(world, 0.0))
            .collect()
    }

    /// Every world copy of the unwrapped path that passes within one world
    /// width of `near`. A path spanning more than half the globe can have its
    /// section under `near` on a different copy than its first vertex.
    pub fn screen_path_copies(&self, near: Point, vertices: &[LatLng]) -> Vec<Vec<Point>> {
        let anchor = self.world_for_point(near);
        let path = self.unwrapped_world_path(anchor.x, vertices);
        let Some((min_x, max_x)) = path.iter().fold(None, |range: Option<(f64, f64)>, p| {
            Some(range.map_or((p.x, p.x), |(lo, hi)| (lo.min(p.x), hi.max(p.x))))
        }) else {
            return Vec::new();
        };

        let first = (anchor.x - 1.0 - max_x).ceil() as i64;
        let last = (anchor.x + 1.0 - min_x).floor() as i64;
        (first..=last)
            .map(|shift| {
                path.iter()
                    .map(|world| self.world_to_screen(world, shift as f64))
                    .collect::<Vec<Point>>()
            })
            .collect()
    }

    /// World positions of `vertices` with longitudes unwrapped into one
    /// continuous run, starting from the copy nearest `anchor_x`
    fn unwrapped_world_path(&self, anchor_x: f64, vertices: &[LatLng]) -> Vec<Point> {
        let mut previous_x = anchor_x;
        vertices
            .iter()
            .map(|vertex| {
                let world = vertex.to_world();
                let x = previous_x + wrap_offset(world.x - previous_x);
                previous_x = x;
                Point::new(x, world.y)
            })
            .collect()
    }

    fn world_to_screen(&self, world: &Point, shift: f64) -> Point {
        self.offset_to_screen(world.x + shift - self.center.x, world.y - self.center.y)
    }

    /// Approximate geographic bounds of the visible area
    pub fn visible_bounds(&self) -> LatLngBounds {
        let corners: Vec<LatLng> = self
            .viewport
            .corners()
            .iter()
            .map(|corner| self.coordinate_for_point(*corner))
            .collect();
        LatLngBounds::from_points(&corners)
            .unwrap_or_else(|| LatLngBounds::new(self.camera.target, self.camera.target))
    }

    fn point_for_coordinate_near(&self, near: Point, coordinate: LatLng) -> Point {
        let anchor = self.world_for_point(near);
        let world = coordinate.to_world();
        let x = anchor.x + wrap_offset(world.x - anchor.x);
        self.offset_to_screen(x - self.center.x, world.y - self.center.y)
    }

    fn offset_to_screen(&self, dx: f64, dy: f64) -> Point {
        let rotated = self.rotation * Vector2::new(dx * self.scale, dy * self.scale);
        let center = self.viewport.center();
        Point::new(center.x + rotated.x, center.y + rotated.y * self.foreshortening)
    }

    fn screen_to_offset(&self, point: Point) -> (f64, f64) {
        let center = self.viewport.center();
        let tilted = Vector2::new(point.x - center.x, (point.y - center.y) / self.foreshortening);
        let unrotated = self.rotation.inverse() * tilted;
        (unrotated.x / self.scale, unrotated.y / self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projection(camera: Camera) -> Projection {
        Projection::new(camera, Viewport::new(800.0, 600.0)).expect("valid viewport")
    }

    #[test]
    fn test_target_maps_to_viewport_center() {
        let camera = Camera::make(37.7749, -122.4194, 12.0)
            .with_bearing(33.0)
            .with_tilt(20.0);
        let point = projection(camera).point_for_coordinate(camera.target);

        assert!((point.x - 400.0).abs() < 1e-6);
        assert!((point.y - 300.0).abs() < 1e-6);
    }

    #[test]
    fn test_north_up_orientation() {
        let proj = projection(Camera::make(0.0, 0.0, 2.0));

        let east = proj.point_for_coordinate(LatLng::new(0.0, 10.0));
        assert!(east.x > 400.0);
        assert!((east.y - 300.0).abs() < 1e-9);

        let north = proj.point_for_coordinate(LatLng::new(10.0, 0.0));
        assert!(north.y < 300.0);
    }

    #[test]
    fn test_bearing_rotates_heading_to_top() {
        // Facing east, points east of the target are straight up the screen
        let proj = projection(Camera::make(0.0, 0.0, 2.0).with_bearing(90.0));
        let east = proj.point_for_coordinate(LatLng::new(0.0, 10.0));

        assert!((east.x - 400.0).abs() < 1e-6);
        assert!(east.y < 300.0);
    }

    #[test]
    fn test_tilt_foreshortens_vertically() {
        let flat = projection(Camera::make(0.0, 0.0, 16.0));
        let tilted = projection(Camera::make(0.0, 0.0, 16.0).with_tilt(45.0));
        let coordinate = LatLng::new(0.001, 0.001);

        let a = flat.point_for_coordinate(coordinate);
        let b = tilted.point_for_coordinate(coordinate);
        assert!((a.x - b.x).abs() < 1e-9);
        assert!(((b.y - 300.0) - (a.y - 300.0) * 45_f64.to_radians().cos()).abs() < 1e-9);
    }

    #[test]
    fn test_points_for_meters() {
        let proj = projection(Camera::make(0.0, 0.0, 0.0));
        let points = proj.points_for_meters(156_543.03, LatLng::new(0.0, 0.0));
        assert!((points - 1.0).abs() < 1e-6);

        let proj = projection(Camera::make(0.0, 0.0, 10.0));
        let at_sixty = proj.points_for_meters(100.0, LatLng::new(60.0, 0.0));
        let at_equator = proj.points_for_meters(100.0, LatLng::new(0.0, 0.0));
        assert!((at_sixty - 2.0 * at_equator).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_viewport_is_reported() {
        let result = Projection::new(Camera::default(), Viewport::new(0.0, 100.0));
        assert!(matches!(result, Err(MapError::InvalidViewport { .. })));
    }

    #[test]
    fn test_antimeridian_wraps_to_nearest_copy() {
        let proj = projection(Camera::make(0.0, 179.0, 4.0));
        let across = proj.point_for_coordinate(LatLng::new(0.0, -179.0));

        // Two degrees east of the target, not 358 degrees west
        assert!(across.x > 400.0);
        assert!(across.x < 800.0);
    }

    #[test]
    fn test_screen_path_is_continuous_across_antimeridian() {
        let proj = projection(Camera::make(0.0, 180.0, 4.0));
        let path = proj.screen_path(
            Point::new(400.0, 300.0),
            &[LatLng::new(0.0, 178.0), LatLng::new(0.0, -178.0)],
        );

        assert_eq!(path.len(), 2);
        assert!(path[0].x < 400.0);
        assert!(path[1].x > 400.0);
        assert!(path[1].x - path[0].x < 100.0);
    }

    #[test]
    fn test_screen_path_copies_cover_the_tap() {
        let proj = projection(Camera::make(0.0, 150.0, 3.0));
        let vertices: Vec<LatLng> = [-170.0, -100.0, -30.0, 40.0, 110.0, 150.0]
            .iter()
            .map(|lng| LatLng::new(0.0, *lng))
            .collect();
        let tap = proj.point_for_coordinate(LatLng::new(0.0, 130.0));

        // Unwrapped from the first vertex, the path sits a world away from the tap
        let single = proj.screen_path(tap, &vertices);
        assert!(single.iter().all(|p| p.x > tap.x + 100.0));

        let copies = proj.screen_path_copies(tap, &vertices);
        assert!(copies.len() >= 2);
        let covering = copies.iter().any(|path| {
            path.windows(2)
                .any(|segment| tap.distance_to_segment(&segment[0], &segment[1]) < 1e-6)
        });
        assert!(covering);
        assert!(proj.screen_path_copies(tap, &[]).is_empty());
    }
}
