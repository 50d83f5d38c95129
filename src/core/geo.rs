use crate::core::constants::{EARTH_CIRCUMFERENCE, MAX_LATITUDE, TILE_SIZE};
use geo::HaversineDistance;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Saturates latitude to [-90, 90] and wraps longitude to [-180, 180].
    /// Non-finite components become 0.
    pub fn clamped(&self) -> Self {
        let lat = if self.lat.is_nan() {
            0.0
        } else {
            self.lat.clamp(-90.0, 90.0)
        };
        let lng = if self.lng.is_finite() {
            Self::wrap_lng(self.lng)
        } else {
            0.0
        };
        Self::new(lat, lng)
    }

    /// Calculates the great-circle distance to another LatLng in meters
    pub fn distance_to(&self, other: &LatLng) -> f64 {
        geo::Point::from(*self).haversine_distance(&geo::Point::from(*other))
    }

    /// Wraps longitude to [-180, 180] range
    pub fn wrap_lng(lng: f64) -> f64 {
        let wrapped = lng % 360.0;
        if wrapped > 180.0 {
            wrapped - 360.0
        } else if wrapped < -180.0 {
            wrapped + 360.0
        } else {
            wrapped
        }
    }

    /// Clamps latitude to the range Web Mercator can represent
    pub fn clamp_lat(lat: f64) -> f64 {
        if lat.is_nan() {
            return 0.0;
        }
        lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
    }

    /// Projects to the normalized Web Mercator world square.
    ///
    /// `x` grows eastwards from 0 at the antimeridian, `y` grows southwards
    /// from 0 at the northern Mercator limit. Both lie in [0, 1].
    pub fn to_world(&self) -> Point {
        let lat = Self::clamp_lat(self.lat);
        let x = (self.lng + 180.0) / 360.0;
        let y = 0.5 - (PI / 4.0 + lat * PI / 360.0).tan().ln() / (2.0 * PI);
        Point::new(x, y.clamp(0.0, 1.0))
    }

    /// Inverse of [`LatLng::to_world`]. `x` outside [0, 1) wraps around the
    /// globe; `y` saturates at the Mercator limits. Longitude comes back in
    /// [-180, 180), so the antimeridian at 180 is returned as -180.
    pub fn from_world(point: Point) -> Self {
        let x = point.x.rem_euclid(1.0);
        let y = point.y.clamp(0.0, 1.0);
        let lng = x * 360.0 - 180.0;
        let lat = (2.0 * ((0.5 - y) * 2.0 * PI).exp().atan() - PI / 2.0).to_degrees();
        Self::new(lat, Self::wrap_lng(lng))
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<LatLng> for geo_types::Point<f64> {
    fn from(lat_lng: LatLng) -> Self {
        geo_types::Point::new(lat_lng.lng, lat_lng.lat)
    }
}

impl From<LatLng> for geo_types::Coord<f64> {
    fn from(lat_lng: LatLng) -> Self {
        geo_types::coord! { x: lat_lng.lng, y: lat_lng.lat }
    }
}

impl From<geo_types::Point<f64>> for LatLng {
    fn from(point: geo_types::Point<f64>) -> Self {
        LatLng::new(point.y(), point.x())
    }
}

/// Number of points spanned by the whole world at `zoom`.
pub fn world_size(zoom: f64) -> f64 {
    TILE_SIZE * 2_f64.powf(zoom)
}

/// Ground resolution in meters per screen point at `lat` and `zoom`
pub fn meters_per_pixel(lat: f64, zoom: f64) -> f64 {
    let lat = LatLng::clamp_lat(lat);
    EARTH_CIRCUMFERENCE * lat.to_radians().cos() / world_size(zoom)
}

/// Represents a point in screen or projected coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Shortest distance from this point to the segment `a`-`b`
    pub fn distance_to_segment(&self, a: &Point, b: &Point) -> f64 {
        let dx = b.x - a.x;
        let dy = b.y - a.y;

        if dx == 0.0 && dy == 0.0 {
            // Degenerate segment
            return self.distance_to(a);
        }

        let t = ((self.x - a.x) * dx + (self.y - a.y) * dy) / (dx * dx + dy * dy);
        let t = t.clamp(0.0, 1.0);

        self.distance_to(&Point::new(a.x + t * dx, a.y + t * dy))
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a bounding box of geographical coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Smallest bounds containing every coordinate, `None` for an empty slice
    pub fn from_points(points: &[LatLng]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::new(*first, *first);
        for point in rest {
            bounds.extend(point);
        }
        Some(bounds)
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Extends the bounds to include a point
    pub fn extend(&mut self, point: &LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }
}
