//! Core constants shared by the projection, camera and hit-testing code.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Square tile size in points; zoom 0 shows the whole world in one tile.
pub const TILE_SIZE: f64 = 256.0;

/// Minimum zoom (farthest from the Earth's surface).
pub const MIN_ZOOM: f64 = 0.0;

/// Maximum zoom (closest to the Earth's surface).
pub const MAX_ZOOM: f64 = 21.0;

/// Hard ceiling on the viewing angle, in degrees from straight down.
pub const MAX_TILT: f64 = 45.0;

/// Viewing angle ceiling when zoomed out to `TILT_LOW_ZOOM` or beyond.
pub const MAX_TILT_LOW_ZOOM: f64 = 30.0;

/// Zoom at or below which the tilt ceiling is `MAX_TILT_LOW_ZOOM`.
pub const TILT_LOW_ZOOM: f64 = 10.0;

/// Zoom at or above which the tilt ceiling is `MAX_TILT`.
pub const TILT_HIGH_ZOOM: f64 = 16.0;

/// Web Mercator is undefined at the poles; latitudes are clamped to this.
pub const MAX_LATITUDE: f64 = 85.0511287798;

/// WGS84 equatorial radius in meters.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Equatorial circumference in meters (2πR).
pub const EARTH_CIRCUMFERENCE: f64 = 2.0 * std::f64::consts::PI * EARTH_RADIUS;

/// Marker icon default size (regular PNG).
pub const MARKER_ICON_SIZE: (u32, u32) = (25, 41);

/// Anchor inside the icon (hot-spot) in pixel coords.
pub const MARKER_ICON_ANCHOR: (u32, u32) = (12, 41);

/// Taps within this many points of a marker's anchor select it.
pub const DEFAULT_MARKER_HIT_TOLERANCE: f64 = 22.0;

/// Taps within this many points of a polyline's edge select it.
pub const DEFAULT_POLYLINE_HIT_TOLERANCE: f64 = 8.0;

/// Custom info windows may not exceed this size on either dimension.
pub const MAX_INFO_WINDOW_SIZE: f64 = 500.0;

/// Default animation durations in milliseconds, per animated camera field.
pub const DEFAULT_LOCATION_DURATION_MS: u64 = 500;
pub const DEFAULT_ZOOM_DURATION_MS: u64 = 350;
pub const DEFAULT_BEARING_DURATION_MS: u64 = 400;
pub const DEFAULT_VIEWING_ANGLE_DURATION_MS: u64 = 400;
