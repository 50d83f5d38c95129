//! # mapview-core
//!
//! The camera, projection and overlay core of an interactive map view.
//!
//! The crate owns everything a map view needs to answer "where is this
//! coordinate on screen" and "what did the user tap": Web Mercator math, an
//! immutable [`Projection`] snapshot, a clamping [`Camera`] state machine, a
//! tick-driven animation scheduler and a registry of markers and polylines
//! with screen-space hit-testing. Rendering, tile fetching and gesture
//! recognition live in the embedding application, which feeds the core input
//! events and frame ticks and receives notifications through a
//! [`MapViewDelegate`].

pub mod animation;
pub mod core;
pub mod input;
pub mod overlays;
pub mod prelude;
pub mod spatial;
pub mod traits;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    builder::MapViewBuilder,
    camera::Camera,
    config::MapConfig,
    delegate::{InfoWindow, Location, MapViewDelegate},
    geo::{LatLng, LatLngBounds, Point},
    map::{MapType, MapView},
    projection::Projection,
    viewport::Viewport,
};

pub use animation::{
    easing::EasingFunction,
    scheduler::{AnimationJob, AnimationScheduler, AnimationSpec, CameraField, CameraUpdate},
};

pub use overlays::{
    base::{OverlayHandle, OverlayTrait, OverlayType, Removable, Styleable},
    marker::Marker,
    options::{MarkerOptions, PolylineOptions},
    polyline::Polyline,
    registry::OverlayRegistry,
};

pub use input::events::{EventHandled, InputEvent};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Invalid viewport {width}x{height}: no invertible projection")]
    InvalidViewport { width: f64, height: f64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid overlay options: {0}")]
    InvalidOptions(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = MapError;
