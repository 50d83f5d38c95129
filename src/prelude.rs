//! Prelude module for common mapview-core types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use mapview_core::prelude::*;`

pub use crate::core::{
    builder::MapViewBuilder,
    camera::{clamp_bearing, clamp_tilt, clamp_zoom, max_tilt_for_zoom, Camera},
    config::{AnimationConfig, HitTestConfig, MapConfig},
    delegate::{InfoWindow, Location, MapViewDelegate},
    geo::{LatLng, LatLngBounds, Point},
    map::{MapType, MapView},
    projection::Projection,
    viewport::Viewport,
};

pub use crate::animation::{
    easing::EasingFunction,
    scheduler::{AnimationScheduler, AnimationSpec, CameraField, CameraUpdate},
};

pub use crate::overlays::{
    base::{
        OverlayHandle, OverlayProperties, OverlayTrait, OverlayType, Removable, Styleable,
    },
    marker::{Marker, MarkerStyle},
    options::{
        Color, MarkerOptions, MarkerOptionsBuilder, PolylineOptions, PolylineOptionsBuilder,
    },
    polyline::{Polyline, PolylineStyle},
    registry::OverlayRegistry,
};

pub use crate::input::events::{EventHandled, InputEvent};

pub use crate::traits::{Configurable, Lerp};

pub use crate::{Error as MapError, Result};

pub use std::time::Duration;

pub use instant::Instant;

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
