use crate::{core::geo::LatLngBounds, Result};

use serde::{Deserialize, Serialize};
use std::any::Any;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverlayType {
    Marker,
    Polyline,
}

impl std::fmt::Display for OverlayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverlayType::Marker => write!(f, "marker"),
            OverlayType::Polyline => write!(f, "polyline"),
        }
    }
}

/// Identity of an overlay owned by an [`OverlayRegistry`].
///
/// Ids are never reused, so a handle to a removed overlay stays stale
/// forever instead of aliasing a newer one.
///
/// [`OverlayRegistry`]: crate::overlays::registry::OverlayRegistry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayHandle {
    id: u64,
    kind: OverlayType,
}

impl OverlayHandle {
    pub(crate) fn new(id: u64, kind: OverlayType) -> Self {
        Self { id, kind }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> OverlayType {
        self.kind
    }

    pub fn is_marker(&self) -> bool {
        self.kind == OverlayType::Marker
    }

    pub fn is_polyline(&self) -> bool {
        self.kind == OverlayType::Polyline
    }
}

impl std::fmt::Display for OverlayHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.kind, self.id)
    }
}

/// State shared by every overlay kind
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayProperties {
    pub handle: OverlayHandle,
    /// Title, also used as the accessibility label
    pub title: Option<String>,
    pub z_index: i32,
    pub visible: bool,
    /// Whether taps can select this overlay
    pub tappable: bool,
}

impl OverlayProperties {
    pub fn new(handle: OverlayHandle) -> Self {
        Self {
            handle,
            title: None,
            z_index: 0,
            visible: true,
            tappable: true,
        }
    }
}

/// Common behavior of overlays stored in the registry
pub trait OverlayTrait: Any {
    fn handle(&self) -> OverlayHandle;

    fn overlay_type(&self) -> OverlayType {
        self.handle().kind()
    }

    fn title(&self) -> Option<&str>;

    fn set_title(&mut self, title: Option<String>);

    fn z_index(&self) -> i32;

    fn set_z_index(&mut self, z_index: i32);

    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    fn is_tappable(&self) -> bool;

    fn set_tappable(&mut self, tappable: bool);

    /// Whether hit-testing should consider this overlay
    fn is_interactive(&self) -> bool {
        self.is_visible() && self.is_tappable()
    }

    /// Geographic extent, `None` for overlays without geometry
    fn bounds(&self) -> Option<LatLngBounds>;

    /// Current state as the JSON form of the overlay's options struct
    fn options(&self) -> serde_json::Value;

    /// Replaces the overlay's state from the JSON form of its options struct.
    /// The handle is kept.
    fn set_options(&mut self, options: serde_json::Value) -> Result<()>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Overlays with a typed visual style
pub trait Styleable {
    type Style;

    fn style(&self) -> &Self::Style;

    fn set_style(&mut self, style: Self::Style);
}

/// Anything that identifies an overlay for removal from the registry
pub trait Removable {
    fn overlay_handle(&self) -> OverlayHandle;
}

impl Removable for OverlayHandle {
    fn overlay_handle(&self) -> OverlayHandle {
        *self
    }
}
