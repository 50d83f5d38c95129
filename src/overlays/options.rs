//! Immutable option structs describing overlays to add.
//!
//! Options are plain values: the registry copies them when an overlay is
//! added, and later changes to an options value do not affect the overlay.

use crate::{
    core::{
        constants::{MARKER_ICON_ANCHOR, MARKER_ICON_SIZE},
        geo::LatLng,
    },
    MapError, Result,
};
use serde::{Deserialize, Serialize};

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLUE
    }
}

fn check_coordinate(coordinate: &LatLng, what: &str) -> Result<()> {
    if coordinate.lat.is_finite() && coordinate.lng.is_finite() {
        Ok(())
    } else {
        Err(MapError::InvalidOptions(format!(
            "{} ({}, {}) is not finite",
            what, coordinate.lat, coordinate.lng
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerOptions {
    pub position: LatLng,
    pub title: Option<String>,
    pub snippet: Option<String>,
    /// Icon reference resolved by the renderer; `None` for the default pin
    pub icon: Option<String>,
    pub icon_size: (u32, u32),
    /// Pixel of the icon placed on `position`
    pub icon_anchor: (u32, u32),
    pub opacity: f32,
    pub z_index: i32,
    pub visible: bool,
    pub tappable: bool,
}

impl MarkerOptions {
    pub fn new(position: LatLng) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn builder(position: LatLng) -> MarkerOptionsBuilder {
        MarkerOptionsBuilder::new(position)
    }

    pub fn validate(&self) -> Result<()> {
        check_coordinate(&self.position, "marker position")?;
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(MapError::InvalidOptions(format!(
                "marker opacity {} outside [0, 1]",
                self.opacity
            )));
        }
        Ok(())
    }
}

impl Default for MarkerOptions {
    fn default() -> Self {
        Self {
            position: LatLng::default(),
            title: None,
            snippet: None,
            icon: None,
            icon_size: MARKER_ICON_SIZE,
            icon_anchor: MARKER_ICON_ANCHOR,
            opacity: 1.0,
            z_index: 0,
            visible: true,
            tappable: true,
        }
    }
}

/// Fluent construction of [`MarkerOptions`]
#[derive(Debug, Clone)]
pub struct MarkerOptionsBuilder {
    options: MarkerOptions,
}

impl MarkerOptionsBuilder {
    pub fn new(position: LatLng) -> Self {
        Self {
            options: MarkerOptions::new(position),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.options.title = Some(title.into());
        self
    }

    pub fn snippet(mut self, snippet: impl Into<String>) -> Self {
        self.options.snippet = Some(snippet.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.options.icon = Some(icon.into());
        self
    }

    pub fn icon_size(mut self, width: u32, height: u32) -> Self {
        self.options.icon_size = (width, height);
        self
    }

    pub fn icon_anchor(mut self, x: u32, y: u32) -> Self {
        self.options.icon_anchor = (x, y);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.options.opacity = opacity;
        self
    }

    pub fn z_index(mut self, z_index: i32) -> Self {
        self.options.z_index = z_index;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.options.visible = visible;
        self
    }

    pub fn tappable(mut self, tappable: bool) -> Self {
        self.options.tappable = tappable;
        self
    }

    pub fn build(self) -> Result<MarkerOptions> {
        self.options.validate()?;
        Ok(self.options)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolylineOptions {
    pub vertices: Vec<LatLng>,
    pub title: Option<String>,
    pub color: Color,
    /// Stroke width in screen points
    pub width: f64,
    pub z_index: i32,
    pub visible: bool,
    pub tappable: bool,
}

impl PolylineOptions {
    pub fn new(vertices: Vec<LatLng>) -> Self {
        Self {
            vertices,
            ..Self::default()
        }
    }

    pub fn builder() -> PolylineOptionsBuilder {
        PolylineOptionsBuilder::new()
    }

    pub fn validate(&self) -> Result<()> {
        for vertex in &self.vertices {
            check_coordinate(vertex, "polyline vertex")?;
        }
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(MapError::InvalidOptions(format!(
                "polyline width {} must be finite and non-negative",
                self.width
            )));
        }
        Ok(())
    }
}

impl Default for PolylineOptions {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            title: None,
            color: Color::default(),
            width: 1.0,
            z_index: 0,
            visible: true,
            tappable: true,
        }
    }
}

/// Fluent construction of [`PolylineOptions`]
#[derive(Debug, Clone, Default)]
pub struct PolylineOptionsBuilder {
    options: PolylineOptions,
}

impl PolylineOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vertex(mut self, vertex: LatLng) -> Self {
        self.options.vertices.push(vertex);
        self
    }

    pub fn with_vertices(mut self, vertices: impl IntoIterator<Item = LatLng>) -> Self {
        self.options.vertices.extend(vertices);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.options.title = Some(title.into());
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.options.color = color;
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.options.width = width;
        self
    }

    pub fn z_index(mut self, z_index: i32) -> Self {
        self.options.z_index = z_index;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.options.visible = visible;
        self
    }

    pub fn tappable(mut self, tappable: bool) -> Self {
        self.options.tappable = tappable;
        self
    }

    pub fn build(self) -> Result<PolylineOptions> {
        self.options.validate()?;
        Ok(self.options)
    }
}
