use crate::{
    core::geo::{LatLng, LatLngBounds},
    overlays::{
        base::{OverlayHandle, OverlayProperties, OverlayTrait, Removable, Styleable},
        options::{Color, PolylineOptions},
    },
    Result,
};
use geo::HaversineLength;
use geo_types::LineString;

/// Stroke of a polyline
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineStyle {
    pub color: Color,
    /// Width in screen points
    pub width: f64,
}

impl Default for PolylineStyle {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
        }
    }
}

/// A path through an ordered list of vertices
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    properties: OverlayProperties,
    vertices: Vec<LatLng>,
    style: PolylineStyle,
}

impl Polyline {
    pub(crate) fn from_options(handle: OverlayHandle, options: &PolylineOptions) -> Self {
        let mut polyline = Self {
            properties: OverlayProperties::new(handle),
            vertices: Vec::new(),
            style: PolylineStyle::default(),
        };
        polyline.copy_options(options);
        polyline
    }

    fn copy_options(&mut self, options: &PolylineOptions) {
        self.properties.title = options.title.clone();
        self.properties.z_index = options.z_index;
        self.properties.visible = options.visible;
        self.properties.tappable = options.tappable;
        self.vertices = options.vertices.iter().map(LatLng::clamped).collect();
        self.set_style(PolylineStyle {
            color: options.color,
            width: options.width,
        });
    }

    pub fn vertices(&self) -> &[LatLng] {
        &self.vertices
    }

    pub fn set_vertices(&mut self, vertices: Vec<LatLng>) {
        self.vertices = vertices.iter().map(LatLng::clamped).collect();
    }

    pub fn width(&self) -> f64 {
        self.style.width
    }

    /// Great-circle length of the path in meters
    pub fn length_meters(&self) -> f64 {
        let line: LineString<f64> = self
            .vertices
            .iter()
            .map(|vertex| geo_types::Coord::from(*vertex))
            .collect();
        line.haversine_length()
    }

    pub fn to_options(&self) -> PolylineOptions {
        PolylineOptions {
            vertices: self.vertices.clone(),
            title: self.properties.title.clone(),
            color: self.style.color,
            width: self.style.width,
            z_index: self.properties.z_index,
            visible: self.properties.visible,
            tappable: self.properties.tappable,
        }
    }

    pub fn apply_options(&mut self, options: &PolylineOptions) -> Result<()> {
        options.validate()?;
        self.copy_options(options);
        Ok(())
    }
}

impl OverlayTrait for Polyline {
    crate::impl_overlay_trait!(properties);
    crate::impl_serde_options!(PolylineOptions);

    fn bounds(&self) -> Option<LatLngBounds> {
        LatLngBounds::from_points(&self.vertices)
    }
}

impl Styleable for Polyline {
    type Style = PolylineStyle;

    fn style(&self) -> &PolylineStyle {
        &self.style
    }

    fn set_style(&mut self, style: PolylineStyle) {
        let width = if style.width.is_finite() {
            style.width.max(0.0)
        } else {
            1.0
        };
        self.style = PolylineStyle { width, ..style };
    }
}

impl Removable for Polyline {
    fn overlay_handle(&self) -> OverlayHandle {
        self.properties.handle
    }
}
