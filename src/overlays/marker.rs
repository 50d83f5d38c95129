use crate::{
    core::geo::{LatLng, LatLngBounds},
    overlays::{
        base::{OverlayHandle, OverlayProperties, OverlayTrait, Removable, Styleable},
        options::MarkerOptions,
    },
    Result,
};

/// Appearance of a marker icon
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    /// Icon reference resolved by the renderer; `None` for the default pin
    pub icon: Option<String>,
    pub icon_size: (u32, u32),
    pub icon_anchor: (u32, u32),
    pub opacity: f32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        let options = MarkerOptions::default();
        Self {
            icon: options.icon,
            icon_size: options.icon_size,
            icon_anchor: options.icon_anchor,
            opacity: options.opacity,
        }
    }
}

/// A point overlay at a geographic position
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    properties: OverlayProperties,
    position: LatLng,
    snippet: Option<String>,
    style: MarkerStyle,
}

impl Marker {
    pub(crate) fn from_options(handle: OverlayHandle, options: &MarkerOptions) -> Self {
        let mut marker = Self {
            properties: OverlayProperties::new(handle),
            position: LatLng::default(),
            snippet: None,
            style: MarkerStyle::default(),
        };
        marker.copy_options(options);
        marker
    }

    fn copy_options(&mut self, options: &MarkerOptions) {
        self.properties.title = options.title.clone();
        self.properties.z_index = options.z_index;
        self.properties.visible = options.visible;
        self.properties.tappable = options.tappable;
        self.position = options.position.clamped();
        self.snippet = options.snippet.clone();
        self.style = MarkerStyle {
            icon: options.icon.clone(),
            icon_size: options.icon_size,
            icon_anchor: options.icon_anchor,
            opacity: options.opacity.clamp(0.0, 1.0),
        };
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    /// Moves the marker. Use
    /// [`OverlayRegistry::set_marker_position`](crate::overlays::registry::OverlayRegistry::set_marker_position)
    /// for registered markers so the spatial index follows.
    pub fn set_position(&mut self, position: LatLng) {
        self.position = position.clamped();
    }

    pub fn snippet(&self) -> Option<&str> {
        self.snippet.as_deref()
    }

    pub fn set_snippet(&mut self, snippet: Option<String>) {
        self.snippet = snippet;
    }

    pub fn to_options(&self) -> MarkerOptions {
        MarkerOptions {
            position: self.position,
            title: self.properties.title.clone(),
            snippet: self.snippet.clone(),
            icon: self.style.icon.clone(),
            icon_size: self.style.icon_size,
            icon_anchor: self.style.icon_anchor,
            opacity: self.style.opacity,
            z_index: self.properties.z_index,
            visible: self.properties.visible,
            tappable: self.properties.tappable,
        }
    }

    pub fn apply_options(&mut self, options: &MarkerOptions) -> Result<()> {
        options.validate()?;
        self.copy_options(options);
        Ok(())
    }
}

impl OverlayTrait for Marker {
    crate::impl_overlay_trait!(properties);
    crate::impl_serde_options!(MarkerOptions);

    fn bounds(&self) -> Option<LatLngBounds> {
        Some(LatLngBounds::new(self.position, self.position))
    }
}

impl Styleable for Marker {
    type Style = MarkerStyle;

    fn style(&self) -> &MarkerStyle {
        &self.style
    }

    fn set_style(&mut self, style: MarkerStyle) {
        self.style = MarkerStyle {
            opacity: style.opacity.clamp(0.0, 1.0),
            ..style
        };
    }
}

impl Removable for Marker {
    fn overlay_handle(&self) -> OverlayHandle {
        self.properties.handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlays::base::OverlayType;

    fn marker(options: &MarkerOptions) -> Marker {
        Marker::from_options(OverlayHandle::new(1, OverlayType::Marker), options)
    }

    #[test]
    fn test_marker_from_options() {
        let options = MarkerOptions::builder(LatLng::new(48.85, 2.35))
            .title("Paris")
            .snippet("Tour Eiffel")
            .icon("pin-red")
            .build()
            .expect("valid options");
        let marker = marker(&options);

        assert_eq!(marker.position(), LatLng::new(48.85, 2.35));
        assert_eq!(marker.title(), Some("Paris"));
        assert_eq!(marker.snippet(), Some("Tour Eiffel"));
        assert_eq!(marker.style().icon.as_deref(), Some("pin-red"));
        assert_eq!(marker.to_options(), options);
    }

    #[test]
    fn test_position_is_normalized() {
        let mut marker = marker(&MarkerOptions::new(LatLng::new(0.0, 190.0)));
        assert!((marker.position().lng + 170.0).abs() < 1e-9);

        marker.set_position(LatLng::new(95.0, 0.0));
        assert_eq!(marker.position().lat, 90.0);
    }

    #[test]
    fn test_set_options_keeps_handle() {
        let mut marker = marker(&MarkerOptions::default());
        let handle = marker.handle();

        marker
            .set_options(serde_json::json!({ "position": { "lat": 10.0, "lng": 20.0 }, "visible": false }))
            .expect("valid options");

        assert_eq!(marker.handle(), handle);
        assert_eq!(marker.position(), LatLng::new(10.0, 20.0));
        assert!(!marker.is_visible());
        assert!(!marker.is_interactive());
        assert_eq!(marker.options()["position"]["lat"], 10.0);
    }

    #[test]
    fn test_style_opacity_is_clamped() {
        let mut marker = marker(&MarkerOptions::default());
        marker.set_style(MarkerStyle {
            opacity: 3.0,
            ..MarkerStyle::default()
        });
        assert_eq!(marker.style().opacity, 1.0);
    }
}
