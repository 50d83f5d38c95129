//! Macros to reduce boilerplate in overlay implementations

/// Implements the [`OverlayTrait`] methods backed by an
/// [`OverlayProperties`] field, plus `as_any`/`as_any_mut`.
///
/// Usage:
/// ```ignore
/// impl OverlayTrait for Marker {
///     crate::impl_overlay_trait!(properties);
///     // bounds, options, set_options
/// }
/// ```
///
/// [`OverlayTrait`]: crate::overlays::base::OverlayTrait
/// [`OverlayProperties`]: crate::overlays::base::OverlayProperties
#[macro_export]
macro_rules! impl_overlay_trait {
    ($properties_field:ident) => {
        fn handle(&self) -> $crate::overlays::base::OverlayHandle {
            self.$properties_field.handle
        }

        fn title(&self) -> Option<&str> {
            self.$properties_field.title.as_deref()
        }

        fn set_title(&mut self, title: Option<String>) {
            self.$properties_field.title = title;
        }

        fn z_index(&self) -> i32 {
            self.$properties_field.z_index
        }

        fn set_z_index(&mut self, z_index: i32) {
            self.$properties_field.z_index = z_index;
        }

        fn is_visible(&self) -> bool {
            self.$properties_field.visible
        }

        fn set_visible(&mut self, visible: bool) {
            self.$properties_field.visible = visible;
        }

        fn is_tappable(&self) -> bool {
            self.$properties_field.tappable
        }

        fn set_tappable(&mut self, tappable: bool) {
            self.$properties_field.tappable = tappable;
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }
    };
}

/// Implements `options`/`set_options` by round-tripping the overlay's options
/// struct through JSON. The type needs `to_options(&self) -> $options` and
/// `apply_options(&mut self, &$options) -> Result<()>`.
#[macro_export]
macro_rules! impl_serde_options {
    ($options:ty) => {
        fn options(&self) -> serde_json::Value {
            serde_json::to_value(self.to_options()).unwrap_or(serde_json::Value::Null)
        }

        fn set_options(&mut self, options: serde_json::Value) -> $crate::Result<()> {
            let options: $options = serde_json::from_value(options)?;
            self.apply_options(&options)
        }
    };
}
