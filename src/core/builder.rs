//! Map view builder for fluent configuration

use crate::{
    animation::easing::EasingFunction,
    core::{
        camera::Camera,
        config::{AnimationConfig, HitTestConfig, MapConfig},
        delegate::MapViewDelegate,
        map::MapView,
        viewport::Viewport,
    },
    Result,
};
use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

/// Builder for creating and configuring [`MapView`] instances
pub struct MapViewBuilder {
    viewport: Viewport,
    camera: Camera,
    config: MapConfig,
    delegate: Option<Weak<RefCell<dyn MapViewDelegate>>>,
}

impl MapViewBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            viewport: Viewport::default(),
            camera: Camera::default(),
            config: MapConfig::default(),
            delegate: None,
        }
    }

    /// Set the frame size in screen points
    pub fn with_frame(mut self, width: f64, height: f64) -> Self {
        self.viewport = Viewport::new(width, height);
        self
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Set the initial camera. It is clamped to the configured zoom limits
    /// when the map view is built.
    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: MapConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.config.min_zoom = min_zoom;
        self.config.max_zoom = max_zoom;
        self
    }

    pub fn with_animation_config(mut self, animation: AnimationConfig) -> Self {
        self.config.animation = animation;
        self
    }

    /// Set the easing used by animations started without an explicit spec
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.config.animation.easing = easing;
        self
    }

    pub fn with_hit_test_config(mut self, hit_test: HitTestConfig) -> Self {
        self.config.hit_test = hit_test;
        self
    }

    /// Whether frame ticks are delivered right after construction
    pub fn with_rendering(mut self, enabled: bool) -> Self {
        self.config.start_rendering = enabled;
        self
    }

    /// Only a weak reference to `delegate` is kept
    pub fn with_delegate<D: MapViewDelegate + 'static>(mut self, delegate: &Rc<RefCell<D>>) -> Self {
        let weak = Rc::downgrade(delegate);
        let weak: Weak<RefCell<dyn MapViewDelegate>> = weak;
        self.delegate = Some(weak);
        self
    }

    /// Validates the configuration and builds the map view
    pub fn build(self) -> Result<MapView> {
        let mut map = MapView::with_config(self.viewport, self.camera, self.config)?;
        map.set_delegate_weak(self.delegate);
        log::debug!(
            "built map view {}x{} at zoom {:.2}",
            map.viewport().width,
            map.viewport().height,
            map.camera().zoom
        );
        Ok(map)
    }
}

impl Default for MapViewBuilder {
    fn default() -> Self {
        Self::new()
    }
}
