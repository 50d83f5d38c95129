//! Shared trait abstractions for common patterns
//!
//! Interpolation and configuration are needed by several modules (camera
//! animation, map view, overlays), so the traits live here rather than next to
//! any single implementation.

use crate::{
    core::geo::{LatLng, Point},
    Result,
};

/// Unified interpolation trait for values that can be smoothly transitioned
pub trait Lerp {
    fn lerp(&self, other: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Point {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        Point::new(self.x.lerp(&other.x, t), self.y.lerp(&other.y, t))
    }
}

/// Longitude follows the shorter way around the antimeridian, so
/// `170 → -170` passes through 180 rather than through 0.
impl Lerp for LatLng {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        let delta_lng = LatLng::wrap_lng(other.lng - self.lng);
        LatLng::new(
            self.lat.lerp(&other.lat, t),
            LatLng::wrap_lng(self.lng + delta_lng * t),
        )
    }
}

/// Trait for configurable components
pub trait Configurable {
    type Config: Clone;

    /// Get the current configuration
    fn config(&self) -> &Self::Config;

    /// Set new configuration
    fn set_config(&mut self, config: Self::Config) -> Result<()>;

    /// Validate configuration
    fn validate_config(config: &Self::Config) -> Result<()> {
        let _ = config; // Default implementation accepts all configs
        Ok(())
    }

    /// Update configuration with a partial change
    fn update_config<F>(&mut self, updater: F) -> Result<()>
    where
        F: FnOnce(&mut Self::Config),
    {
        let mut config = self.config().clone();
        updater(&mut config);
        Self::validate_config(&config)?;
        self.set_config(config)
    }
}
