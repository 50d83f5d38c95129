use crate::core::geo::Point;
use serde::{Deserialize, Serialize};

/// Size of the map view on screen, in points. Owned by the map view and
/// replaced whenever the embedding layout changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Creates a new viewport
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A viewport with a non-positive or non-finite side has no invertible
    /// projection
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Center of the viewport in screen coordinates
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Screen corners, clockwise from the top-left
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(0.0, 0.0),
            Point::new(self.width, 0.0),
            Point::new(self.width, self.height),
            Point::new(0.0, self.height),
        ]
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_creation() {
        let viewport = Viewport::new(800.0, 600.0);
        assert!(viewport.is_valid());
        assert_eq!(viewport.center(), Point::new(400.0, 300.0));
        assert_eq!(viewport.corners()[2], Point::new(800.0, 600.0));
    }

    #[test]
    fn test_degenerate_viewports() {
        assert!(!Viewport::new(0.0, 600.0).is_valid());
        assert!(!Viewport::new(800.0, -1.0).is_valid());
        assert!(!Viewport::new(f64::NAN, 600.0).is_valid());
        assert!(!Viewport::new(f64::INFINITY, 600.0).is_valid());
    }
}
