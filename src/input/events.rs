use crate::core::geo::Point;
use instant::Instant;

/// Input fed to a map view by the embedding application.
///
/// Gesture recognition happens upstream; the map view only sees the
/// recognized gesture and its screen position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Single tap
    Tap { position: Point },
    /// Press held past the platform's long-press delay
    LongPress { position: Point },
    /// Tap on the info window of the selected marker
    InfoWindowTap,
    /// Viewport/window resize
    Resize { width: f64, height: f64 },
    /// Display refresh, drives camera animations
    Frame { timestamp: Instant },
}

/// Whether an event was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventHandled {
    Handled,
    NotHandled,
}

impl EventHandled {
    pub fn from_bool(handled: bool) -> Self {
        if handled {
            EventHandled::Handled
        } else {
            EventHandled::NotHandled
        }
    }

    pub fn is_handled(self) -> bool {
        self == EventHandled::Handled
    }
}

impl InputEvent {
    /// Gets the screen position associated with this event, if any
    pub fn position(&self) -> Option<Point> {
        match self {
            InputEvent::Tap { position } | InputEvent::LongPress { position } => Some(*position),
            _ => None,
        }
    }

    /// Checks if this is a pointer gesture
    pub fn is_pointer_event(&self) -> bool {
        matches!(
            self,
            InputEvent::Tap { .. } | InputEvent::LongPress { .. } | InputEvent::InfoWindowTap
        )
    }
}
