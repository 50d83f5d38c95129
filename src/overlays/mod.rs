pub mod base;
pub mod hit_test;
pub mod macros;
pub mod marker;
pub mod options;
pub mod polyline;
pub mod registry;

pub use base::{OverlayHandle, OverlayProperties, OverlayTrait, OverlayType, Removable, Styleable};
pub use marker::{Marker, MarkerStyle};
pub use options::{Color, MarkerOptions, MarkerOptionsBuilder, PolylineOptions, PolylineOptionsBuilder};
pub use polyline::{Polyline, PolylineStyle};
pub use registry::OverlayRegistry;
