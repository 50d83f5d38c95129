pub mod easing;
pub mod interpolation;
pub mod scheduler;

// Re-export commonly used types and functions for convenience
pub use easing::EasingFunction;
pub use interpolation::Interpolation;
pub use scheduler::{
    AnimationJob, AnimationScheduler, AnimationSpec, CameraField, CameraUpdate, TickResult,
};
