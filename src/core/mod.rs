pub mod builder;
pub mod camera;
pub mod config;
pub mod constants;
pub mod delegate;
pub mod geo;
pub mod map;
pub mod projection;
pub mod viewport;
