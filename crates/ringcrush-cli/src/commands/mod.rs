//! CLI command implementations.

pub mod common;
pub mod devices;
pub mod info;
pub mod params;
pub mod play;
pub mod presets;
pub mod process;
