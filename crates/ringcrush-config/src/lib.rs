//! Preset management for ringcrush.
//!
//! A preset is a name, an optional description and a `[params]` table of the
//! seven persisted parameter keys. This crate loads, validates and saves
//! them, ships the factory set, and resolves names against the user preset
//! directory.
//!
//! # Example
//!
//! ```rust,no_run
//! use ringcrush_config::{Preset, paths};
//! use ringcrush_engine::ParamKind;
//!
//! let preset = Preset::new("Bright Ring")
//!     .with_description("High sine carrier")
//!     .with_param(ParamKind::CarrierFrequency, 1800.0)
//!     .with_param(ParamKind::RingModAmount, 0.9);
//! preset.validate().unwrap();
//!
//! let path = paths::user_presets_dir().join("bright_ring.toml");
//! preset.save(&path).unwrap();
//! ```

mod error;
mod preset;

/// Factory presets bundled with the library.
pub mod factory_presets;

/// Platform-specific preset directories.
pub mod paths;

pub use error::ConfigError;
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_preset_names, factory_presets, get_factory_preset,
    is_factory_preset,
};
pub use paths::{
    ensure_user_presets_dir, find_preset, list_user_presets, resolve_preset, user_presets_dir,
};
pub use preset::{Preset, parse_assignment};
