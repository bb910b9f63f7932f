//! Ringcrush Core - DSP primitives for the ringcrush chain
//!
//! This crate holds the small, allocation-free building blocks the ringcrush
//! stages are assembled from. Nothing here allocates after construction, so
//! every type is safe to drive from an audio callback.
//!
//! # Core Abstractions
//!
//! ## Effect System
//!
//! - [`Effect`] - Object-safe trait for per-sample audio processors
//!
//! ## Parameters
//!
//! - [`ParamDescriptor`] - Name, range, default, unit and scale of one control
//! - [`ParameterInfo`] - Trait for introspecting a parameter set
//!
//! ## Filters
//!
//! - [`CombFilter`] - Damped feedback comb for Freeverb-style reverbs
//! - [`AllpassFilter`] - Schroeder allpass for diffusion
//! - [`DelayLine`] - Fixed-length circular buffer both filters are built on
//!
//! ## Utilities
//!
//! - Math functions: [`linear_to_db`], [`flush_denormal`]
//!
//! # no_std Support
//!
//! Disable the default `std` feature for embedded targets:
//!
//! ```toml
//! [dependencies]
//! ringcrush-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use ringcrush_core::{CombFilter, Effect};
//!
//! let mut comb = CombFilter::new(1116);
//! comb.set_feedback(0.84);
//! comb.set_damp(0.2);
//!
//! let out = comb.process(1.0);
//! assert_eq!(out, 0.0); // nothing has come out of the delay yet
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod allpass;
pub mod comb;
pub mod delay;
pub mod effect;
pub mod math;
pub mod param_info;

pub use allpass::AllpassFilter;
pub use comb::CombFilter;
pub use delay::DelayLine;
pub use effect::Effect;
pub use math::{flush_denormal, linear_to_db};
pub use param_info::{ParamDescriptor, ParamFlags, ParamId, ParamScale, ParamUnit, ParameterInfo};
