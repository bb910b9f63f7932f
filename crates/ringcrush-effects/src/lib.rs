//! Ringcrush Effects - the four stages of the ringcrush chain
//!
//! Each stage is usable on its own and implements [`ringcrush_core::Effect`]
//! for single-channel use:
//!
//! - [`Saturator`] - `tanh` soft clip with loudness-compensating divisor
//! - [`RateReducer`] - Per-channel sample-and-hold (zero-order hold)
//! - [`RingMod`] - Blended sine/saw ring modulation driven by a shared [`Carrier`]
//! - [`Reverb`] - Freeverb-style stereo/mono diffusion network
//!
//! The engine crate runs them in that order, per frame, with one carrier
//! value shared by every channel of a frame.
//!
//! ## Example
//!
//! ```rust
//! use ringcrush_effects::{Carrier, RateReducer, RingMod, saturate};
//!
//! let sr = 44100.0;
//! let mut crusher = RateReducer::new(sr);
//! crusher.set_ratio(0.25);
//! let mut ring = RingMod::new(sr);
//! ring.set_amount(1.0);
//!
//! let x = saturate(0.5, 2.0);
//! let held = crusher.process_channel(0, x);
//! let c = ring.advance_carrier();
//! let out = ring.modulate(held, c);
//! assert!(out.is_finite());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod rate_reducer;
pub mod reverb;
pub mod ring_mod;
pub mod saturator;

pub use rate_reducer::{HOLD_ATTENUATION, HoldState, RateReducer, hold_length};
pub use reverb::{Reverb, ReverbParams};
pub use ring_mod::{Carrier, CarrierSample, RingMod};
pub use saturator::{Saturator, saturate};
