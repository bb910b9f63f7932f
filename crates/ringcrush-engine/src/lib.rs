//! Ringcrush Engine - parameters and the real-time block processor
//!
//! This crate ties the stages from `ringcrush-effects` into the fixed
//! ringcrush chain and gives it a host-facing shape:
//!
//! - [`ParamKind`] / [`ParamValues`] - the seven controls and a snapshot of them
//! - [`SharedParams`] - lock-free store written by a control thread
//! - [`Processor`] - lifecycle (`configure` / `process_block` / `stop` /
//!   `release`) around the per-sample chain and the block reverb
//!
//! # Threading
//!
//! The processor is driven from one thread (the audio callback). Everything
//! else talks to it through an `Arc<SharedParams>`:
//!
//! ```rust
//! use std::sync::Arc;
//! use ringcrush_engine::{ParamKind, Processor, SharedParams, StreamSetup};
//!
//! let params = Arc::new(SharedParams::new());
//! let mut processor = Processor::new(Arc::clone(&params));
//! processor.configure(StreamSetup::new(48000.0, 256, 1)).unwrap();
//!
//! // control thread
//! params.set(ParamKind::Overdrive, 4.0);
//!
//! // audio thread
//! let mut block = vec![0.1_f32; 256];
//! processor.process_block(&mut [block.as_mut_slice()]).unwrap();
//! ```

pub mod error;
pub mod params;
pub mod processor;

pub use error::{EngineError, Result};
pub use params::{ParamKind, ParamValues, SharedParams};
pub use processor::{BlockConstants, LifecycleState, Processor, StreamSetup, TAIL_LENGTH_SECONDS};
