//! Audio I/O for ringcrush.
//!
//! This crate provides:
//!
//! - **Buffers**: [`AudioBuffer`], channel-major sample storage
//! - **WAV file I/O**: [`read_wav`] and [`write_wav`] for multichannel files
//! - **Offline rendering**: [`render`] runs a [`Processor`](ringcrush_engine::Processor)
//!   over a whole buffer in fixed-size blocks
//! - **Playback**: [`Playback`] drives a processor from a cpal output callback
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use ringcrush_engine::{Processor, SharedParams};
//! use ringcrush_io::{read_wav, render, write_wav};
//!
//! let (mut audio, spec) = read_wav("input.wav")?;
//! let mut processor = Processor::new(Arc::new(SharedParams::new()));
//! render(&mut processor, &mut audio, spec.sample_rate as f32, 512, |_, _| {})?;
//! write_wav("output.wav", &audio, spec)?;
//! # Ok::<(), ringcrush_io::Error>(())
//! ```

mod buffer;
mod render;
mod stream;
mod wav;

pub use buffer::AudioBuffer;
pub use render::{DEFAULT_BLOCK_SIZE, render};
pub use stream::{
    AudioDevice, Playback, PlaybackConfig, PlaybackCursor, default_output_device,
    interleave_into, list_output_devices,
};
pub use wav::{WavFormat, WavInfo, WavSpec, read_wav, read_wav_info, write_wav};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Audio stream setup or runtime error.
    #[error("Audio stream error: {0}")]
    Stream(String),

    /// No audio device available on the system.
    #[error("No audio device available")]
    NoDevice,

    /// The requested sample format is not supported.
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// The requested audio device was not found.
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    /// The processor rejected the stream setup.
    #[error("Engine error: {0}")]
    Engine(#[from] ringcrush_engine::EngineError),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
