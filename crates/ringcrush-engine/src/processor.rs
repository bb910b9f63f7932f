//! Lifecycle-driven block processor.
//!
//! [`Processor`] owns every piece of DSP state (per-channel hold state, the
//! carrier accumulators, the reverb network) and runs the chain over one
//! channel-major block at a time:
//!
//! ```text
//! per frame:    advance carrier once
//!   per channel:  saturate → rate reduce → ring modulate → × gain
//! per block:    reverb (mono on 1 channel, stereo on the first 2)
//! ```
//!
//! ## Lifecycle
//!
//! ```text
//! Unconfigured ──configure──▶ Configured ──process_block──▶ Processing
//!                                 ▲                              │
//!                                 └────────────stop──────────────┘
//! any state ──release──▶ Released ──configure──▶ Configured
//! ```
//!
//! `configure` is the only place that allocates. `process_block` reads one
//! parameter snapshot, recomputes the derived constants and never blocks.

use std::sync::Arc;

use ringcrush_core::Effect;
use ringcrush_effects::{RateReducer, Reverb, ReverbParams, RingMod, Saturator};

use crate::error::{EngineError, Result};
use crate::params::{ParamKind, ParamValues, SharedParams};

/// Reverb tail reported to hosts, in seconds.
pub const TAIL_LENGTH_SECONDS: f64 = 1.0;

/// Where a [`Processor`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    /// Created, never configured.
    Unconfigured,
    /// Configured and idle.
    Configured,
    /// At least one block processed since the last configure or stop.
    Processing,
    /// Released; `configure` re-prepares.
    Released,
}

/// Stream format handed to [`Processor::configure`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamSetup {
    /// Sample rate in Hz.
    pub sample_rate: f32,
    /// Largest block the host will deliver. A hint; larger blocks still work.
    pub max_block_size: usize,
    /// Channel count.
    pub channels: usize,
}

impl StreamSetup {
    /// Shorthand constructor.
    pub fn new(sample_rate: f32, max_block_size: usize, channels: usize) -> Self {
        Self {
            sample_rate,
            max_block_size,
            channels,
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return Err(EngineError::invalid_setup(format!(
                "sample rate must be positive and finite, got {}",
                self.sample_rate
            )));
        }
        if self.max_block_size == 0 {
            return Err(EngineError::invalid_setup("max block size must be at least 1"));
        }
        if self.channels == 0 {
            return Err(EngineError::invalid_setup("channel count must be at least 1"));
        }
        Ok(())
    }
}

/// Per-block values derived from the parameter snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockConstants {
    /// Samples each latched value is held for (≥ 1).
    pub hold_length: usize,
    /// Sine accumulator increment, radians per sample.
    pub sine_increment: f32,
    /// Saw accumulator increment, cycles per sample.
    pub saw_increment: f32,
    /// Reverb parameter block for this block.
    pub reverb: ReverbParams,
}

/// The ringcrush chain plus its lifecycle.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use ringcrush_engine::{ParamKind, Processor, SharedParams, StreamSetup};
///
/// let params = Arc::new(SharedParams::new());
/// params.set(ParamKind::RingModAmount, 1.0);
///
/// let mut processor = Processor::new(Arc::clone(&params));
/// processor.configure(StreamSetup::new(44100.0, 512, 2)).unwrap();
///
/// let mut left = vec![0.25_f32; 512];
/// let mut right = vec![0.25_f32; 512];
/// processor
///     .process_block(&mut [left.as_mut_slice(), right.as_mut_slice()])
///     .unwrap();
/// assert!(left.iter().chain(&right).all(|x| x.is_finite()));
/// ```
#[derive(Debug)]
pub struct Processor {
    params: Arc<SharedParams>,
    state: LifecycleState,
    setup: Option<StreamSetup>,
    saturator: Saturator,
    rate_reducer: RateReducer,
    ring_mod: RingMod,
    reverb: Reverb,
    gain: f32,
}

impl Processor {
    /// Create an unconfigured processor reading from `params`.
    pub fn new(params: Arc<SharedParams>) -> Self {
        // placeholder rate until configure sizes everything
        const INITIAL_RATE: f32 = 44100.0;
        Self {
            params,
            state: LifecycleState::Unconfigured,
            setup: None,
            saturator: Saturator::new(),
            rate_reducer: RateReducer::new(INITIAL_RATE),
            ring_mod: RingMod::new(INITIAL_RATE),
            reverb: Reverb::new(INITIAL_RATE),
            gain: 0.0,
        }
    }

    /// The shared parameter store.
    pub fn params(&self) -> &Arc<SharedParams> {
        &self.params
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Setup from the last successful `configure`.
    pub fn setup(&self) -> Option<StreamSetup> {
        self.setup
    }

    /// Prepare for a stream. Legal from any state.
    ///
    /// Sizes and zeroes per-channel hold state, rewinds the carrier, and
    /// rebuilds the reverb for the sample rate. Calling it again fully
    /// resets every accumulator.
    pub fn configure(&mut self, setup: StreamSetup) -> Result<()> {
        setup.validate()?;

        let sr = setup.sample_rate;
        self.rate_reducer.set_sample_rate(sr);
        self.rate_reducer.configure_channels(setup.channels);
        self.ring_mod.set_sample_rate(sr);
        self.ring_mod.reset();
        self.reverb.set_sample_rate(sr);

        let previous = self.state;
        self.setup = Some(setup);
        self.state = LifecycleState::Configured;
        let snapshot = self.params.snapshot();
        self.apply_params(&snapshot);

        tracing::info!(
            sample_rate = sr,
            max_block_size = setup.max_block_size,
            channels = setup.channels,
            ?previous,
            "processor configured"
        );
        Ok(())
    }

    /// Process one channel-major block in place.
    ///
    /// Channels may differ in length; only the common prefix is processed.
    /// A channel count different from the configured one resizes the hold
    /// state, keeping existing channels and zeroing new ones.
    pub fn process_block(&mut self, channels: &mut [&mut [f32]]) -> Result<()> {
        match self.state {
            LifecycleState::Unconfigured | LifecycleState::Released => {
                return Err(EngineError::NotConfigured { state: self.state });
            }
            LifecycleState::Configured | LifecycleState::Processing => {}
        }
        self.state = LifecycleState::Processing;

        let snapshot = self.params.snapshot();
        self.apply_params(&snapshot);

        let num_channels = channels.len();
        if num_channels == 0 {
            return Ok(());
        }
        self.rate_reducer.ensure_channels(num_channels);

        let frames = channels.iter().map(|c| c.len()).min().unwrap_or(0);
        let drive = self.saturator.drive();
        let gain = self.gain;

        for frame in 0..frames {
            let carrier = self.ring_mod.advance_carrier();
            for (ch, samples) in channels.iter_mut().enumerate() {
                let saturated = ringcrush_effects::saturate(samples[frame], drive);
                let held = self.rate_reducer.process_channel(ch, saturated);
                samples[frame] = self.ring_mod.modulate(held, carrier) * gain;
            }
        }

        if num_channels == 1 {
            self.reverb.process_mono(&mut channels[0][..frames]);
        } else {
            let (first, rest) = channels.split_at_mut(1);
            self.reverb
                .process_stereo(&mut first[0][..frames], &mut rest[0][..frames]);
        }

        Ok(())
    }

    /// Leave `Processing`; all DSP state is kept.
    pub fn stop(&mut self) {
        if self.state == LifecycleState::Processing {
            self.state = LifecycleState::Configured;
            tracing::debug!("processor stopped");
        }
    }

    /// Release the stream. `process_block` fails until the next `configure`.
    pub fn release(&mut self) {
        self.state = LifecycleState::Released;
        tracing::debug!("processor released");
    }

    /// Derived constants for the current parameter snapshot, or `None`
    /// before the first `configure`.
    pub fn block_constants(&self) -> Option<BlockConstants> {
        self.setup?;
        Some(BlockConstants {
            hold_length: self.rate_reducer.hold_length(),
            sine_increment: self.ring_mod.carrier().sine_increment(),
            saw_increment: self.ring_mod.carrier().saw_increment(),
            reverb: self.reverb.params(),
        })
    }

    /// Reverb tail length in seconds.
    pub fn tail_length_seconds(&self) -> f64 {
        TAIL_LENGTH_SECONDS
    }

    /// Processing latency in samples.
    pub fn latency_samples(&self) -> usize {
        0
    }

    /// Whether a host channel count is supported (mono or stereo).
    pub fn supports_channel_layout(channels: usize) -> bool {
        matches!(channels, 1 | 2)
    }

    /// Zero every output channel past the host's input channel count.
    pub fn clear_unused_outputs(channels: &mut [&mut [f32]], input_channels: usize) {
        for ch in channels.iter_mut().skip(input_channels) {
            ch.fill(0.0);
        }
    }

    fn apply_params(&mut self, p: &ParamValues) {
        self.gain = p.get(ParamKind::Gain);
        self.saturator.set_drive(p.get(ParamKind::Overdrive));
        self.rate_reducer.set_ratio(p.get(ParamKind::TargetSampleRate));
        self.ring_mod.set_frequency(p.get(ParamKind::CarrierFrequency));
        self.ring_mod.set_blend(p.get(ParamKind::RingWave));
        self.ring_mod.set_amount(p.get(ParamKind::RingModAmount));
        self.reverb
            .set_params(ReverbParams::chain_room(p.get(ParamKind::ReverbWet)));
    }
}
