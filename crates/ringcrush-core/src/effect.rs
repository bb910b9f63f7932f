//! Core Effect trait.
//!
//! Every ringcrush stage that maps one sample to one sample implements
//! [`Effect`]. Stages that need extra context per sample (the rate reducer
//! needs a channel index, the ring modulator a shared carrier value) still
//! implement it for single-channel use and expose richer methods next to it.
//!
//! ## Design Decisions
//!
//! - **Mono processing**: Single `f32` input/output. Multichannel state is
//!   owned by the caller or by dedicated methods on the stage.
//! - **Object-safe**: `dyn Effect` works for runtime composition.
//! - **No allocations**: All methods may be called from an audio callback.

/// Core trait for all audio effects.
///
/// # Example
///
/// ```rust
/// use ringcrush_core::Effect;
///
/// struct Gain {
///     gain: f32,
/// }
///
/// impl Effect for Gain {
///     fn process(&mut self, input: f32) -> f32 {
///         input * self.gain
///     }
///
///     fn set_sample_rate(&mut self, _sample_rate: f32) {}
///
///     fn reset(&mut self) {}
/// }
///
/// let mut g = Gain { gain: 0.5 };
/// assert_eq!(g.process(2.0), 1.0);
/// ```
pub trait Effect {
    /// Process a single sample and advance internal state by one step.
    fn process(&mut self, input: f32) -> f32;

    /// Process a block of samples.
    ///
    /// Default implementation calls `process()` for each sample.
    ///
    /// # Panics
    /// Debug builds panic if `input.len() != output.len()`.
    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );
        for (inp, out) in input.iter().zip(output.iter_mut()) {
            *out = self.process(*inp);
        }
    }

    /// Process a block of samples in-place.
    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Update the sample rate.
    ///
    /// Effects recalculate any sample-rate-dependent state here (delay
    /// lengths, phase increments, hold lengths).
    fn set_sample_rate(&mut self, sample_rate: f32);

    /// Clear all internal state without touching parameters.
    fn reset(&mut self);

    /// Processing latency in samples. Default 0.
    fn latency_samples(&self) -> usize {
        0
    }
}
