//! Comb filter for reverb algorithms.
//!
//! A feedback comb with a one-pole lowpass in the feedback path, the
//! building block of Freeverb-style reverbs.

use crate::DelayLine;
use crate::flush_denormal;

/// Comb filter with feedback and damping.
///
/// Per sample:
///
/// ```text
/// out         = delay.front()
/// filterstore = out * (1 - damp) + filterstore * damp
/// delay.push(input + filterstore * feedback)
/// ```
///
/// # Example
///
/// ```rust
/// use ringcrush_core::CombFilter;
///
/// let mut comb = CombFilter::new(1000);
/// comb.set_feedback(0.8);
/// comb.set_damp(0.3);
///
/// let output = comb.process(1.0);
/// assert_eq!(output, 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct CombFilter {
    delay: DelayLine,
    feedback: f32,
    damp1: f32,
    damp2: f32,
    filterstore: f32,
}

impl CombFilter {
    /// Create a new comb filter with the given delay size in samples.
    pub fn new(delay_samples: usize) -> Self {
        Self {
            delay: DelayLine::new(delay_samples),
            feedback: 0.5,
            damp1: 0.5,
            damp2: 0.5,
            filterstore: 0.0,
        }
    }

    /// Set the feedback amount, clamped to `[0.0, 1.0]`.
    ///
    /// 1.0 sustains indefinitely (reverb freeze) when damping is 0.
    #[inline]
    pub fn set_feedback(&mut self, feedback: f32) {
        self.feedback = feedback.clamp(0.0, 1.0);
    }

    /// Current feedback value.
    #[inline]
    pub fn feedback(&self) -> f32 {
        self.feedback
    }

    /// Set the damping amount (0.0 = bright, 1.0 = fully damped).
    #[inline]
    pub fn set_damp(&mut self, damp: f32) {
        self.damp1 = damp.clamp(0.0, 1.0);
        self.damp2 = 1.0 - self.damp1;
    }

    /// Current damping value.
    #[inline]
    pub fn damp(&self) -> f32 {
        self.damp1
    }

    /// Process a single sample through the comb filter.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let output = self.delay.front();

        self.filterstore = flush_denormal(output * self.damp2 + self.filterstore * self.damp1);

        self.delay.push(input + self.filterstore * self.feedback);

        output
    }

    /// Clear the comb filter state.
    pub fn clear(&mut self) {
        self.delay.clear();
        self.filterstore = 0.0;
    }

    /// Delay length in samples.
    pub fn capacity(&self) -> usize {
        self.delay.len()
    }
}
