//! Allpass filter for reverb diffusion.

use crate::DelayLine;
use crate::flush_denormal;

/// Schroeder allpass filter for diffusion.
///
/// Uses the Freeverb form:
///
/// ```text
/// delayed = delay.front()
/// delay.push(input + delayed * feedback)
/// output  = delayed - input
/// ```
///
/// # Example
///
/// ```rust
/// use ringcrush_core::AllpassFilter;
///
/// let mut allpass = AllpassFilter::new(500);
/// allpass.set_feedback(0.5);
///
/// assert_eq!(allpass.process(1.0), -1.0);
/// ```
#[derive(Debug, Clone)]
pub struct AllpassFilter {
    delay: DelayLine,
    feedback: f32,
}

impl AllpassFilter {
    /// Create a new allpass filter with the given delay size in samples.
    pub fn new(delay_samples: usize) -> Self {
        Self {
            delay: DelayLine::new(delay_samples),
            feedback: 0.5,
        }
    }

    /// Set the feedback coefficient, clamped to `[-0.99, 0.99]`.
    #[inline]
    pub fn set_feedback(&mut self, feedback: f32) {
        self.feedback = feedback.clamp(-0.99, 0.99);
    }

    /// Current feedback value.
    #[inline]
    pub fn feedback(&self) -> f32 {
        self.feedback
    }

    /// Process a single sample through the allpass filter.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let delayed = self.delay.front();
        self.delay
            .push(flush_denormal(input + delayed * self.feedback));
        delayed - input
    }

    /// Clear the allpass filter state.
    pub fn clear(&mut self) {
        self.delay.clear();
    }

    /// Delay length in samples.
    pub fn capacity(&self) -> usize {
        self.delay.len()
    }
}
