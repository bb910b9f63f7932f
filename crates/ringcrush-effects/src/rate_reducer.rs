//! Sample-rate reducer (zero-order hold).
//!
//! # Theory
//!
//! Holding each latched sample for N output samples lowers the effective
//! sample rate to `sr / N` without changing the stream rate. Nothing filters
//! the result, so content above the new Nyquist folds back as aliasing. That
//! is the point of the stage.
//!
//! The hold length comes from a target-rate ratio `r`:
//!
//! ```text
//! N = max(1, floor(sr / (sr · clamp(r, 0.01, 0.99))))
//! ```
//!
//! Per sample and channel the counter is incremented first; when it reaches
//! N it resets to 0 and the current input is latched. The output is always
//! the latched value attenuated by [`HOLD_ATTENUATION`], so the first N-1
//! samples after a reset read the zeroed hold.

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::vec::Vec;
use ringcrush_core::Effect;

/// Lowest accepted target-rate ratio.
pub const MIN_RATIO: f32 = 0.01;
/// Highest accepted target-rate ratio.
pub const MAX_RATIO: f32 = 0.99;
/// Fixed gain applied to every held sample.
pub const HOLD_ATTENUATION: f32 = 0.7;
/// Channels reserved up front so common layout changes do not allocate.
pub const RESERVED_CHANNELS: usize = 8;

/// Hold length in samples for a sample rate and target-rate ratio.
///
/// ```rust
/// use ringcrush_effects::hold_length;
///
/// assert_eq!(hold_length(44100.0, 0.6), 1);
/// assert_eq!(hold_length(44100.0, 0.25), 4);
/// assert_eq!(hold_length(44100.0, 0.0), 100);
/// assert_eq!(hold_length(48000.0, 1.0), 1);
/// ```
#[inline]
pub fn hold_length(sample_rate: f32, ratio: f32) -> usize {
    let ratio = if ratio.is_nan() {
        MAX_RATIO
    } else {
        ratio.clamp(MIN_RATIO, MAX_RATIO)
    };
    let desired_hz = sample_rate * ratio;
    (sample_rate / desired_hz).max(1.0) as usize
}

/// Per-channel hold state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HoldState {
    /// Samples since the last latch.
    pub counter: usize,
    /// Last latched input sample (before attenuation).
    pub held: f32,
}

impl HoldState {
    /// Advance one sample and return the attenuated held value.
    #[inline]
    pub fn tick(&mut self, input: f32, hold_length: usize) -> f32 {
        self.counter += 1;
        if self.counter >= hold_length {
            self.counter = 0;
            self.held = input;
        }
        self.held * HOLD_ATTENUATION
    }
}

/// Multichannel sample-and-hold rate reducer.
///
/// Owns one [`HoldState`] per channel. The hold length is shared by every
/// channel and recomputed whenever the ratio or sample rate changes.
///
/// # Example
///
/// ```rust
/// use ringcrush_effects::RateReducer;
///
/// let mut crusher = RateReducer::new(44100.0);
/// crusher.set_ratio(0.5);
/// crusher.configure_channels(2);
///
/// assert_eq!(crusher.process_channel(0, 1.0), 0.0);
/// assert_eq!(crusher.process_channel(0, 1.0), 0.7);
/// assert_eq!(crusher.process_channel(1, 1.0), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct RateReducer {
    channels: Vec<HoldState>,
    sample_rate: f32,
    ratio: f32,
    hold_length: usize,
}

impl RateReducer {
    /// Create a single-channel reducer at the highest ratio.
    pub fn new(sample_rate: f32) -> Self {
        let mut channels = Vec::with_capacity(RESERVED_CHANNELS);
        channels.push(HoldState::default());
        Self {
            channels,
            sample_rate,
            ratio: MAX_RATIO,
            hold_length: hold_length(sample_rate, MAX_RATIO),
        }
    }

    /// Set the target-rate ratio, clamped to `[MIN_RATIO, MAX_RATIO]`.
    pub fn set_ratio(&mut self, ratio: f32) {
        self.ratio = if ratio.is_nan() {
            MAX_RATIO
        } else {
            ratio.clamp(MIN_RATIO, MAX_RATIO)
        };
        self.hold_length = hold_length(self.sample_rate, self.ratio);
    }

    /// Current (clamped) ratio.
    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    /// Current hold length in samples.
    pub fn hold_length(&self) -> usize {
        self.hold_length
    }

    /// Number of channels with hold state.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Hold state of one channel.
    pub fn channel_state(&self, channel: usize) -> Option<HoldState> {
        self.channels.get(channel).copied()
    }

    /// Size the hold state to `channels` and zero every entry.
    pub fn configure_channels(&mut self, channels: usize) {
        self.channels.clear();
        self.channels.resize(channels, HoldState::default());
    }

    /// Size the hold state to `channels`, keeping existing entries.
    ///
    /// New channels start zeroed. Does not allocate while `channels` stays
    /// within the reserved capacity.
    #[inline]
    pub fn ensure_channels(&mut self, channels: usize) {
        if self.channels.len() != channels {
            self.channels.resize(channels, HoldState::default());
        }
    }

    /// Process one sample of `channel`.
    ///
    /// # Panics
    ///
    /// Panics if `channel >= channel_count()`.
    #[inline]
    pub fn process_channel(&mut self, channel: usize, input: f32) -> f32 {
        let hold_length = self.hold_length;
        self.channels[channel].tick(input, hold_length)
    }
}

impl Effect for RateReducer {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        if self.channels.is_empty() {
            self.channels.push(HoldState::default());
        }
        self.process_channel(0, input)
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.hold_length = hold_length(sample_rate, self.ratio);
    }

    fn reset(&mut self) {
        self.channels.fill(HoldState::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hold_length_formula() {
        for &sr in &[8000.0_f32, 44100.0, 48000.0, 96000.0] {
            for &r in &[0.01_f32, 0.1, 0.25, 0.33, 0.5, 0.6, 0.99] {
                let expected = ((sr / (sr * r)).max(1.0)) as usize;
                assert_eq!(hold_length(sr, r), expected);
                assert!(hold_length(sr, r) >= 1);
            }
        }
        // below MIN_RATIO clamps to 100 samples
        assert_eq!(hold_length(44100.0, 0.001), 100);
        assert_eq!(hold_length(44100.0, f32::NAN), 1);
    }

    #[test]
    fn test_first_samples_read_zero_hold() {
        let mut rr = RateReducer::new(44100.0);
        rr.set_ratio(0.25);
        assert_eq!(rr.hold_length(), 4);

        let out: Vec<f32> = (0..8).map(|_| rr.process(1.0)).collect();
        assert_eq!(out, [0.0, 0.0, 0.0, 0.7, 0.7, 0.7, 0.7, 0.7]);
    }

    #[test]
    fn test_holds_for_hold_length() {
        let mut rr = RateReducer::new(44100.0);
        rr.set_ratio(0.25);

        let input: Vec<f32> = (0..16).map(|i| i as f32).collect();
        let out: Vec<f32> = input.iter().map(|&x| rr.process(x)).collect();
        // latches at samples 3, 7, 11, 15
        assert_eq!(out[3], 3.0 * 0.7);
        assert_eq!(out[6], 3.0 * 0.7);
        assert_eq!(out[7], 7.0 * 0.7);
        assert_eq!(out[15], 15.0 * 0.7);
    }

    #[test]
    fn test_hold_length_one_is_attenuated_passthrough() {
        let mut rr = RateReducer::new(48000.0);
        rr.set_ratio(0.6);
        for &x in &[0.3_f32, -0.9, 0.5] {
            assert_eq!(rr.process(x), x * HOLD_ATTENUATION);
        }
    }

    #[test]
    fn test_channels_independent() {
        let mut rr = RateReducer::new(44100.0);
        rr.set_ratio(0.5);
        rr.configure_channels(2);

        rr.process_channel(0, 1.0);
        rr.process_channel(0, 1.0);
        assert_eq!(rr.channel_state(0).map(|s| s.held), Some(1.0));
        assert_eq!(rr.channel_state(1), Some(HoldState::default()));
    }

    #[test]
    fn test_ensure_channels_keeps_existing() {
        let mut rr = RateReducer::new(44100.0);
        rr.set_ratio(0.5);
        rr.configure_channels(1);
        rr.process_channel(0, 0.4);
        rr.process_channel(0, 0.4);
        let before = rr.channel_state(0);

        rr.ensure_channels(3);
        assert_eq!(rr.channel_count(), 3);
        assert_eq!(rr.channel_state(0), before);
        assert_eq!(rr.channel_state(2), Some(HoldState::default()));

        rr.ensure_channels(1);
        assert_eq!(rr.channel_count(), 1);
        assert_eq!(rr.channel_state(0), before);
    }

    #[test]
    fn test_configure_channels_zeroes() {
        let mut rr = RateReducer::new(44100.0);
        rr.set_ratio(0.99);
        rr.process(0.8);
        rr.configure_channels(2);
        assert_eq!(rr.channel_state(0), Some(HoldState::default()));
        assert_eq!(rr.channel_state(1), Some(HoldState::default()));
    }

    #[test]
    fn test_reset_clears_state() {
        let mut rr = RateReducer::new(44100.0);
        rr.set_ratio(0.99);
        rr.process(0.8);
        rr.reset();
        assert_eq!(rr.channel_state(0), Some(HoldState::default()));
    }

    #[test]
    fn test_set_sample_rate_recomputes_hold() {
        let mut rr = RateReducer::new(44100.0);
        rr.set_ratio(0.1);
        let before = rr.hold_length();
        rr.set_sample_rate(96000.0);
        assert_eq!(rr.hold_length(), hold_length(96000.0, 0.1));
        assert!((9..=10).contains(&before));
    }
}
