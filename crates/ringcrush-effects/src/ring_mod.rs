//! Ring modulator with a blended sine/saw carrier.
//!
//! Ring modulation multiplies the signal by a bipolar carrier, producing
//! sum and difference frequencies (`f_in ± f_c`) instead of the input's own
//! partials. Here the carrier is a crossfade of two oscillators running from
//! independent phase accumulators:
//!
//! ```text
//! sine_phase += 2π·f/sr   (wrap by subtracting 2π)
//! saw_phase  += f/sr      (wrap by subtracting 1)
//! sine = sin(sine_phase)
//! saw  = 2·saw_phase − 1
//!
//! blended = (1 − blend)·(h·sine) + blend·(h·saw)
//! out     = (1 − amount)·h + amount·blended
//! ```
//!
//! The accumulators advance before the carrier is read, so the first value
//! after a reset is `sin(2π·f/sr)`, not `sin(0)`.
//!
//! In a multichannel stream the carrier advances once per frame and every
//! channel of that frame is modulated by the same [`CarrierSample`].
//!
//! Reference: Zölzer, "DAFX: Digital Audio Effects" (2011), Ch. 2.

use core::f32::consts::TAU;
use libm::{floorf, sinf};
use ringcrush_core::Effect;

/// Lowest accepted carrier frequency in Hz.
pub const MIN_FREQUENCY: f32 = 20.0;
/// Highest accepted carrier frequency in Hz.
pub const MAX_FREQUENCY: f32 = 2000.0;

/// One carrier value, shared by every channel of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CarrierSample {
    /// `sin(sine_phase)` in [-1, 1].
    pub sine: f32,
    /// `2·saw_phase − 1` in [-1, 1).
    pub saw: f32,
}

/// Two independent phase accumulators driving the ring modulator.
///
/// # Example
///
/// ```rust
/// use ringcrush_effects::Carrier;
///
/// let mut carrier = Carrier::new();
/// carrier.set_frequency(11025.0, 44100.0);
///
/// let c = carrier.advance();
/// assert!((c.sine - 1.0).abs() < 1e-6); // sin(π/2)
/// assert_eq!(c.saw, -0.5);              // 2·0.25 − 1
/// ```
#[derive(Debug, Clone, Default)]
pub struct Carrier {
    sine_phase: f32,
    saw_phase: f32,
    sine_inc: f32,
    saw_inc: f32,
}

impl Carrier {
    /// Create a carrier at phase zero with no increment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute both increments for `frequency` at `sample_rate`.
    ///
    /// Increments are folded into one period so a single subtraction per
    /// sample keeps each phase inside its range even when `frequency`
    /// exceeds the sample rate.
    pub fn set_frequency(&mut self, frequency: f32, sample_rate: f32) {
        let sine_inc = frequency * TAU / sample_rate;
        let saw_inc = frequency / sample_rate;
        self.sine_inc = if sine_inc >= TAU {
            sine_inc - TAU * floorf(sine_inc / TAU)
        } else {
            sine_inc
        };
        self.saw_inc = if saw_inc >= 1.0 {
            saw_inc - floorf(saw_inc)
        } else {
            saw_inc
        };
    }

    /// Advance both accumulators by one sample and return the new carrier.
    #[inline]
    pub fn advance(&mut self) -> CarrierSample {
        self.sine_phase += self.sine_inc;
        if self.sine_phase >= TAU {
            self.sine_phase -= TAU;
        }

        self.saw_phase += self.saw_inc;
        if self.saw_phase >= 1.0 {
            self.saw_phase -= 1.0;
        }

        CarrierSample {
            sine: sinf(self.sine_phase),
            saw: 2.0 * self.saw_phase - 1.0,
        }
    }

    /// Rewind both accumulators to zero.
    pub fn reset(&mut self) {
        self.sine_phase = 0.0;
        self.saw_phase = 0.0;
    }

    /// Sine phase in radians, in `[0, 2π)`.
    pub fn sine_phase(&self) -> f32 {
        self.sine_phase
    }

    /// Saw phase as a fraction of a cycle, in `[0, 1)`.
    pub fn saw_phase(&self) -> f32 {
        self.saw_phase
    }

    /// Sine increment in radians per sample.
    pub fn sine_increment(&self) -> f32 {
        self.sine_inc
    }

    /// Saw increment in cycles per sample.
    pub fn saw_increment(&self) -> f32 {
        self.saw_inc
    }
}

/// Ring modulator stage.
///
/// Owns the [`Carrier`] and the blend/amount mix. Output gain is applied by
/// the caller.
///
/// # Example
///
/// ```rust
/// use ringcrush_effects::RingMod;
///
/// let mut ring = RingMod::new(44100.0);
/// ring.set_frequency(440.0);
/// ring.set_amount(0.0);
///
/// let c = ring.advance_carrier();
/// assert_eq!(ring.modulate(0.3, c), 0.3);
/// ```
#[derive(Debug, Clone)]
pub struct RingMod {
    carrier: Carrier,
    sample_rate: f32,
    frequency: f32,
    blend: f32,
    amount: f32,
}

impl RingMod {
    /// Create a ring modulator: 1 kHz carrier, even blend, amount 0.
    pub fn new(sample_rate: f32) -> Self {
        let mut carrier = Carrier::new();
        carrier.set_frequency(1000.0, sample_rate);
        Self {
            carrier,
            sample_rate,
            frequency: 1000.0,
            blend: 0.5,
            amount: 0.0,
        }
    }

    /// Set the carrier frequency, clamped to `[MIN_FREQUENCY, MAX_FREQUENCY]`.
    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency.clamp(MIN_FREQUENCY, MAX_FREQUENCY);
        self.carrier.set_frequency(self.frequency, self.sample_rate);
    }

    /// Current carrier frequency in Hz.
    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    /// Set the sine/saw blend (0 = sine, 1 = saw).
    pub fn set_blend(&mut self, blend: f32) {
        self.blend = blend.clamp(0.0, 1.0);
    }

    /// Current sine/saw blend.
    pub fn blend(&self) -> f32 {
        self.blend
    }

    /// Set the modulation amount (0 = dry, 1 = fully modulated).
    pub fn set_amount(&mut self, amount: f32) {
        self.amount = amount.clamp(0.0, 1.0);
    }

    /// Current modulation amount.
    pub fn amount(&self) -> f32 {
        self.amount
    }

    /// The carrier oscillator.
    pub fn carrier(&self) -> &Carrier {
        &self.carrier
    }

    /// Advance the carrier by one frame.
    #[inline]
    pub fn advance_carrier(&mut self) -> CarrierSample {
        self.carrier.advance()
    }

    /// Modulate one sample `h` with a carrier value.
    #[inline]
    pub fn modulate(&self, h: f32, carrier: CarrierSample) -> f32 {
        let blended = (1.0 - self.blend) * (h * carrier.sine) + self.blend * (h * carrier.saw);
        (1.0 - self.amount) * h + self.amount * blended
    }
}

impl Effect for RingMod {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        let carrier = self.carrier.advance();
        self.modulate(input, carrier)
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.carrier.set_frequency(self.frequency, sample_rate);
    }

    fn reset(&mut self) {
        self.carrier.reset();
    }
}
