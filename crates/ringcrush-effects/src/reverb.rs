//! Freeverb-style stereo reverb.
//!
//! Eight parallel damped combs feed four series allpasses per side. The
//! right side's delay lines are detuned by [`STEREO_SPREAD`] samples so the
//! two tails decorrelate. Both sides are driven by the same mono input
//! (`(l + r) · gain`); `width` sets how much of each side's tail is
//! cross-fed into the other output.
//!
//! ```text
//! feedback = room_size · 0.28 + 0.7        damp = damping · 0.4
//! wet1     = 0.5 · 3·wet · (1 + width)     wet2 = 0.5 · 3·wet · (1 − width)
//!
//! l' = outL·wet1 + outR·wet2 + l·dry
//! r' = outR·wet1 + outL·wet2 + r·dry
//! ```
//!
//! Freeze pins the combs at feedback 1, damping 0 and mutes the input so the
//! current tail rings indefinitely.
//!
//! The dry gain is applied as given, so `wet_level = 0, dry_level = 1` is a
//! bit-exact passthrough. Parameter changes take effect immediately.

use ringcrush_core::{AllpassFilter, CombFilter, Effect};

/// Comb delay lengths at 44.1 kHz.
const COMB_TUNINGS: [usize; 8] = [1116, 1188, 1277, 1356, 1422, 1491, 1557, 1617];

/// Allpass delay lengths at 44.1 kHz.
const ALLPASS_TUNINGS: [usize; 4] = [556, 441, 341, 225];

/// Extra delay in samples (at 44.1 kHz) on every right-side filter.
pub const STEREO_SPREAD: usize = 23;

const REFERENCE_RATE: usize = 44100;
const FIXED_GAIN: f32 = 0.015;
const WET_SCALE: f32 = 3.0;
const ROOM_SCALE: f32 = 0.28;
const ROOM_OFFSET: f32 = 0.7;
const DAMP_SCALE: f32 = 0.4;
const ALLPASS_FEEDBACK: f32 = 0.5;

/// Scale a 44.1 kHz tuning to `sample_rate`, truncating.
fn scale_to_rate(tuning: usize, sample_rate: f32) -> usize {
    let rate = sample_rate.max(1.0) as usize;
    (rate * tuning / REFERENCE_RATE).max(1)
}

/// Reverb parameter block, applied with [`Reverb::set_params`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReverbParams {
    /// Room size, 0..=1. Maps to comb feedback 0.7..=0.98.
    pub room_size: f32,
    /// High-frequency damping, 0..=1.
    pub damping: f32,
    /// Wet level, 0..=1.
    pub wet_level: f32,
    /// Dry level, 0..=1.
    pub dry_level: f32,
    /// Stereo width, 0..=1.
    pub width: f32,
    /// Infinite sustain.
    pub freeze: bool,
}

impl Default for ReverbParams {
    fn default() -> Self {
        Self {
            room_size: 0.5,
            damping: 0.5,
            wet_level: 0.33,
            dry_level: 0.4,
            width: 1.0,
            freeze: false,
        }
    }
}

impl ReverbParams {
    /// The fixed room the ringcrush chain uses, mixed by `wet`.
    ///
    /// Room 0.6, damping 0.5, full width, no freeze, `dry = 1 − wet`.
    pub fn chain_room(wet: f32) -> Self {
        let wet = wet.clamp(0.0, 1.0);
        Self {
            room_size: 0.6,
            damping: 0.5,
            wet_level: wet,
            dry_level: 1.0 - wet,
            width: 1.0,
            freeze: false,
        }
    }

    fn clamped(self) -> Self {
        Self {
            room_size: self.room_size.clamp(0.0, 1.0),
            damping: self.damping.clamp(0.0, 1.0),
            wet_level: self.wet_level.clamp(0.0, 1.0),
            dry_level: self.dry_level.clamp(0.0, 1.0),
            width: self.width.clamp(0.0, 1.0),
            freeze: self.freeze,
        }
    }
}

/// Freeverb-style reverb with a stereo and a mono path.
///
/// # Example
///
/// ```rust
/// use ringcrush_effects::{Reverb, ReverbParams};
///
/// let mut reverb = Reverb::new(44100.0);
/// reverb.set_params(ReverbParams::chain_room(0.4));
///
/// let mut left = vec![0.0_f32; 256];
/// let mut right = vec![0.0_f32; 256];
/// left[0] = 1.0;
/// right[0] = 1.0;
/// reverb.process_stereo(&mut left, &mut right);
/// assert!(left.iter().all(|x| x.is_finite()));
/// ```
#[derive(Debug, Clone)]
pub struct Reverb {
    combs_l: [CombFilter; 8],
    combs_r: [CombFilter; 8],
    allpasses_l: [AllpassFilter; 4],
    allpasses_r: [AllpassFilter; 4],
    params: ReverbParams,
    sample_rate: f32,
    gain: f32,
    wet1: f32,
    wet2: f32,
    dry: f32,
}

impl Reverb {
    /// Create a reverb sized for `sample_rate` with default parameters.
    pub fn new(sample_rate: f32) -> Self {
        let mut reverb = Self {
            combs_l: build_combs(sample_rate, 0),
            combs_r: build_combs(sample_rate, STEREO_SPREAD),
            allpasses_l: build_allpasses(sample_rate, 0),
            allpasses_r: build_allpasses(sample_rate, STEREO_SPREAD),
            params: ReverbParams::default(),
            sample_rate,
            gain: FIXED_GAIN,
            wet1: 0.0,
            wet2: 0.0,
            dry: 0.0,
        };
        reverb.set_params(ReverbParams::default());
        reverb
    }

    /// Apply a parameter block. Values are clamped to their ranges.
    pub fn set_params(&mut self, params: ReverbParams) {
        let params = params.clamped();
        let wet = params.wet_level * WET_SCALE;
        self.wet1 = 0.5 * wet * (1.0 + params.width);
        self.wet2 = 0.5 * wet * (1.0 - params.width);
        self.dry = params.dry_level;
        self.gain = if params.freeze { 0.0 } else { FIXED_GAIN };

        let (damp, feedback) = if params.freeze {
            (0.0, 1.0)
        } else {
            (
                params.damping * DAMP_SCALE,
                params.room_size * ROOM_SCALE + ROOM_OFFSET,
            )
        };
        for comb in self.combs_l.iter_mut().chain(self.combs_r.iter_mut()) {
            comb.set_damp(damp);
            comb.set_feedback(feedback);
        }

        self.params = params;
    }

    /// Current (clamped) parameters.
    pub fn params(&self) -> ReverbParams {
        self.params
    }

    /// Sample rate the delay lines are sized for.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Length in samples of the first left comb.
    pub fn comb_length(&self) -> usize {
        self.combs_l[0].capacity()
    }

    /// Process a stereo pair in place. Uses the shorter of the two lengths.
    pub fn process_stereo(&mut self, left: &mut [f32], right: &mut [f32]) {
        for (l, r) in left.iter_mut().zip(right.iter_mut()) {
            let input = (*l + *r) * self.gain;

            let mut out_l = 0.0;
            let mut out_r = 0.0;
            for (cl, cr) in self.combs_l.iter_mut().zip(self.combs_r.iter_mut()) {
                out_l += cl.process(input);
                out_r += cr.process(input);
            }
            for (al, ar) in self.allpasses_l.iter_mut().zip(self.allpasses_r.iter_mut()) {
                out_l = al.process(out_l);
                out_r = ar.process(out_r);
            }

            *l = out_l * self.wet1 + out_r * self.wet2 + *l * self.dry;
            *r = out_r * self.wet1 + out_l * self.wet2 + *r * self.dry;
        }
    }

    /// Process one mono channel in place through the left network.
    pub fn process_mono(&mut self, samples: &mut [f32]) {
        for s in samples.iter_mut() {
            *s = self.tick_mono(*s);
        }
    }

    #[inline]
    fn tick_mono(&mut self, x: f32) -> f32 {
        let input = x * self.gain;
        let mut out = 0.0;
        for comb in &mut self.combs_l {
            out += comb.process(input);
        }
        for ap in &mut self.allpasses_l {
            out = ap.process(out);
        }
        out * self.wet1 + x * self.dry
    }
}

fn build_combs(sample_rate: f32, spread: usize) -> [CombFilter; 8] {
    core::array::from_fn(|i| CombFilter::new(scale_to_rate(COMB_TUNINGS[i] + spread, sample_rate)))
}

fn build_allpasses(sample_rate: f32, spread: usize) -> [AllpassFilter; 4] {
    core::array::from_fn(|i| {
        let mut ap = AllpassFilter::new(scale_to_rate(ALLPASS_TUNINGS[i] + spread, sample_rate));
        ap.set_feedback(ALLPASS_FEEDBACK);
        ap
    })
}

impl Effect for Reverb {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        self.tick_mono(input)
    }

    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        self.process_mono(buffer);
    }

    /// Rebuild every delay line for the new rate. Clears all state.
    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.combs_l = build_combs(sample_rate, 0);
        self.combs_r = build_combs(sample_rate, STEREO_SPREAD);
        self.allpasses_l = build_allpasses(sample_rate, 0);
        self.allpasses_r = build_allpasses(sample_rate, STEREO_SPREAD);
        self.set_params(self.params);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sample_rate,
            comb_len = self.combs_l[0].capacity(),
            "reverb: rebuilt delay lines"
        );
    }

    fn reset(&mut self) {
        for comb in self.combs_l.iter_mut().chain(self.combs_r.iter_mut()) {
            comb.clear();
        }
        for ap in self.allpasses_l.iter_mut().chain(self.allpasses_r.iter_mut()) {
            ap.clear();
        }
    }
}
