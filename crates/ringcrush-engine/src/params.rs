//! The seven ringcrush controls.
//!
//! [`ParamKind`] names each control and carries its [`ParamDescriptor`].
//! [`ParamValues`] is a plain snapshot of all seven values, and
//! [`SharedParams`] is the lock-free store a control thread writes while the
//! audio callback reads one snapshot per block.
//!
//! | Kind | Key | Range | Default |
//! |------|-----|-------|---------|
//! | Gain | `gain` | 0 – 0.7 | 0.5 |
//! | Overdrive | `overdrive` | 0.1 – 10 | 0.1 |
//! | Target SR ratio | `targetSR` | 0 – 0.6 | 0.6 |
//! | Carrier | `carrier` | 20 – 2000 Hz (log) | 1000 |
//! | Ring wave blend | `ringWave` | 0 – 1 | 0.5 |
//! | Ring mod amount | `ringModAmount` | 0 – 1 | 0 |
//! | Reverb wet | `reverb` | 0 – 1 | 0 |

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use ringcrush_core::{ParamDescriptor, ParamId, ParameterInfo};
use ringcrush_effects::{ring_mod, saturator};

/// One of the seven chain controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParamKind {
    /// Output gain applied after the ring modulator.
    Gain,
    /// Saturator drive.
    Overdrive,
    /// Target sample-rate ratio for the rate reducer.
    TargetSampleRate,
    /// Carrier frequency in Hz.
    CarrierFrequency,
    /// Sine (0) to saw (1) carrier blend.
    RingWave,
    /// Ring modulation amount.
    RingModAmount,
    /// Reverb wet level; dry is `1 - wet`.
    ReverbWet,
}

impl ParamKind {
    /// Number of controls.
    pub const COUNT: usize = 7;

    /// Every control, in index order.
    pub const ALL: [ParamKind; Self::COUNT] = [
        ParamKind::Gain,
        ParamKind::Overdrive,
        ParamKind::TargetSampleRate,
        ParamKind::CarrierFrequency,
        ParamKind::RingWave,
        ParamKind::RingModAmount,
        ParamKind::ReverbWet,
    ];

    /// Position in [`ALL`](Self::ALL).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Control at `index`, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Metadata for this control.
    pub const fn descriptor(self) -> ParamDescriptor {
        match self {
            ParamKind::Gain => ParamDescriptor::custom("Gain", "Gain", 0.0, 0.7, 0.5)
                .with_id(ParamId(100), "gain"),
            ParamKind::Overdrive => ParamDescriptor::custom(
                "Overdrive",
                "Drive",
                saturator::MIN_DRIVE,
                saturator::MAX_DRIVE,
                0.1,
            )
            .with_step(0.1)
            .with_id(ParamId(101), "overdrive"),
            ParamKind::TargetSampleRate => {
                ParamDescriptor::custom("Target Sample Rate", "TargetSR", 0.0, 0.6, 0.6)
                    .with_id(ParamId(102), "targetSR")
            }
            ParamKind::CarrierFrequency => ParamDescriptor::frequency_hz(
                "Carrier Frequency",
                "Carrier",
                ring_mod::MIN_FREQUENCY,
                ring_mod::MAX_FREQUENCY,
                1000.0,
            )
            .with_id(ParamId(103), "carrier"),
            ParamKind::RingWave => ParamDescriptor::custom("Ring Wave", "Wave", 0.0, 1.0, 0.5)
                .with_id(ParamId(104), "ringWave"),
            ParamKind::RingModAmount => {
                ParamDescriptor::custom("Ring Mod Amount", "RingAmt", 0.0, 1.0, 0.0)
                    .with_id(ParamId(105), "ringModAmount")
            }
            ParamKind::ReverbWet => ParamDescriptor::custom("Reverb", "Reverb", 0.0, 1.0, 0.0)
                .with_id(ParamId(106), "reverb"),
        }
    }

    /// Persisted key, stable across versions.
    pub const fn key(self) -> &'static str {
        self.descriptor().string_id
    }

    /// Look up a control by persisted key (exact match).
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }

    /// Clamp `value` into this control's range. NaN maps to the default.
    #[inline]
    pub fn clamp(self, value: f32) -> f32 {
        self.descriptor().clamp(value)
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A snapshot of all seven control values, each within its range.
///
/// # Example
///
/// ```rust
/// use ringcrush_engine::{ParamKind, ParamValues};
///
/// let mut values = ParamValues::default();
/// assert_eq!(values.get(ParamKind::Gain), 0.5);
///
/// values.set(ParamKind::Gain, 3.0);
/// assert_eq!(values.get(ParamKind::Gain), 0.7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamValues {
    values: [f32; ParamKind::COUNT],
}

impl Default for ParamValues {
    fn default() -> Self {
        Self {
            values: ParamKind::ALL.map(|k| k.descriptor().default),
        }
    }
}

impl ParamValues {
    /// Value of one control.
    #[inline]
    pub fn get(&self, kind: ParamKind) -> f32 {
        self.values[kind.index()]
    }

    /// Set one control, clamped to its range.
    #[inline]
    pub fn set(&mut self, kind: ParamKind, value: f32) {
        self.values[kind.index()] = kind.clamp(value);
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, kind: ParamKind, value: f32) -> Self {
        self.set(kind, value);
        self
    }

    /// `(kind, value)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (ParamKind, f32)> + '_ {
        ParamKind::ALL.into_iter().map(|k| (k, self.get(k)))
    }
}

impl ParameterInfo for ParamValues {
    fn param_count(&self) -> usize {
        ParamKind::COUNT
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        ParamKind::from_index(index).map(ParamKind::descriptor)
    }

    fn get_param(&self, index: usize) -> f32 {
        ParamKind::from_index(index).map_or(0.0, |k| self.get(k))
    }

    fn set_param(&mut self, index: usize, value: f32) {
        if let Some(kind) = ParamKind::from_index(index) {
            self.set(kind, value);
        }
    }
}

/// Lock-free parameter store shared between a control thread and the
/// audio callback.
///
/// Each value is an `f32` stored as bits in an [`AtomicU32`] with relaxed
/// ordering. Writers clamp. A [`snapshot`](Self::snapshot) taken while
/// another thread writes may mix old and new values across controls; every
/// individual value is still a complete, in-range write.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use ringcrush_engine::{ParamKind, SharedParams};
///
/// let params = Arc::new(SharedParams::new());
/// let control = Arc::clone(&params);
///
/// control.set(ParamKind::CarrierFrequency, 5.0);
/// assert_eq!(params.get(ParamKind::CarrierFrequency), 20.0);
/// ```
pub struct SharedParams {
    values: [AtomicU32; ParamKind::COUNT],
}

impl Default for SharedParams {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SharedParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedParams")
            .field("values", &self.snapshot())
            .finish()
    }
}

impl SharedParams {
    /// Store initialized to every control's default.
    pub fn new() -> Self {
        Self::from_values(&ParamValues::default())
    }

    /// Store initialized from a snapshot.
    pub fn from_values(values: &ParamValues) -> Self {
        Self {
            values: ParamKind::ALL.map(|k| AtomicU32::new(values.get(k).to_bits())),
        }
    }

    /// Current value of one control.
    #[inline]
    pub fn get(&self, kind: ParamKind) -> f32 {
        f32::from_bits(self.values[kind.index()].load(Ordering::Relaxed))
    }

    /// Set one control, clamped to its range.
    #[inline]
    pub fn set(&self, kind: ParamKind, value: f32) {
        self.values[kind.index()].store(kind.clamp(value).to_bits(), Ordering::Relaxed);
    }

    /// Read all seven values.
    pub fn snapshot(&self) -> ParamValues {
        let mut values = ParamValues::default();
        for kind in ParamKind::ALL {
            values.values[kind.index()] = self.get(kind);
        }
        values
    }

    /// Overwrite all seven values from a snapshot.
    pub fn load(&self, values: &ParamValues) {
        for (kind, value) in values.iter() {
            self.set(kind, value);
        }
    }
}
