//! Soft-clip saturator.
//!
//! # Theory
//!
//! `tanh` maps the real line onto (-1, 1) with a smooth knee, adding odd
//! harmonics as the drive pushes the signal into the curve. The stage
//! divides the shaped signal by half the drive:
//!
//! ```text
//! y = tanh(x · d) / (d / 2)
//! ```
//!
//! For small `x` this is roughly `2x`, independent of `d`, so raising the
//! drive adds harmonics without a matching jump in level. At the bottom of
//! the drive range (d = 0.1) the divisor is 0.05, which makes large inputs
//! loud; the bound `|y| ≤ 2 / d` always holds because `|tanh| < 1`.

use libm::tanhf;
use ringcrush_core::Effect;

/// Lowest accepted drive.
pub const MIN_DRIVE: f32 = 0.1;
/// Highest accepted drive.
pub const MAX_DRIVE: f32 = 10.0;

/// `tanh(x · drive) / (drive / 2)`.
///
/// Pure and stateless. `drive` is expected in `[MIN_DRIVE, MAX_DRIVE]`;
/// callers that cannot guarantee this should use [`Saturator`], which clamps.
///
/// ```rust
/// use ringcrush_effects::saturate;
///
/// assert_eq!(saturate(0.0, 2.0), 0.0);
/// let y = saturate(1.0, 0.1);
/// assert!(y.abs() <= 2.0 / 0.1);
/// ```
#[inline]
pub fn saturate(x: f32, drive: f32) -> f32 {
    tanhf(x * drive) / (drive / 2.0)
}

/// Soft-clip saturator with a clamped drive.
///
/// # Example
///
/// ```rust
/// use ringcrush_core::Effect;
/// use ringcrush_effects::Saturator;
///
/// let mut sat = Saturator::new();
/// sat.set_drive(4.0);
/// assert!(sat.process(0.9).is_finite());
/// ```
#[derive(Debug, Clone)]
pub struct Saturator {
    drive: f32,
}

impl Default for Saturator {
    fn default() -> Self {
        Self::new()
    }
}

impl Saturator {
    /// Create a saturator at the minimum drive.
    pub fn new() -> Self {
        Self { drive: MIN_DRIVE }
    }

    /// Set the drive, clamped to `[MIN_DRIVE, MAX_DRIVE]`.
    pub fn set_drive(&mut self, drive: f32) {
        self.drive = drive.clamp(MIN_DRIVE, MAX_DRIVE);
    }

    /// Current drive.
    pub fn drive(&self) -> f32 {
        self.drive
    }
}

impl Effect for Saturator {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        saturate(input, self.drive)
    }

    fn set_sample_rate(&mut self, _sample_rate: f32) {}

    fn reset(&mut self) {}
}
