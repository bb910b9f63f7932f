//! Mathematical utility functions for DSP.
//!
//! All functions are allocation-free and `no_std` compatible.
//!
//! - [`linear_to_db`] - Linear gain to decibels for level display
//! - [`flush_denormal`] - Zero out subnormal feedback values

use libm::logf;

/// Convert linear gain to decibels.
///
/// Anything at or below 1e-10 (including silence, negatives and NaN)
/// reports exactly -200 dB instead of -inf.
///
/// ```rust
/// use ringcrush_core::linear_to_db;
///
/// assert!(linear_to_db(1.0).abs() < 1e-6);
/// assert_eq!(linear_to_db(0.0), -200.0);
/// ```
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    // 20 * log10(linear) = 20 * ln(linear) / ln(10)
    const FACTOR: f32 = 20.0 / core::f32::consts::LN_10;
    if linear.is_nan() || linear <= 1e-10 {
        return -200.0;
    }
    logf(linear) * FACTOR
}

/// Flush values below 1e-20 to zero.
///
/// Feedback paths (combs, allpasses) decay toward subnormal floats, which
/// are slow on most CPUs.
#[inline]
pub fn flush_denormal(x: f32) -> f32 {
    if x.abs() < 1e-20 { 0.0 } else { x }
}
