//! Fixed-length circular delay line.
//!
//! The reverb's combs and allpasses read the oldest sample and overwrite it
//! in the same step, so a single cursor is enough: [`DelayLine::front`]
//! returns the sample written `len` pushes ago and [`DelayLine::push`]
//! replaces it and advances.
//!
//! # Memory
//!
//! The buffer is heap-allocated on construction and never reallocates.

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::vec;
use alloc::vec::Vec;

/// Heap-allocated circular buffer with a fixed length.
///
/// # Example
///
/// ```rust
/// use ringcrush_core::DelayLine;
///
/// let mut delay = DelayLine::new(3);
/// for x in [1.0, 2.0, 3.0] {
///     assert_eq!(delay.front(), 0.0);
///     delay.push(x);
/// }
/// assert_eq!(delay.front(), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct DelayLine {
    buffer: Vec<f32>,
    pos: usize,
}

impl DelayLine {
    /// Create a zeroed delay line of `len` samples (at least 1).
    pub fn new(len: usize) -> Self {
        Self {
            buffer: vec![0.0; len.max(1)],
            pos: 0,
        }
    }

    /// The oldest sample, which the next [`push`](Self::push) overwrites.
    #[inline]
    pub fn front(&self) -> f32 {
        self.buffer[self.pos]
    }

    /// Overwrite the oldest sample and advance the cursor.
    #[inline]
    pub fn push(&mut self, sample: f32) {
        self.buffer[self.pos] = sample;
        self.pos += 1;
        if self.pos >= self.buffer.len() {
            self.pos = 0;
        }
    }

    /// Zero the buffer and rewind the cursor.
    pub fn clear(&mut self) {
        self.buffer.fill(0.0);
        self.pos = 0;
    }

    /// Delay length in samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Always `false`; the length is clamped to at least one sample.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
