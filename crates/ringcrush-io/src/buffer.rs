//! Channel-major sample storage.

/// Owned multichannel audio, one `Vec<f32>` per channel.
///
/// All channels have the same length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AudioBuffer {
    channels: Vec<Vec<f32>>,
}

impl AudioBuffer {
    /// Silent buffer of `channels` × `frames`.
    pub fn silent(channels: usize, frames: usize) -> Self {
        Self {
            channels: vec![vec![0.0; frames]; channels],
        }
    }

    /// Build from per-channel vectors, truncating to the shortest.
    pub fn from_channels(mut channels: Vec<Vec<f32>>) -> Self {
        let frames = channels.iter().map(Vec::len).min().unwrap_or(0);
        for ch in &mut channels {
            ch.truncate(frames);
        }
        Self { channels }
    }

    /// Deinterleave `samples` with `channels` samples per frame.
    ///
    /// A trailing partial frame is dropped.
    pub fn from_interleaved(samples: &[f32], channels: usize) -> Self {
        if channels == 0 {
            return Self::default();
        }
        let frames = samples.len() / channels;
        let mut out = vec![Vec::with_capacity(frames); channels];
        for frame in samples.chunks_exact(channels) {
            for (ch, &s) in out.iter_mut().zip(frame) {
                ch.push(s);
            }
        }
        Self { channels: out }
    }

    /// Interleave into one frame-major vector.
    pub fn to_interleaved(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.num_channels() * self.num_frames());
        for frame in 0..self.num_frames() {
            for ch in &self.channels {
                out.push(ch[frame]);
            }
        }
        out
    }

    /// Number of channels.
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Samples per channel.
    pub fn num_frames(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    /// One channel's samples.
    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    /// All channels.
    pub fn channels(&self) -> &[Vec<f32>] {
        &self.channels
    }

    /// Mutable slices of `start..end` in every channel.
    pub fn frames_mut(&mut self, start: usize, end: usize) -> Vec<&mut [f32]> {
        self.channels
            .iter_mut()
            .map(|ch| &mut ch[start..end])
            .collect()
    }

    /// Keep only the first `channels` channels.
    pub fn truncate_channels(&mut self, channels: usize) {
        self.channels.truncate(channels);
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> f32 {
        self.channels
            .iter()
            .flatten()
            .fold(0.0_f32, |acc, &s| acc.max(s.abs()))
    }

    /// Root-mean-square level over every sample of every channel.
    pub fn rms(&self) -> f32 {
        let count = self.num_channels() * self.num_frames();
        if count == 0 {
            return 0.0;
        }
        let sum: f64 = self
            .channels
            .iter()
            .flatten()
            .map(|&s| f64::from(s) * f64::from(s))
            .sum();
        (sum / count as f64).sqrt() as f32
    }
}
