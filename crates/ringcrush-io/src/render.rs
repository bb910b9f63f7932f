//! Offline block rendering.

use ringcrush_engine::{Processor, StreamSetup};

use crate::{AudioBuffer, Result};

/// Block size used when the caller has no preference.
pub const DEFAULT_BLOCK_SIZE: usize = 512;

/// Configure `processor` for `audio` and run it over every frame in place.
///
/// The buffer is cut into `block_size`-frame blocks (the last may be
/// shorter), exactly as a host would deliver them. `progress` is called
/// after each block with `(frames_done, frames_total)`.
///
/// The processor is left configured, so a second call continues from a
/// freshly reset state.
pub fn render<F>(
    processor: &mut Processor,
    audio: &mut AudioBuffer,
    sample_rate: f32,
    block_size: usize,
    mut progress: F,
) -> Result<()>
where
    F: FnMut(usize, usize),
{
    let block_size = block_size.max(1);
    let channels = audio.num_channels();
    let frames = audio.num_frames();

    processor.configure(StreamSetup::new(sample_rate, block_size, channels.max(1)))?;
    tracing::debug!(channels, frames, block_size, "render started");

    let mut start = 0;
    while start < frames {
        let end = (start + block_size).min(frames);
        let mut block = audio.frames_mut(start, end);
        processor.process_block(&mut block)?;
        progress(end, frames);
        start = end;
    }

    processor.stop();
    tracing::debug!(frames, "render finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ringcrush_engine::SharedParams;
    use std::sync::Arc;

    #[test]
    fn test_progress_reports_each_block() {
        let mut processor = Processor::new(Arc::new(SharedParams::new()));
        let mut audio = AudioBuffer::silent(2, 1000);
        let mut calls = Vec::new();
        render(&mut processor, &mut audio, 44100.0, 256, |done, total| {
            calls.push((done, total));
        })
        .unwrap();
        assert_eq!(calls, [(256, 1000), (512, 1000), (768, 1000), (1000, 1000)]);
    }

    #[test]
    fn test_empty_buffer() {
        let mut processor = Processor::new(Arc::new(SharedParams::new()));
        let mut audio = AudioBuffer::default();
        render(&mut processor, &mut audio, 48000.0, 64, |_, _| {
            panic!("no blocks expected")
        })
        .unwrap();
    }

    #[test]
    fn test_invalid_rate_is_error() {
        let mut processor = Processor::new(Arc::new(SharedParams::new()));
        let mut audio = AudioBuffer::silent(1, 10);
        let err = render(&mut processor, &mut audio, 0.0, 64, |_, _| {}).unwrap_err();
        assert!(matches!(err, crate::Error::Engine(_)));
    }
}
