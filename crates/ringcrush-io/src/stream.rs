//! Real-time playback via cpal.
//!
//! [`Playback`] moves a configured [`Processor`] into the output callback.
//! The callback pulls frames from the source buffer through a
//! [`PlaybackCursor`], runs them through the processor in scratch buffers
//! sized up front, and interleaves the result into the device buffer.
//! Parameter changes reach the callback through the processor's
//! `Arc<SharedParams>`.

use crate::{AudioBuffer, Error, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, Host, Stream};
use ringcrush_engine::{Processor, StreamSetup};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Largest block handed to the processor; bigger device buffers are split.
const SCRATCH_FRAMES: usize = 4096;

/// Extract device name via `description()` (cpal 0.17+).
fn device_name(device: &Device) -> std::result::Result<String, cpal::DeviceNameError> {
    device.description().map(|d| d.name().to_string())
}

/// Output device information.
#[derive(Debug, Clone)]
pub struct AudioDevice {
    /// Human-readable device name.
    pub name: String,
    /// Default sample rate in Hz.
    pub default_sample_rate: u32,
    /// Default channel count.
    pub channels: u16,
    /// Whether this is the host's default output.
    pub is_default: bool,
}

/// List all output devices on the default host.
pub fn list_output_devices() -> Result<Vec<AudioDevice>> {
    let host = cpal::default_host();
    let default_name = host
        .default_output_device()
        .and_then(|d| device_name(&d).ok());

    let devices = host
        .output_devices()
        .map_err(|e| Error::Stream(e.to_string()))?
        .filter_map(|device| {
            let name = device_name(&device).ok()?;
            let config = device.default_output_config().ok();
            Some(AudioDevice {
                is_default: default_name.as_deref() == Some(name.as_str()),
                name,
                default_sample_rate: config.as_ref().map_or(48000, |c| c.sample_rate()),
                channels: config.as_ref().map_or(2, |c| c.channels()),
            })
        })
        .collect();
    Ok(devices)
}

/// The default output device, if any.
pub fn default_output_device() -> Result<Option<AudioDevice>> {
    Ok(list_output_devices()?.into_iter().find(|d| d.is_default))
}

/// Find an output device by index, exact name, or case-insensitive partial
/// name.
fn find_output_device(host: &Host, name_or_index: &str) -> Result<Device> {
    let devices: Vec<_> = host
        .output_devices()
        .map_err(|e| Error::Stream(e.to_string()))?
        .collect();

    if let Ok(index) = name_or_index.parse::<usize>() {
        return devices.get(index).cloned().ok_or_else(|| {
            Error::DeviceNotFound(format!(
                "output device index {} (only {} devices available)",
                index,
                devices.len()
            ))
        });
    }

    if let Some(device) = devices
        .iter()
        .find(|d| device_name(d).is_ok_and(|n| n == name_or_index))
    {
        return Ok(device.clone());
    }

    let search_lower = name_or_index.to_lowercase();
    let mut matches: Vec<_> = devices
        .iter()
        .filter_map(|d| {
            device_name(d)
                .ok()
                .filter(|name| name.to_lowercase().contains(&search_lower))
                .map(|name| (d.clone(), name))
        })
        .collect();

    match matches.len() {
        0 => Err(Error::DeviceNotFound(format!(
            "no output device matching '{}'",
            name_or_index
        ))),
        1 => Ok(matches.remove(0).0),
        _ => {
            let names: Vec<_> = matches.iter().map(|(_, n)| n.as_str()).collect();
            tracing::warn!(
                search = name_or_index,
                ?names,
                "multiple output devices match, using the first"
            );
            Ok(matches.remove(0).0)
        }
    }
}

/// Read position over a source buffer, plus the silent tail played after it.
#[derive(Debug, Clone)]
pub struct PlaybackCursor {
    position: usize,
    tail_remaining: usize,
    looping: bool,
}

impl PlaybackCursor {
    /// Start at frame 0. `tail_frames` of silence follow the source unless
    /// `looping`.
    pub fn new(looping: bool, tail_frames: usize) -> Self {
        Self {
            position: 0,
            tail_remaining: tail_frames,
            looping,
        }
    }

    /// Current frame in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Copy the next `frames` frames into `scratch[c][..frames]`.
    ///
    /// `scratch` must not have more channels than `source`. Past the end of
    /// a non-looping source the frames are silent and count down the tail.
    pub fn fill(&mut self, source: &AudioBuffer, scratch: &mut [Vec<f32>], frames: usize) {
        let total = source.num_frames();
        for i in 0..frames {
            if self.looping && total > 0 && self.position >= total {
                self.position = 0;
            }
            if self.position < total {
                for (ch, src) in scratch.iter_mut().zip(source.channels()) {
                    ch[i] = src[self.position];
                }
                self.position += 1;
            } else {
                for ch in scratch.iter_mut() {
                    ch[i] = 0.0;
                }
                self.tail_remaining = self.tail_remaining.saturating_sub(1);
            }
        }
    }

    /// Whether the source and its tail have been fully played.
    pub fn is_finished(&self, source: &AudioBuffer) -> bool {
        let total = source.num_frames();
        !(self.looping && total > 0) && self.position >= total && self.tail_remaining == 0
    }
}

/// Interleave `frames` frames of channel-major `scratch` into `out`.
///
/// Mono is copied to the first two device channels; stereo into a mono
/// device is averaged. Device channels past the second are silent.
pub fn interleave_into(scratch: &[Vec<f32>], frames: usize, out: &mut [f32], out_channels: usize) {
    if out_channels == 0 {
        return;
    }
    for (i, frame) in out.chunks_exact_mut(out_channels).take(frames).enumerate() {
        match (scratch, out_channels) {
            ([l, r], 1) => frame[0] = (l[i] + r[i]) * 0.5,
            ([mono], _) => {
                for (o, s) in frame.iter_mut().enumerate() {
                    *s = if o < 2 { mono[i] } else { 0.0 };
                }
            }
            _ => {
                for (o, s) in frame.iter_mut().enumerate() {
                    *s = scratch.get(o).map_or(0.0, |ch| ch[i]);
                }
            }
        }
    }
}

/// Options for [`Playback::start`].
#[derive(Debug, Clone, Default)]
pub struct PlaybackConfig {
    /// Output device name or index (uses default if `None`).
    pub device: Option<String>,
    /// Restart from the beginning at the end of the source.
    pub looping: bool,
}

/// A running output stream playing a buffer through a processor.
///
/// Dropping it stops the stream.
pub struct Playback {
    _stream: Stream,
    running: Arc<AtomicBool>,
    finished: Arc<AtomicBool>,
    device_name: String,
    sample_rate: u32,
}

impl Playback {
    /// Open the output device, configure `processor` for it and start
    /// playing `source` (first two channels at most).
    ///
    /// The device runs at its default rate; a source at another rate plays
    /// back pitch-shifted.
    pub fn start(
        mut source: AudioBuffer,
        mut processor: Processor,
        source_rate: u32,
        config: &PlaybackConfig,
    ) -> Result<Self> {
        let host = cpal::default_host();
        let device = match &config.device {
            Some(name) => find_output_device(&host, name)?,
            None => host.default_output_device().ok_or(Error::NoDevice)?,
        };
        let device_name = device_name(&device).unwrap_or_else(|_| "unknown".to_string());

        let supported = device
            .default_output_config()
            .map_err(|e| Error::Stream(e.to_string()))?;
        if supported.sample_format() != cpal::SampleFormat::F32 {
            return Err(Error::UnsupportedFormat(format!(
                "device '{}' uses {:?}, expected f32",
                device_name,
                supported.sample_format()
            )));
        }
        let sample_rate = supported.sample_rate();
        let out_channels = supported.channels() as usize;
        if sample_rate != source_rate {
            tracing::warn!(
                source_rate,
                device_rate = sample_rate,
                "sample rate mismatch, playback will be pitch-shifted"
            );
        }

        source.truncate_channels(2);
        let channels = source.num_channels();
        if channels == 0 {
            return Err(Error::UnsupportedFormat("source has no channels".to_string()));
        }
        processor.configure(StreamSetup::new(sample_rate as f32, SCRATCH_FRAMES, channels))?;

        let tail_frames = (processor.tail_length_seconds() * f64::from(sample_rate)) as usize;
        let mut cursor = PlaybackCursor::new(config.looping, tail_frames);
        let mut scratch = vec![vec![0.0_f32; SCRATCH_FRAMES]; channels];

        let running = Arc::new(AtomicBool::new(true));
        let finished = Arc::new(AtomicBool::new(false));
        let cb_running = Arc::clone(&running);
        let cb_finished = Arc::clone(&finished);

        let stream = device
            .build_output_stream(
                &supported.into(),
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    if !cb_running.load(Ordering::Relaxed) || out_channels == 0 {
                        data.fill(0.0);
                        return;
                    }
                    for chunk in data.chunks_mut(SCRATCH_FRAMES * out_channels) {
                        let frames = chunk.len() / out_channels;
                        cursor.fill(&source, &mut scratch, frames);
                        let result = match scratch.as_mut_slice() {
                            [mono] => processor.process_block(&mut [&mut mono[..frames]]),
                            [l, r] => processor
                                .process_block(&mut [&mut l[..frames], &mut r[..frames]]),
                            _ => Ok(()),
                        };
                        if result.is_err() {
                            chunk.fill(0.0);
                            continue;
                        }
                        interleave_into(&scratch, frames, chunk, out_channels);
                    }
                    if cursor.is_finished(&source) {
                        cb_finished.store(true, Ordering::Relaxed);
                    }
                },
                |err| tracing::error!(%err, "output stream error"),
                None,
            )
            .map_err(|e| Error::Stream(e.to_string()))?;

        stream.play().map_err(|e| Error::Stream(e.to_string()))?;
        tracing::info!(
            device = %device_name,
            sample_rate,
            channels = out_channels,
            looping = config.looping,
            "playback started"
        );

        Ok(Self {
            _stream: stream,
            running,
            finished,
            device_name,
            sample_rate,
        })
    }

    /// Silence the output. The stream stays open until dropped.
    pub fn stop(&self) {
        self.running.store(false, Ordering::Relaxed);
    }

    /// Whether the source and reverb tail have finished playing.
    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Relaxed)
    }

    /// Name of the output device.
    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    /// Device sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}
