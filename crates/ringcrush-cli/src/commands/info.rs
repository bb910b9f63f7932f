//! WAV metadata and levels.

use super::common::format_db;
use clap::Args;
use ringcrush_engine::Processor;
use ringcrush_io::{AudioBuffer, WavFormat, read_wav, read_wav_info};
use std::path::PathBuf;

#[derive(Args)]
pub struct InfoArgs {
    /// WAV file to inspect
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Also print per-channel peak and RMS (reads the whole file)
    #[arg(long)]
    levels: bool,
}

pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let info = read_wav_info(&args.file)?;
    let encoding = match info.format {
        WavFormat::Pcm => "int",
        WavFormat::IeeeFloat => "float",
    };

    println!("{}", args.file.display());
    println!(
        "  {} Hz, {}-bit {}, {} channel(s)",
        info.sample_rate, info.bits_per_sample, encoding, info.channels
    );
    println!("  {} frames ({:.3}s)", info.num_frames, info.duration_secs);

    let channels = usize::from(info.channels);
    let layout = if Processor::supports_channel_layout(channels) {
        "full chain"
    } else {
        "reverb on channels 1-2 only"
    };
    println!("  Layout: {layout}");

    if args.levels {
        let (audio, _) = read_wav(&args.file)?;
        print_levels(&audio);
    }
    Ok(())
}

fn print_levels(audio: &AudioBuffer) {
    println!("  Levels:");
    for (idx, samples) in audio.channels().iter().enumerate() {
        let peak = samples.iter().fold(0.0_f32, |acc, s| acc.max(s.abs()));
        let rms = if samples.is_empty() {
            0.0
        } else {
            let sum: f64 = samples.iter().map(|&s| f64::from(s) * f64::from(s)).sum();
            (sum / samples.len() as f64).sqrt() as f32
        };
        println!(
            "    ch{}: peak {}, RMS {}",
            idx + 1,
            format_db(peak),
            format_db(rms)
        );
    }
}
