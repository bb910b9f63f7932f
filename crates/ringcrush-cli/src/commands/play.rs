//! Real-time playback of a file through the chain.

use super::common::{build_values, parse_param, print_values};
use clap::Args;
use ringcrush_engine::{ParamKind, Processor, SharedParams};
use ringcrush_io::{Playback, PlaybackConfig, read_wav};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

#[derive(Args)]
pub struct PlayArgs {
    /// WAV file to play
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Preset name or path
    #[arg(short, long)]
    preset: Option<String>,

    /// Parameter override, applied after the preset (e.g. "reverb=0.4")
    #[arg(long, value_parser = parse_param, number_of_values = 1)]
    param: Vec<(ParamKind, f32)>,

    /// Output device (index, exact name, or partial name)
    #[arg(short, long)]
    device: Option<String>,

    /// Loop playback
    #[arg(short, long, alias = "repeat")]
    r#loop: bool,
}

pub fn run(args: PlayArgs) -> anyhow::Result<()> {
    println!("Loading {}...", args.file.display());
    let (audio, spec) = read_wav(&args.file)?;
    println!(
        "  {} channel(s), {} frames, {} Hz",
        audio.num_channels(),
        audio.num_frames(),
        spec.sample_rate
    );
    if audio.num_channels() > 2 {
        println!("  (playing the first two channels)");
    }

    let values = build_values(args.preset.as_deref(), &args.param)?;
    print_values(&values);

    let params = Arc::new(SharedParams::from_values(&values));
    let processor = Processor::new(Arc::clone(&params));

    let running = Arc::new(AtomicBool::new(true));
    let r = Arc::clone(&running);
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })?;

    let config = PlaybackConfig {
        device: args.device,
        looping: args.r#loop,
    };
    let playback = Playback::start(audio, processor, spec.sample_rate, &config)?;

    println!(
        "\nPlaying on '{}' at {} Hz{}... Press Ctrl+C to stop.",
        playback.device_name(),
        playback.sample_rate(),
        if config.looping { " (looping)" } else { "" }
    );

    while running.load(Ordering::SeqCst) && !playback.is_finished() {
        std::thread::sleep(Duration::from_millis(100));
    }
    playback.stop();
    println!("Stopped.");

    Ok(())
}
