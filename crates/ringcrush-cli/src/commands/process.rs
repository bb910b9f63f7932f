//! Offline file processing.

use super::common::{build_values, format_db, parse_param, print_values};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use ringcrush_engine::{ParamKind, Processor, SharedParams};
use ringcrush_io::{WavSpec, read_wav, render, write_wav};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Preset name or path
    #[arg(short, long)]
    preset: Option<String>,

    /// Parameter override, applied after the preset (e.g. "carrier=440")
    #[arg(long, value_parser = parse_param, number_of_values = 1)]
    param: Vec<(ParamKind, f32)>,

    /// Processing block size
    #[arg(long, default_value = "512")]
    block_size: usize,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32")]
    bit_depth: u16,
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    println!("Reading {}...", args.input.display());
    let (mut audio, spec) = read_wav(&args.input)?;
    let frames = audio.num_frames();
    println!(
        "  {} channel(s), {} frames, {} Hz, {:.2}s",
        audio.num_channels(),
        frames,
        spec.sample_rate,
        frames as f32 / spec.sample_rate as f32
    );

    let values = build_values(args.preset.as_deref(), &args.param)?;
    print_values(&values);

    let input_rms = audio.rms();
    let input_peak = audio.peak();

    let pb = ProgressBar::new(frames as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );

    let mut processor = Processor::new(Arc::new(SharedParams::from_values(&values)));
    render(
        &mut processor,
        &mut audio,
        spec.sample_rate as f32,
        args.block_size,
        |done, _| pb.set_position(done as u64),
    )?;
    pb.finish_and_clear();

    println!("\nStats:");
    println!(
        "  Input:  RMS {}, Peak {}",
        format_db(input_rms),
        format_db(input_peak)
    );
    println!(
        "  Output: RMS {}, Peak {}",
        format_db(audio.rms()),
        format_db(audio.peak())
    );

    let out_spec = WavSpec {
        bits_per_sample: args.bit_depth,
        ..spec
    };
    println!("\nWriting {}...", args.output.display());
    write_wav(&args.output, &audio, out_spec)?;
    println!("Done!");

    Ok(())
}
