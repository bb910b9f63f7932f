//! ringcrush CLI - run the saturate / crush / ring / reverb chain on files
//! and devices.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ringcrush")]
#[command(author, version, about = "Saturation, sample-rate reduction, ring modulation and reverb", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a WAV file through the chain
    Process(commands::process::ProcessArgs),

    /// Play a WAV file through the chain on an output device
    Play(commands::play::PlayArgs),

    /// List the chain parameters
    Params(commands::params::ParamsArgs),

    /// List, show and save presets
    Presets(commands::presets::PresetsArgs),

    /// List output devices
    Devices,

    /// Show WAV file metadata
    Info(commands::info::InfoArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Process(args) => commands::process::run(args),
        Commands::Play(args) => commands::play::run(args),
        Commands::Params(args) => commands::params::run(args),
        Commands::Presets(args) => commands::presets::run(args),
        Commands::Devices => commands::devices::run(),
        Commands::Info(args) => commands::info::run(args),
    }
}
