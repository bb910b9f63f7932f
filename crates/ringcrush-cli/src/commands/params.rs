//! Parameter listing.

use clap::Args;
use ringcrush_core::{ParamFlags, ParamScale};
use ringcrush_engine::ParamKind;
use serde::Serialize;

#[derive(Args)]
pub struct ParamsArgs {
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ParamEntry {
    id: u32,
    key: &'static str,
    name: &'static str,
    short_name: &'static str,
    min: f32,
    max: f32,
    default: f32,
    unit: &'static str,
    scale: &'static str,
    automatable: bool,
}

impl From<ParamKind> for ParamEntry {
    fn from(kind: ParamKind) -> Self {
        let desc = kind.descriptor();
        Self {
            id: desc.id.0,
            key: desc.string_id,
            name: desc.name,
            short_name: desc.short_name,
            min: desc.min,
            max: desc.max,
            default: desc.default,
            unit: desc.unit.suffix().trim(),
            scale: match desc.scale {
                ParamScale::Linear => "linear",
                ParamScale::Logarithmic => "log",
            },
            automatable: desc.flags.contains(ParamFlags::AUTOMATABLE),
        }
    }
}

pub fn run(args: ParamsArgs) -> anyhow::Result<()> {
    let entries: Vec<ParamEntry> = ParamKind::ALL.into_iter().map(ParamEntry::from).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("Parameters");
    println!("==========\n");
    println!(
        "  {:14} {:20} {:>8} {:>8} {:>8}  {}",
        "KEY", "NAME", "MIN", "MAX", "DEFAULT", "UNIT"
    );
    for e in &entries {
        println!(
            "  {:14} {:20} {:>8} {:>8} {:>8}  {}{}",
            e.key,
            e.name,
            e.min,
            e.max,
            e.default,
            e.unit,
            if e.scale == "log" { " (log)" } else { "" }
        );
    }
    println!("\nSet with --param key=value, e.g. --param carrier=440");
    Ok(())
}
