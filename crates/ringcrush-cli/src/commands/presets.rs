//! Preset management commands.

use super::common::{build_values, parse_param, print_values};
use anyhow::Context;
use clap::{Args, Subcommand};
use ringcrush_config::{
    Preset, ensure_user_presets_dir, factory_presets, list_user_presets, paths,
    resolve_preset, user_presets_dir,
};
use ringcrush_engine::ParamKind;

#[derive(Args)]
pub struct PresetsArgs {
    #[command(subcommand)]
    command: PresetsCommand,
}

#[derive(Subcommand)]
enum PresetsCommand {
    /// List factory and user presets
    List,

    /// Show the values of a preset
    Show {
        /// Preset name or path
        name: String,
    },

    /// Save a new user preset
    Save {
        /// Name for the new preset
        name: String,

        /// Preset to start from (defaults otherwise)
        #[arg(long)]
        from: Option<String>,

        /// Parameter value (e.g. "overdrive=4")
        #[arg(long, value_parser = parse_param, number_of_values = 1)]
        param: Vec<(ParamKind, f32)>,

        /// Description of the preset
        #[arg(short, long)]
        description: Option<String>,

        /// Overwrite if the preset already exists
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    match args.command {
        PresetsCommand::List => list_presets(),
        PresetsCommand::Show { name } => show_preset(&name),
        PresetsCommand::Save {
            name,
            from,
            param,
            description,
            force,
        } => save_preset(&name, from.as_deref(), &param, description, force),
    }
}

fn list_presets() -> anyhow::Result<()> {
    println!("Factory Presets:");
    println!("================");
    for (id, preset) in ringcrush_config::factory_preset_names()
        .into_iter()
        .zip(factory_presets())
    {
        let desc = preset.description.as_deref().unwrap_or("");
        println!("  {:14} {:14} - {}", id, preset.name, desc);
    }
    println!();

    println!("User Presets ({}):", user_presets_dir().display());
    println!("=============");
    let user_presets = list_user_presets();
    if user_presets.is_empty() {
        println!("  (none)");
        println!("\n  Create one with: ringcrush presets save <name> --param key=value");
    } else {
        for path in user_presets {
            let id = paths::preset_name_from_path(&path).unwrap_or_default();
            match Preset::load(&path) {
                Ok(preset) => println!(
                    "  {:14} {:14} - {}",
                    id,
                    preset.name,
                    preset.description.as_deref().unwrap_or("")
                ),
                Err(e) => println!("  {:14} (unreadable: {})", id, e),
            }
        }
    }
    Ok(())
}

fn show_preset(name: &str) -> anyhow::Result<()> {
    let preset = resolve_preset(name)?;
    let values = preset
        .to_values()
        .with_context(|| format!("preset '{}' is invalid", preset.name))?;

    println!("Preset: {}", preset.name);
    if let Some(desc) = &preset.description {
        println!("Description: {desc}");
    }
    println!("\nValues:");
    print_values(&values);
    Ok(())
}

fn save_preset(
    name: &str,
    from: Option<&str>,
    overrides: &[(ParamKind, f32)],
    description: Option<String>,
    force: bool,
) -> anyhow::Result<()> {
    let dir = ensure_user_presets_dir()?;
    let path = dir.join(format!("{name}.toml"));
    if path.exists() && !force {
        anyhow::bail!(
            "preset '{}' already exists at {} (use --force to overwrite)",
            name,
            path.display()
        );
    }

    let values = build_values(from, overrides)?;
    let mut preset = Preset::from_values(name, &values);
    preset.description = description;
    preset.save(&path)?;

    println!("Saved {}", path.display());
    Ok(())
}
