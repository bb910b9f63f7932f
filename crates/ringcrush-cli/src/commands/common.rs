//! Shared CLI helpers used across multiple commands.

use anyhow::Context;
use ringcrush_config::{ConfigError, parse_assignment, resolve_preset};
use ringcrush_core::linear_to_db;
use ringcrush_engine::{ParamKind, ParamValues};

/// clap `value_parser` for `--param key=value`.
pub fn parse_param(s: &str) -> Result<(ParamKind, f32), ConfigError> {
    parse_assignment(s)
}

/// Start from the defaults, apply `preset` if given, then each override in
/// order.
pub fn build_values(
    preset: Option<&str>,
    overrides: &[(ParamKind, f32)],
) -> anyhow::Result<ParamValues> {
    let mut values = ParamValues::default();

    if let Some(name) = preset {
        let preset = resolve_preset(name).with_context(|| {
            format!("loading preset '{name}' (see 'ringcrush presets list')")
        })?;
        preset
            .apply_to(&mut values)
            .with_context(|| format!("applying preset '{}'", preset.name))?;
        println!("Preset: {}", preset.name);
    }

    for &(kind, value) in overrides {
        values.set(kind, value);
    }
    Ok(values)
}

/// Print one line per control with its current value.
pub fn print_values(values: &ParamValues) {
    for (kind, value) in values.iter() {
        let desc = kind.descriptor();
        println!("  {:14} {}{}", kind.key(), value, desc.unit.suffix());
    }
}

/// Level in dBFS for display; silence reads as `-inf`.
pub fn format_db(linear: f32) -> String {
    if linear <= 0.0 {
        "-inf dB".to_string()
    } else {
        format!("{:.1} dB", linear_to_db(linear))
    }
}
