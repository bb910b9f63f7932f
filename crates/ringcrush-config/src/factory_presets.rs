//! Factory presets bundled with ringcrush.
//!
//! These are embedded at compile time and always available, whether or not
//! a user preset directory exists. Each one is a small TOML document in the
//! same format users save.

use crate::Preset;

/// Identifiers of the factory presets, in listing order.
pub static FACTORY_PRESET_NAMES: &[&str] = &[
    "init",
    "lofi_crunch",
    "robot_voice",
    "metal_ring",
    "ambient_wash",
    "broken_radio",
];

static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("init", INIT_PRESET),
    ("lofi_crunch", LOFI_CRUNCH_PRESET),
    ("robot_voice", ROBOT_VOICE_PRESET),
    ("metal_ring", METAL_RING_PRESET),
    ("ambient_wash", AMBIENT_WASH_PRESET),
    ("broken_radio", BROKEN_RADIO_PRESET),
];

/// Every control at its default.
const INIT_PRESET: &str = r#"
name = "Init"
description = "All controls at their defaults"

[params]
gain = 0.5
overdrive = 0.1
targetSR = 0.6
carrier = 1000.0
ringWave = 0.5
ringModAmount = 0.0
reverb = 0.0
"#;

const LOFI_CRUNCH_PRESET: &str = r#"
name = "Lo-Fi Crunch"
description = "Hot saturation into a heavy sample-rate drop"

[params]
gain = 0.45
overdrive = 4.0
targetSR = 0.12
ringModAmount = 0.0
reverb = 0.1
"#;

const ROBOT_VOICE_PRESET: &str = r#"
name = "Robot Voice"
description = "Low saw-leaning carrier, fully modulated"

[params]
gain = 0.55
overdrive = 1.5
targetSR = 0.5
carrier = 90.0
ringWave = 0.8
ringModAmount = 1.0
reverb = 0.0
"#;

const METAL_RING_PRESET: &str = r#"
name = "Metal Ring"
description = "Inharmonic sine ring modulation with a short room"

[params]
gain = 0.5
overdrive = 2.0
targetSR = 0.6
carrier = 1370.0
ringWave = 0.0
ringModAmount = 0.85
reverb = 0.25
"#;

const AMBIENT_WASH_PRESET: &str = r#"
name = "Ambient Wash"
description = "Gentle drive, slow carrier and a mostly wet room"

[params]
gain = 0.4
overdrive = 0.8
targetSR = 0.6
carrier = 35.0
ringWave = 0.3
ringModAmount = 0.4
reverb = 0.75
"#;

const BROKEN_RADIO_PRESET: &str = r#"
name = "Broken Radio"
description = "Everything at once: crushed, driven and buzzing"

[params]
gain = 0.35
overdrive = 8.0
targetSR = 0.05
carrier = 600.0
ringWave = 1.0
ringModAmount = 0.6
reverb = 0.2
"#;

/// Get all factory presets.
///
/// # Example
///
/// ```rust
/// use ringcrush_config::factory_presets;
///
/// for preset in factory_presets() {
///     println!("  - {}: {}", preset.name, preset.description.as_deref().unwrap_or(""));
/// }
/// ```
pub fn factory_presets() -> Vec<Preset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| Preset::from_toml(toml).ok())
        .collect()
}

/// Get a factory preset by identifier or display name (case-insensitive).
///
/// ```rust
/// use ringcrush_config::get_factory_preset;
///
/// assert!(get_factory_preset("robot_voice").is_some());
/// assert!(get_factory_preset("Robot Voice").is_some());
/// assert!(get_factory_preset("nope").is_none());
/// ```
pub fn get_factory_preset(name: &str) -> Option<Preset> {
    if let Some((_, toml)) = FACTORY_PRESETS_TOML
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(name))
    {
        return Preset::from_toml(toml).ok();
    }

    factory_presets()
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Identifiers of all factory presets.
pub fn factory_preset_names() -> Vec<&'static str> {
    FACTORY_PRESETS_TOML.iter().map(|(name, _)| *name).collect()
}

/// Whether `name` names a factory preset (case-insensitive).
pub fn is_factory_preset(name: &str) -> bool {
    get_factory_preset(name).is_some()
}
