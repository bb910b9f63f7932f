//! Preset file format and operations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use ringcrush_core::ParameterInfo;
use ringcrush_engine::{ParamKind, ParamValues};

use crate::error::ConfigError;

/// A named set of ringcrush parameter values.
///
/// Only the keys present in `params` are applied; missing keys keep whatever
/// value the target already holds (the defaults, for [`Preset::to_values`]).
///
/// # TOML Format
///
/// ```toml
/// name = "Robot Voice"
/// description = "Square-ish carrier, fully modulated"
///
/// [params]
/// carrier = 120.0
/// ringModAmount = 1.0
/// ringWave = 0.8
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Persisted parameter key to value.
    #[serde(default)]
    pub params: BTreeMap<String, f64>,
}

impl Preset {
    /// Create a new preset with no parameter values.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            params: BTreeMap::new(),
        }
    }

    /// Create a preset holding every value of `values`.
    pub fn from_values(name: impl Into<String>, values: &ParamValues) -> Self {
        let mut preset = Self::new(name);
        for (kind, value) in values.iter() {
            preset.set(kind, value);
        }
        preset
    }

    /// Create a preset with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder-style [`set`](Self::set).
    pub fn with_param(mut self, kind: ParamKind, value: f32) -> Self {
        self.set(kind, value);
        self
    }

    /// Store one value under its persisted key. Not range-checked.
    pub fn set(&mut self, kind: ParamKind, value: f32) {
        self.params.insert(kind.key().to_string(), persisted(value));
    }

    /// Stored value for one control, if present.
    pub fn get(&self, kind: ParamKind) -> Option<f32> {
        self.params.get(kind.key()).map(|&v| v as f32)
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the preset to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every stored key and value.
    ///
    /// Fails on the first key that is not a persisted parameter key, or the
    /// first value that is not finite or lies outside its range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, &value) in &self.params {
            let kind = ParamKind::from_key(key)
                .ok_or_else(|| ConfigError::UnknownParameter(key.clone()))?;
            check_range(kind, value as f32)?;
        }
        Ok(())
    }

    /// Validate, then write the stored values into `values`.
    ///
    /// On error `values` is left unchanged.
    pub fn apply_to(&self, values: &mut ParamValues) -> Result<(), ConfigError> {
        self.validate()?;
        for kind in ParamKind::ALL {
            if let Some(v) = self.get(kind) {
                values.set(kind, v);
            }
        }
        Ok(())
    }

    /// The defaults with this preset applied.
    pub fn to_values(&self) -> Result<ParamValues, ConfigError> {
        let mut values = ParamValues::default();
        self.apply_to(&mut values)?;
        Ok(values)
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

/// Parse a `key=value` parameter assignment.
///
/// The key is matched against persisted keys first, then case-insensitively
/// against display and short names, so `carrier=440`, `Carrier=440` and
/// `"carrier frequency=440"` are equivalent. The value must lie in range.
///
/// ```rust
/// use ringcrush_config::parse_assignment;
/// use ringcrush_engine::ParamKind;
///
/// let (kind, value) = parse_assignment("ringModAmount=0.5").unwrap();
/// assert_eq!(kind, ParamKind::RingModAmount);
/// assert_eq!(value, 0.5);
///
/// assert!(parse_assignment("gain=2").is_err());
/// ```
pub fn parse_assignment(assignment: &str) -> Result<(ParamKind, f32), ConfigError> {
    let (key, value) = assignment
        .split_once('=')
        .ok_or_else(|| ConfigError::InvalidAssignment(assignment.to_string()))?;
    let key = key.trim();

    let kind = ParamKind::from_key(key)
        .or_else(|| {
            ParamValues::default()
                .find_param_by_name(key)
                .and_then(ParamKind::from_index)
        })
        .ok_or_else(|| ConfigError::UnknownParameter(key.to_string()))?;

    let value: f32 = value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidAssignment(assignment.to_string()))?;
    check_range(kind, value)?;
    Ok((kind, value))
}

fn check_range(kind: ParamKind, value: f32) -> Result<(), ConfigError> {
    let desc = kind.descriptor();
    if value.is_finite() && desc.contains(value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            key: kind.key().to_string(),
            value,
            min: desc.min,
            max: desc.max,
        })
    }
}

/// Widen through the shortest decimal form so `0.1_f32` saves as `0.1`.
fn persisted(value: f32) -> f64 {
    value.to_string().parse().unwrap_or(f64::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_new() {
        let preset = Preset::new("Test Preset");
        assert_eq!(preset.name, "Test Preset");
        assert!(preset.description.is_none());
        assert!(preset.params.is_empty());
        assert_eq!(Preset::default().name, "Untitled");
    }

    #[test]
    fn test_preset_from_toml() {
        let toml = r#"
name = "Test"
description = "A test preset"

[params]
overdrive = 4.5
targetSR = 0.2
reverb = 0.3
"#;

        let preset = Preset::from_toml(toml).unwrap();
        assert_eq!(preset.name, "Test");
        assert_eq!(preset.description.as_deref(), Some("A test preset"));
        assert_eq!(preset.get(ParamKind::Overdrive), Some(4.5));
        assert_eq!(preset.get(ParamKind::Gain), None);

        let values = preset.to_values().unwrap();
        assert_eq!(values.get(ParamKind::Overdrive), 4.5);
        assert_eq!(values.get(ParamKind::TargetSampleRate), 0.2);
        assert_eq!(values.get(ParamKind::Gain), 0.5);
    }

    #[test]
    fn test_minimal_toml() {
        let preset = Preset::from_toml("name = \"Minimal\"").unwrap();
        assert!(preset.params.is_empty());
        assert_eq!(preset.to_values().unwrap(), ParamValues::default());
    }

    #[test]
    fn test_to_toml_uses_short_decimals() {
        let preset = Preset::new("Short")
            .with_description("Test description")
            .with_param(ParamKind::Overdrive, 0.1);
        let toml = preset.to_toml().unwrap();
        assert!(toml.contains("name = \"Short\""));
        assert!(toml.contains("description = \"Test description\""));
        assert!(toml.contains("[params]"));
        assert!(toml.contains("overdrive = 0.1\n"), "got: {toml}");
    }

    #[test]
    fn test_from_values_roundtrip() {
        let values = ParamValues::default()
            .with(ParamKind::CarrierFrequency, 333.3)
            .with(ParamKind::RingWave, 0.1)
            .with(ParamKind::ReverbWet, 0.7);
        let preset = Preset::from_values("All", &values);
        assert_eq!(preset.params.len(), ParamKind::COUNT);

        let parsed = Preset::from_toml(&preset.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, preset);
        assert_eq!(parsed.to_values().unwrap(), values);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let preset = Preset::from_toml("name = \"x\"\n[params]\ndrive = 1.0\n").unwrap();
        let err = preset.validate().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownParameter(ref k) if k == "drive"));
    }

    #[test]
    fn test_out_of_range_rejected_and_target_untouched() {
        let preset = Preset::new("bad")
            .with_param(ParamKind::Gain, 0.3)
            .with_param(ParamKind::TargetSampleRate, 0.9);
        let mut values = ParamValues::default();
        let err = preset.apply_to(&mut values).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { ref key, .. } if key == "targetSR"));
        assert_eq!(values, ParamValues::default());
    }

    #[test]
    fn test_nan_rejected() {
        let preset = Preset::from_toml("name = \"x\"\n[params]\ngain = nan\n").unwrap();
        assert!(matches!(
            preset.validate(),
            Err(ConfigError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_parse_assignment_forms() {
        assert_eq!(
            parse_assignment("carrier=440").unwrap(),
            (ParamKind::CarrierFrequency, 440.0)
        );
        assert_eq!(
            parse_assignment(" Carrier = 440 ").unwrap(),
            (ParamKind::CarrierFrequency, 440.0)
        );
        assert_eq!(
            parse_assignment("ring mod amount=1").unwrap(),
            (ParamKind::RingModAmount, 1.0)
        );
        assert!(matches!(
            parse_assignment("carrier"),
            Err(ConfigError::InvalidAssignment(_))
        ));
        assert!(matches!(
            parse_assignment("carrier=loud"),
            Err(ConfigError::InvalidAssignment(_))
        ));
        assert!(matches!(
            parse_assignment("bogus=1"),
            Err(ConfigError::UnknownParameter(_))
        ));
        assert!(matches!(
            parse_assignment("carrier=5"),
            Err(ConfigError::OutOfRange { .. })
        ));
    }
}
