//! Integration tests for ringcrush-config.

use std::sync::Arc;

use ringcrush_config::{Preset, factory_presets, get_factory_preset, parse_assignment, paths};
use ringcrush_engine::{ParamKind, ParamValues, Processor, SharedParams, StreamSetup};
use tempfile::TempDir;

#[test]
fn test_save_and_load_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("mine.toml");

    let values = ParamValues::default()
        .with(ParamKind::Overdrive, 6.5)
        .with(ParamKind::CarrierFrequency, 220.0)
        .with(ParamKind::ReverbWet, 0.45);
    let original = Preset::from_values("Mine", &values).with_description("saved in a test");
    original.save(&path).unwrap();

    let loaded = Preset::load(&path).unwrap();
    assert_eq!(loaded, original);
    assert_eq!(loaded.to_values().unwrap(), values);

    let resolved = paths::resolve_preset_in("mine", &temp_dir.path().join("nested")).unwrap();
    assert_eq!(resolved, original);
}

#[test]
fn test_load_missing_file() {
    let err = Preset::load("/nonexistent/dir/preset.toml").unwrap_err();
    assert!(err.to_string().contains("failed to read file"));
}

#[test]
fn test_factory_presets_drive_processor() {
    for preset in factory_presets() {
        let values = preset.to_values().unwrap();
        let mut processor = Processor::new(Arc::new(SharedParams::from_values(&values)));
        processor
            .configure(StreamSetup::new(48000.0, 256, 2))
            .unwrap();

        let mut l: Vec<f32> = (0..256).map(|i| (i as f32 * 0.05).sin() * 0.5).collect();
        let mut r = l.clone();
        processor
            .process_block(&mut [l.as_mut_slice(), r.as_mut_slice()])
            .unwrap();
        assert!(
            l.iter().chain(&r).all(|x| x.is_finite()),
            "{} produced non-finite output",
            preset.name
        );
    }
}

#[test]
fn test_overrides_on_top_of_preset() {
    let mut values = get_factory_preset("lofi_crunch")
        .unwrap()
        .to_values()
        .unwrap();
    for assignment in ["reverb=0.5", "carrier=300"] {
        let (kind, value) = parse_assignment(assignment).unwrap();
        values.set(kind, value);
    }
    assert_eq!(values.get(ParamKind::Overdrive), 4.0);
    assert_eq!(values.get(ParamKind::ReverbWet), 0.5);
    assert_eq!(values.get(ParamKind::CarrierFrequency), 300.0);
}
