//! Integration tests for the ringcrush binary.

use std::process::Command;

use ringcrush_io::{AudioBuffer, WavSpec, read_wav, write_wav};
use tempfile::TempDir;

fn ringcrush_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ringcrush"))
}

fn write_test_wav(dir: &TempDir, name: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let tone: Vec<f32> = (0..4410)
        .map(|i| (2.0 * std::f32::consts::PI * 440.0 * i as f32 / 44100.0).sin() * 0.5)
        .collect();
    let audio = AudioBuffer::from_channels(vec![tone.clone(), tone]);
    let spec = WavSpec {
        channels: 2,
        sample_rate: 44100,
        bits_per_sample: 16,
    };
    write_wav(&path, &audio, spec).unwrap();
    path
}

#[test]
fn cli_params_lists_every_key() {
    let output = ringcrush_bin().arg("params").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for key in [
        "gain",
        "overdrive",
        "targetSR",
        "carrier",
        "ringWave",
        "ringModAmount",
        "reverb",
    ] {
        assert!(stdout.contains(key), "missing '{key}' in:\n{stdout}");
    }
}

#[test]
fn cli_params_json_is_valid() {
    let output = ringcrush_bin().args(["params", "--json"]).output().unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 7);
    assert_eq!(entries[3]["key"], "carrier");
    assert_eq!(entries[3]["min"], 20.0);
    assert_eq!(entries[3]["scale"], "log");
    assert_eq!(entries[0]["id"], 100);
    assert_eq!(entries[6]["automatable"], true);
}

#[test]
fn cli_presets_list_shows_factory() {
    let output = ringcrush_bin().args(["presets", "list"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Factory Presets"));
    assert!(stdout.contains("robot_voice"));
    assert!(stdout.contains("Ambient Wash"));
}

#[test]
fn cli_presets_show_factory() {
    let output = ringcrush_bin()
        .args(["presets", "show", "metal_ring"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Metal Ring"));
    assert!(stdout.contains("1370 Hz"));
}

#[test]
fn cli_process_renders_file() {
    let dir = TempDir::new().unwrap();
    let input = write_test_wav(&dir, "in.wav");
    let output_path = dir.path().join("out.wav");

    let output = ringcrush_bin()
        .arg("process")
        .arg(&input)
        .arg(&output_path)
        .args(["--preset", "lofi_crunch", "--param", "reverb=0.4", "--bit-depth", "24"])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let (audio, spec) = read_wav(&output_path).unwrap();
    assert_eq!(spec.channels, 2);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.bits_per_sample, 24);
    assert_eq!(audio.num_frames(), 4410);
    assert!(audio.peak() > 0.0);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Lo-Fi Crunch"));
    assert!(stdout.contains("Output: RMS"));
}

#[test]
fn cli_process_rejects_out_of_range_param() {
    let dir = TempDir::new().unwrap();
    let input = write_test_wav(&dir, "in.wav");

    let output = ringcrush_bin()
        .arg("process")
        .arg(&input)
        .arg(dir.path().join("out.wav"))
        .args(["--param", "gain=5"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("out of range"), "stderr: {stderr}");
}

#[test]
fn cli_info_reports_metadata() {
    let dir = TempDir::new().unwrap();
    let input = write_test_wav(&dir, "in.wav");

    let output = ringcrush_bin()
        .arg("info")
        .arg(&input)
        .arg("--levels")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("44100 Hz, 16-bit int, 2 channel(s)"));
    assert!(stdout.contains("4410 frames"));
    assert!(stdout.contains("full chain"));
    assert!(stdout.contains("ch2: peak -6.0 dB"), "{stdout}");
}
