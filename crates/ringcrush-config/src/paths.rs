//! Platform-specific preset directories and preset resolution.
//!
//! User presets live in `<config dir>/ringcrush/presets/`:
//!
//! - Linux: `~/.config/ringcrush/presets/`
//! - macOS: `~/Library/Application Support/ringcrush/presets/`
//! - Windows: `%APPDATA%\ringcrush\presets\`
//!
//! # Example
//!
//! ```rust,no_run
//! use ringcrush_config::paths;
//!
//! println!("User presets: {:?}", paths::user_presets_dir());
//! let preset = paths::resolve_preset("robot_voice").unwrap();
//! assert_eq!(preset.name, "Robot Voice");
//! ```

use std::path::{Path, PathBuf};

use crate::{ConfigError, Preset, get_factory_preset};

/// Application name used for directory paths.
const APP_NAME: &str = "ringcrush";

/// Subdirectory name for presets.
const PRESETS_SUBDIR: &str = "presets";

/// Returns the user-specific presets directory.
///
/// Falls back to `./ringcrush/presets` if the config directory cannot be
/// determined.
pub fn user_presets_dir() -> PathBuf {
    user_config_dir().join(PRESETS_SUBDIR)
}

/// Returns the user-specific configuration directory.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Ensure the user presets directory exists and return it.
pub fn ensure_user_presets_dir() -> Result<PathBuf, ConfigError> {
    let dir = user_presets_dir();
    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| ConfigError::create_dir(&dir, e))?;
    }
    Ok(dir)
}

/// Find a preset file: an existing path first, then `<name>.toml` in the
/// user presets directory.
pub fn find_preset(name: &str) -> Option<PathBuf> {
    find_preset_in(name, &user_presets_dir())
}

/// [`find_preset`] against an explicit presets directory.
pub fn find_preset_in(name: &str, presets_dir: &Path) -> Option<PathBuf> {
    let path = PathBuf::from(name);
    if path.is_file() {
        return Some(path);
    }

    let filename = if name.ends_with(".toml") {
        name.to_string()
    } else {
        format!("{name}.toml")
    };
    let user_path = presets_dir.join(filename);
    user_path.is_file().then_some(user_path)
}

/// Load a preset by path, user preset name, or factory preset name, in
/// that order.
pub fn resolve_preset(name: &str) -> Result<Preset, ConfigError> {
    resolve_preset_in(name, &user_presets_dir())
}

/// [`resolve_preset`] against an explicit presets directory.
pub fn resolve_preset_in(name: &str, presets_dir: &Path) -> Result<Preset, ConfigError> {
    if let Some(path) = find_preset_in(name, presets_dir) {
        return Preset::load(path);
    }
    get_factory_preset(name).ok_or_else(|| ConfigError::PresetNotFound(name.to_string()))
}

/// List preset files in the user presets directory.
pub fn list_user_presets() -> Vec<PathBuf> {
    list_presets_in_dir(&user_presets_dir())
}

/// List `.toml` files in `dir`, sorted. Empty if the directory is missing.
pub fn list_presets_in_dir(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut presets: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    presets.sort();
    presets
}

/// Preset name from a file path (the file stem).
///
/// ```rust
/// use ringcrush_config::paths::preset_name_from_path;
/// use std::path::Path;
///
/// let name = preset_name_from_path(Path::new("/path/to/robot_voice.toml"));
/// assert_eq!(name, Some("robot_voice".to_string()));
/// ```
pub fn preset_name_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_user_presets_dir() {
        let dir = user_presets_dir();
        assert!(dir.ends_with("ringcrush/presets"));
    }

    #[test]
    fn test_find_preset_by_path() {
        let temp_dir = TempDir::new().unwrap();
        let preset_path = temp_dir.path().join("test.toml");
        fs::write(&preset_path, "name = \"test\"").unwrap();

        let found = find_preset_in(preset_path.to_str().unwrap(), Path::new("/nonexistent"));
        assert_eq!(found, Some(preset_path));
    }

    #[test]
    fn test_find_preset_by_name_adds_extension() {
        let temp_dir = TempDir::new().unwrap();
        let preset_path = temp_dir.path().join("mine.toml");
        fs::write(&preset_path, "name = \"Mine\"").unwrap();

        assert_eq!(find_preset_in("mine", temp_dir.path()), Some(preset_path.clone()));
        assert_eq!(find_preset_in("mine.toml", temp_dir.path()), Some(preset_path));
        assert_eq!(find_preset_in("other", temp_dir.path()), None);
    }

    #[test]
    fn test_resolve_order() {
        let temp_dir = TempDir::new().unwrap();
        // a user preset shadows the factory preset of the same name
        fs::write(
            temp_dir.path().join("robot_voice.toml"),
            "name = \"My Robot\"\n[params]\ncarrier = 50.0\n",
        )
        .unwrap();

        let user = resolve_preset_in("robot_voice", temp_dir.path()).unwrap();
        assert_eq!(user.name, "My Robot");

        let factory = resolve_preset_in("metal_ring", temp_dir.path()).unwrap();
        assert_eq!(factory.name, "Metal Ring");

        let err = resolve_preset_in("nonexistent_preset_12345", temp_dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::PresetNotFound(_)));
    }

    #[test]
    fn test_resolve_bad_file_reports_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("broken.toml"), "name = ").unwrap();
        let err = resolve_preset_in("broken", temp_dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_list_presets_in_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.toml"), "").unwrap();
        fs::write(temp_dir.path().join("a.toml"), "").unwrap();
        fs::write(temp_dir.path().join("not_a_preset.txt"), "").unwrap();

        let presets = list_presets_in_dir(temp_dir.path());
        let names: Vec<_> = presets
            .iter()
            .filter_map(|p| preset_name_from_path(p))
            .collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_list_presets_nonexistent_dir() {
        assert!(list_presets_in_dir(Path::new("/nonexistent/path/12345")).is_empty());
    }
}
