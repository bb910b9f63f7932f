//! Error types for preset operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading, validating or writing presets.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Preset not found by path, user directory or factory name
    #[error("preset not found: {0}")]
    PresetNotFound(String),

    /// Parameter key that is not one of the seven controls
    #[error("unknown parameter: {0}")]
    UnknownParameter(String),

    /// Value outside the parameter's range, or not a number
    #[error("value {value} for '{key}' is out of range [{min}, {max}]")]
    OutOfRange {
        /// Persisted key of the parameter.
        key: String,
        /// Rejected value.
        value: f32,
        /// Lowest accepted value.
        min: f32,
        /// Highest accepted value.
        max: f32,
    },

    /// Malformed `key=value` assignment
    #[error("invalid parameter assignment '{0}' (expected key=value)")]
    InvalidAssignment(String),

    /// Failed to create directory
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Path of the directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Create a create directory error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::CreateDir {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn mock_io_err() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::NotFound, "mock")
    }

    #[test]
    fn read_file_factory_produces_correct_variant() {
        let err = ConfigError::read_file("/some/path", mock_io_err());
        assert!(
            matches!(err, ConfigError::ReadFile { ref path, .. } if path == std::path::Path::new("/some/path"))
        );
        assert!(err.to_string().contains("failed to read file"));
        assert!(err.source().is_some());
    }

    #[test]
    fn write_and_create_dir_display() {
        let err = ConfigError::write_file("/a/b.toml", mock_io_err());
        assert!(err.to_string().contains("/a/b.toml"));
        let err = ConfigError::create_dir("/a/b", mock_io_err());
        assert!(err.to_string().contains("failed to create directory"));
        assert!(err.source().is_some());
    }

    #[test]
    fn out_of_range_display() {
        let err = ConfigError::OutOfRange {
            key: "gain".to_string(),
            value: 2.0,
            min: 0.0,
            max: 0.7,
        };
        assert_eq!(err.to_string(), "value 2 for 'gain' is out of range [0, 0.7]");
        assert!(err.source().is_none());
    }

    #[test]
    fn simple_variants_display() {
        assert_eq!(
            ConfigError::PresetNotFound("x".to_string()).to_string(),
            "preset not found: x"
        );
        assert_eq!(
            ConfigError::UnknownParameter("drive".to_string()).to_string(),
            "unknown parameter: drive"
        );
    }
}
