//! Configuration system

use std::path::Path;

pub use serde::{Serialize, Deserialize};

/// Configuration trait
///
/// The file format is chosen by extension: `.toml` or `.ron`.
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;

        match format {
            Format::Toml => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Format::Ron => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Load configuration from file, or the defaults if the file doesn't exist
    ///
    /// A file that exists but fails to parse is still an error.
    fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            log::info!("Loading configuration from {}", path.display());
            Self::load_from_file(path)
        } else {
            log::info!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match Format::from_path(path)? {
            Format::Toml => toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?,
            Format::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

#[derive(Debug, Clone, Copy)]
enum Format {
    Toml,
    Ron,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Values parsed but are not usable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct Sample {
        lives: u32,
        title: String,
    }

    impl Default for Sample {
        fn default() -> Self {
            Self { lives: 3, title: "arcade".to_string() }
        }
    }

    impl Config for Sample {}

    fn temp_path(file: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("rust_engine_config_{}_{}", std::process::id(), file))
    }

    #[test]
    fn test_toml_and_ron_round_trip() {
        let sample = Sample { lives: 7, title: "custom".to_string() };

        for file in ["sample.toml", "sample.ron"] {
            let path = temp_path(file);
            sample.save_to_file(&path).unwrap();
            assert_eq!(Sample::load_from_file(&path).unwrap(), sample);
            std::fs::remove_file(path).ok();
        }
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let loaded = Sample::load_or_default(temp_path("absent.toml")).unwrap();
        assert_eq!(loaded, Sample::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = temp_path("partial.toml");
        std::fs::write(&path, "lives = 1\n").unwrap();
        let loaded = Sample::load_from_file(&path).unwrap();
        assert_eq!(loaded.lives, 1);
        assert_eq!(loaded.title, "arcade");
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_unsupported_extension() {
        assert!(matches!(
            Sample::load_from_file("settings.json"),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }
}
