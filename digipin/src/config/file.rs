//! Configuration file handling for ~/.digipin/config.ini.

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::settings::ConfigFile;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load configuration from the default path.
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    ///
    /// A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<(), ConfigFileError> {
        self.save_to(&config_file_path())
    }

    /// Save configuration to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        let content = super::writer::to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// Write a default config file if none exists; returns its path.
    pub fn ensure_exists() -> Result<PathBuf, ConfigFileError> {
        Self::ensure_exists_at(config_file_path())
    }

    fn ensure_exists_at(path: PathBuf) -> Result<PathBuf, ConfigFileError> {
        if !path.exists() {
            Self::default().save_to(&path)?;
        }
        Ok(path)
    }
}

/// Path to the config directory (~/.digipin).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".digipin")
}

/// Path to the config file (~/.digipin/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();

        assert!(config.output.hyphenated);
        assert_eq!(config.batch.threads, 0);
        assert_eq!(config.batch.delimiter, ',');
        assert!(config.logging.file.ends_with(".digipin/digipin.log"));
    }

    #[test]
    fn test_load_nonexistent_returns_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = ConfigFile::load_from(&temp_dir.path().join("missing.ini")).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_save_and_load_preserves_values() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("sub").join("config.ini");

        let mut config = ConfigFile::default();
        config.output.hyphenated = false;
        config.batch.threads = 6;
        config.batch.delimiter = '\t';
        config.logging.file = temp_dir.path().join("run.log");
        config.save_to(&path).unwrap();

        let loaded = ConfigFile::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_ensure_exists_writes_defaults_once() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("config.ini");

        ConfigFile::ensure_exists_at(path.clone()).unwrap();
        assert!(path.exists());

        std::fs::write(&path, "[batch]\nthreads = 3\n").unwrap();
        ConfigFile::ensure_exists_at(path.clone()).unwrap();
        assert_eq!(ConfigFile::load_from(&path).unwrap().batch.threads, 3);
    }

    #[test]
    fn test_invalid_value_error_message() {
        let err = ConfigFileError::InvalidValue {
            section: "batch".to_string(),
            key: "threads".to_string(),
            value: "many".to_string(),
            reason: "must be a non-negative integer".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration: batch.threads = 'many' - must be a non-negative integer"
        );
    }
}
