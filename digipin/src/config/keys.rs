//! Typed access to configuration values by `section.key` name.
//!
//! Values are validated before they are written into a [`ConfigFile`].

use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use super::parser::{expand_tilde, parse_bool, parse_delimiter, BOOL_REASON, DELIMITER_REASON};
use super::settings::ConfigFile;
use super::writer::delimiter_name;

/// Errors from getting or setting configuration values.
#[derive(Debug, Error)]
pub enum ConfigKeyError {
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },
}

/// Supported configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    OutputHyphenated,
    BatchThreads,
    BatchDelimiter,
    LoggingFile,
}

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        ConfigKey::all()
            .iter()
            .copied()
            .find(|key| key.name() == lower)
            .ok_or_else(|| ConfigKeyError::UnknownKey(s.to_string()))
    }
}

impl ConfigKey {
    /// Canonical key name (e.g., "batch.threads").
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::OutputHyphenated => "output.hyphenated",
            ConfigKey::BatchThreads => "batch.threads",
            ConfigKey::BatchDelimiter => "batch.delimiter",
            ConfigKey::LoggingFile => "logging.file",
        }
    }

    /// Section name (e.g., "batch").
    pub fn section(&self) -> &'static str {
        self.name().split('.').next().unwrap_or("")
    }

    /// Key name within the section (e.g., "threads").
    pub fn key_name(&self) -> &'static str {
        self.name().split('.').nth(1).unwrap_or(self.name())
    }

    /// Current value as it would appear in config.ini.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::OutputHyphenated => config.output.hyphenated.to_string(),
            ConfigKey::BatchThreads => config.batch.threads.to_string(),
            ConfigKey::BatchDelimiter => delimiter_name(config.batch.delimiter),
            ConfigKey::LoggingFile => path_to_display(&config.logging.file),
        }
    }

    /// Validate and store a value.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        let invalid = |reason: &str| ConfigKeyError::ValidationFailed {
            key: self.name().to_string(),
            reason: reason.to_string(),
        };

        match self {
            ConfigKey::OutputHyphenated => {
                config.output.hyphenated = parse_bool(value).ok_or_else(|| invalid(BOOL_REASON))?;
            }
            ConfigKey::BatchThreads => {
                config.batch.threads = value
                    .trim()
                    .parse()
                    .map_err(|_| invalid("must be a non-negative integer"))?;
            }
            ConfigKey::BatchDelimiter => {
                config.batch.delimiter =
                    parse_delimiter(value).ok_or_else(|| invalid(DELIMITER_REASON))?;
            }
            ConfigKey::LoggingFile => {
                if value.trim().is_empty() {
                    return Err(invalid("must be a valid path"));
                }
                config.logging.file = expand_tilde(value.trim());
            }
        }
        Ok(())
    }

    /// Check a value without storing it.
    pub fn validate(&self, value: &str) -> Result<(), ConfigKeyError> {
        self.set(&mut ConfigFile::default(), value)
    }

    /// All supported keys, in config file order.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::OutputHyphenated,
            ConfigKey::BatchThreads,
            ConfigKey::BatchDelimiter,
            ConfigKey::LoggingFile,
        ]
    }
}

/// Display a path, collapsing the home directory to `~`.
fn path_to_display(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_key_parsing() {
        assert_eq!(
            "output.hyphenated".parse::<ConfigKey>().unwrap(),
            ConfigKey::OutputHyphenated
        );
        assert_eq!(
            "BATCH.Threads".parse::<ConfigKey>().unwrap(),
            ConfigKey::BatchThreads
        );
        assert!(matches!(
            "output.colour".parse::<ConfigKey>(),
            Err(ConfigKeyError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_key_name_parts() {
        let key = ConfigKey::BatchDelimiter;
        assert_eq!(key.section(), "batch");
        assert_eq!(key.key_name(), "delimiter");
    }

    #[test]
    fn test_every_key_round_trips_its_name() {
        for key in ConfigKey::all() {
            assert_eq!(key.name().parse::<ConfigKey>().unwrap(), *key);
        }
    }

    #[test]
    fn test_get_default_values() {
        let config = ConfigFile::default();
        assert_eq!(ConfigKey::OutputHyphenated.get(&config), "true");
        assert_eq!(ConfigKey::BatchThreads.get(&config), "0");
        assert_eq!(ConfigKey::BatchDelimiter.get(&config), "comma");
        assert!(ConfigKey::LoggingFile.get(&config).ends_with("digipin.log"));
    }

    #[test]
    fn test_set_values() {
        let mut config = ConfigFile::default();
        ConfigKey::OutputHyphenated.set(&mut config, "off").unwrap();
        ConfigKey::BatchThreads.set(&mut config, "12").unwrap();
        ConfigKey::BatchDelimiter.set(&mut config, "pipe").unwrap();
        ConfigKey::LoggingFile.set(&mut config, "/tmp/x.log").unwrap();

        assert!(!config.output.hyphenated);
        assert_eq!(config.batch.threads, 12);
        assert_eq!(config.batch.delimiter, '|');
        assert_eq!(ConfigKey::LoggingFile.get(&config), "/tmp/x.log");
    }

    #[test]
    fn test_set_rejects_invalid_values_without_change() {
        let mut config = ConfigFile::default();

        let err = ConfigKey::BatchThreads.set(&mut config, "lots").unwrap_err();
        assert!(err.to_string().starts_with("Invalid value for batch.threads"));
        assert!(ConfigKey::OutputHyphenated.set(&mut config, "perhaps").is_err());
        assert!(ConfigKey::BatchDelimiter.set(&mut config, "::").is_err());
        assert!(ConfigKey::LoggingFile.set(&mut config, "  ").is_err());

        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_validate_does_not_need_a_config() {
        assert!(ConfigKey::BatchThreads.validate("3").is_ok());
        assert!(ConfigKey::BatchThreads.validate("-3").is_err());
    }
}
