//! INI parsing: `Ini` → `ConfigFile`.
//!
//! The single place where INI key names map to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [output] section
    if let Some(section) = ini.section(Some("output")) {
        if let Some(v) = section.get("hyphenated") {
            config.output.hyphenated =
                parse_bool(v).ok_or_else(|| invalid("output", "hyphenated", v, BOOL_REASON))?;
        }
    }

    // [batch] section
    if let Some(section) = ini.section(Some("batch")) {
        if let Some(v) = section.get("threads") {
            config.batch.threads = v.trim().parse().map_err(|_| {
                invalid("batch", "threads", v, "must be a non-negative integer")
            })?;
        }
        if let Some(v) = section.get("delimiter") {
            config.batch.delimiter = parse_delimiter(v)
                .ok_or_else(|| invalid("batch", "delimiter", v, DELIMITER_REASON))?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

pub(super) const BOOL_REASON: &str = "must be true/false, yes/no, 1/0, or on/off";

pub(super) const DELIMITER_REASON: &str =
    "must be one of: comma, tab, pipe, semicolon, space (or ',', '|', ';')";

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse a boolean setting.
pub(super) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Some(true),
        "false" | "no" | "0" | "off" => Some(false),
        _ => None,
    }
}

/// Parse a field delimiter by name or literal character.
///
/// Whitespace delimiters only have names, since INI values are trimmed.
pub fn parse_delimiter(value: &str) -> Option<char> {
    match value.trim().to_lowercase().as_str() {
        "comma" | "," => Some(','),
        "tab" => Some('\t'),
        "pipe" | "|" => Some('|'),
        "semicolon" | ";" => Some(';'),
        "space" => Some(' '),
        _ => None,
    }
}

/// Expand a leading `~/` to the home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
