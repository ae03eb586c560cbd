//! Settings structs, one per `[section]` of config.ini.

use std::path::PathBuf;

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub output: OutputSettings,
    pub batch: BatchSettings,
    pub logging: LoggingSettings,
}

/// How codes are printed.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSettings {
    /// Print `XXX-XXX-XXXX` rather than the compact 10-symbol form
    pub hyphenated: bool,
}

/// Batch command settings.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSettings {
    /// Worker threads; 0 uses rayon's global pool
    pub threads: usize,
    /// Field separator for batch input and output
    pub delimiter: char,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
