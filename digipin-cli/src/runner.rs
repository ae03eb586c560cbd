//! CLI runner for common setup.
//!
//! Loads configuration and starts logging once per invocation.

use crate::error::CliError;
use tracing::info;
use digipin::config::ConfigFile;
use digipin::logging::{default_log_file, init_logging, LoggingGuard};

/// Runner that owns the logging session and loaded configuration.
pub struct CliRunner {
    /// Keeps logging active while the runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    config: ConfigFile,
}

impl CliRunner {
    /// Load config and initialize logging.
    ///
    /// Log lines go to the configured file; in debug mode they are also
    /// echoed to stderr at debug level. Stdout is left for command output.
    pub fn new(debug_mode: bool) -> Result<Self, CliError> {
        let config = ConfigFile::load()?;

        let log_path = &config.logging.file;
        let log_dir = log_path
            .parent()
            .map(|p| p.to_string_lossy().to_string())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| ".".to_string());
        let log_file = log_path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| default_log_file().to_string());

        let logging_guard = init_logging(&log_dir, &log_file, debug_mode, debug_mode)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("DIGIPIN v{}", digipin::VERSION);
        info!("DIGIPIN CLI: {} command", command);
    }
}
