//! CLI error handling with user-friendly messages.
//!
//! Centralizes error reporting for the CLI: consistent formatting, a hint
//! where one helps, and exit code 1.

use std::fmt;
use std::process;

use digipin::batch::BatchError;
use digipin::codec::{CodecError, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use digipin::config::{ConfigFileError, ConfigKeyError};

/// CLI-specific errors.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Coordinate or code rejected by the codec
    Codec(CodecError),
    /// Batch run could not start
    Batch(BatchError),
    /// Failed to read input
    Read { path: String, error: std::io::Error },
    /// Failed to write output
    Write { path: String, error: std::io::Error },
}

impl CliError {
    /// Print the error (plus a hint where useful) and exit with status 1.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Codec(CodecError::Range(_)) => {
                eprintln!();
                eprintln!(
                    "DIGIPIN covers latitudes {} to {} and longitudes {} to {}.",
                    MIN_LAT, MAX_LAT, MIN_LON, MAX_LON
                );
            }
            CliError::Codec(CodecError::Format(_)) => {
                eprintln!();
                eprintln!("A DIGIPIN has 10 symbols from F C 9 8 J 3 2 7 K 4 5 6 L M P T,");
                eprintln!("optionally grouped as XXX-XXX-XXXX.");
            }
            CliError::Config(_) => {
                eprintln!();
                eprintln!("Run 'digipin config list' to see available settings.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Codec(e) => write!(f, "{}", e),
            CliError::Batch(e) => write!(f, "Batch failed: {}", e),
            CliError::Read { path, error } => write!(f, "Failed to read '{}': {}", path, error),
            CliError::Write { path, error } => write!(f, "Failed to write '{}': {}", path, error),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Codec(e) => Some(e),
            CliError::Batch(e) => Some(e),
            CliError::Read { error, .. } => Some(error),
            CliError::Write { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<CodecError> for CliError {
    fn from(e: CodecError) -> Self {
        CliError::Codec(e)
    }
}

impl From<BatchError> for CliError {
    fn from(e: BatchError) -> Self {
        CliError::Batch(e)
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<ConfigKeyError> for CliError {
    fn from(e: ConfigKeyError) -> Self {
        CliError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digipin::codec::{decode, encode};

    #[test]
    fn test_codec_errors_display_unwrapped() {
        let err: CliError = CodecError::from(encode(40.0, 81.5).unwrap_err()).into();
        assert_eq!(
            err.to_string(),
            "latitude 40 is outside the coverage region (2.5 to 38.5)"
        );
    }

    #[test]
    fn test_source_is_codec_error() {
        use std::error::Error;

        let err: CliError = CodecError::from(decode("123").unwrap_err()).into();
        assert!(err.source().is_some());
        assert!(CliError::Config("x".to_string()).source().is_none());
    }

    #[test]
    fn test_io_error_display() {
        let err = CliError::Read {
            path: "points.csv".to_string(),
            error: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Failed to read 'points.csv': not found");
    }
}
