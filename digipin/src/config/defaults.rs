//! Default values and the `ConfigFile::default()` implementation.

use super::settings::*;
use crate::logging::default_log_file;

pub const DEFAULT_HYPHENATED: bool = true;

/// 0 means "let rayon decide".
pub const DEFAULT_BATCH_THREADS: usize = 0;

pub const DEFAULT_DELIMITER: char = ',';

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            output: OutputSettings {
                hyphenated: DEFAULT_HYPHENATED,
            },
            batch: BatchSettings {
                threads: DEFAULT_BATCH_THREADS,
                delimiter: DEFAULT_DELIMITER,
            },
            logging: LoggingSettings {
                file: super::file::config_directory().join(default_log_file()),
            },
        }
    }
}
