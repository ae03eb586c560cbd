//! Configuration for the DIGIPIN tools.
//!
//! Settings live in `~/.digipin/config.ini`. A missing file means defaults;
//! the CLI lets flags override anything loaded here.
//!
//! - `settings`: one struct per `[section]`
//! - `defaults`: default values and `ConfigFile::default()`
//! - `parser` / `writer`: INI ↔ [`ConfigFile`]
//! - `keys`: typed `section.key` access for `config get/set`
//!
//! ```
//! use digipin::config::{ConfigFile, ConfigKey};
//!
//! let mut config = ConfigFile::default();
//! let key: ConfigKey = "batch.threads".parse().unwrap();
//! key.set(&mut config, "4").unwrap();
//! assert_eq!(config.batch.threads, 4);
//! ```

mod defaults;
mod file;
mod keys;
mod parser;
mod settings;
mod writer;

pub use defaults::{DEFAULT_BATCH_THREADS, DEFAULT_DELIMITER, DEFAULT_HYPHENATED};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use keys::{ConfigKey, ConfigKeyError};
pub use parser::parse_delimiter;
pub use settings::{BatchSettings, ConfigFile, LoggingSettings, OutputSettings};
