//! Common types and utilities shared across CLI commands.

use digipin::codec::Code;
use digipin::config::{parse_delimiter, ConfigFile};

use crate::error::CliError;

/// Render a code in the requested form.
pub fn format_code(code: &Code, hyphenated: bool) -> String {
    if hyphenated {
        code.to_string()
    } else {
        code.as_compact()
    }
}

/// Whether codes are printed with hyphens.
///
/// `--compact` always wins over `[output] hyphenated`.
pub fn resolve_hyphenated(compact: bool, config: &ConfigFile) -> bool {
    !compact && config.output.hyphenated
}

/// Worker count from the flag, falling back to `[batch] threads`.
pub fn resolve_threads(cli_threads: Option<usize>, config: &ConfigFile) -> usize {
    cli_threads.unwrap_or(config.batch.threads)
}

/// Field delimiter from the flag, falling back to `[batch] delimiter`.
pub fn resolve_delimiter(
    cli_delimiter: Option<&str>,
    config: &ConfigFile,
) -> Result<char, CliError> {
    match cli_delimiter {
        Some(value) => parse_delimiter(value).ok_or_else(|| {
            CliError::Config(format!(
                "Invalid delimiter '{}': use a single character or one of comma, tab, pipe, \
                 semicolon, space",
                value
            ))
        }),
        None => Ok(config.batch.delimiter),
    }
}
