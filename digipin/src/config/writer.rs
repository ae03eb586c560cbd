//! INI serialization: `ConfigFile` → commented config.ini text.

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    format!(
        r#"[output]
; Print codes as XXX-XXX-XXXX (true) or as 10 bare symbols (false)
hyphenated = {}

[batch]
; Worker threads for the batch command (0 = one per CPU)
threads = {}
; Field separator: comma, tab, pipe, semicolon, or space
delimiter = {}

[logging]
; Log file, cleared at the start of every run
file = {}
"#,
        config.output.hyphenated,
        config.batch.threads,
        delimiter_name(config.batch.delimiter),
        config.logging.file.display(),
    )
}

/// Config-file spelling of a delimiter.
pub(super) fn delimiter_name(delimiter: char) -> String {
    match delimiter {
        ',' => "comma".to_string(),
        '\t' => "tab".to_string(),
        '|' => "pipe".to_string(),
        ';' => "semicolon".to_string(),
        ' ' => "space".to_string(),
        other => other.to_string(),
    }
}
