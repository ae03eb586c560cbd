//! In-memory logger for tests.

use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;
use std::sync::Mutex;

/// A logger that records every message with its level.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<(LogLevel, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded messages, oldest first.
    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.lock().clone()
    }

    /// Messages recorded at exactly `level`.
    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(LogLevel, String)>> {
        // A poisoned log is still readable
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        self.lock().push((level, args.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_messages_in_order() {
        let logger = MemoryLogger::new();
        crate::log_info!(logger, "first {}", 1);
        crate::log_debug!(logger, "second");

        assert_eq!(
            logger.entries(),
            vec![
                (LogLevel::Info, "first 1".to_string()),
                (LogLevel::Debug, "second".to_string()),
            ]
        );
    }

    #[test]
    fn test_messages_at_filters_by_level() {
        let logger = MemoryLogger::new();
        logger.warn(format_args!("a"));
        logger.info(format_args!("b"));
        logger.warn(format_args!("c"));

        assert_eq!(logger.messages_at(LogLevel::Warn), vec!["a", "c"]);
        assert!(logger.messages_at(LogLevel::Error).is_empty());
    }
}
