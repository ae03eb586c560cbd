//! Logging abstraction for library components.
//!
//! The codec itself never logs. Components built on it (the batch encoder,
//! for instance) report through the [`Logger`] trait rather than calling
//! `tracing` directly, so callers decide where messages go:
//!
//! - [`TracingLogger`] forwards to the `tracing` crate (CLI, services)
//! - [`NoOpLogger`] drops everything (benchmarks, quiet batch runs)
//! - [`MemoryLogger`] keeps messages in memory (tests)
//!
//! ```
//! use digipin::log::{Logger, NoOpLogger};
//! use digipin::log_info;
//! use std::sync::Arc;
//!
//! let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
//! log_info!(logger, "encoded {} records", 42);
//! ```

mod memory;
mod noop;
mod tracing_adapter;
mod r#trait;

pub use memory::MemoryLogger;
pub use noop::NoOpLogger;
pub use r#trait::{LogLevel, Logger};
pub use tracing_adapter::TracingLogger;
