//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`batch`] - Encode or decode a delimited file, one record per line
//! - [`config`] - Configuration management (get, set, list, path, init)
//! - [`decode`] - Single code to coordinates
//! - [`encode`] - Single coordinate to code

pub mod batch;
pub mod common;
pub mod config;
pub mod decode;
pub mod encode;
