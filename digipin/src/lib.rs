//! DIGIPIN - hierarchical grid codes for geographic coordinates
//!
//! Maps a latitude/longitude inside the fixed coverage region
//! (2.5°–38.5° N, 63.5°–99.5° E) to a 10-symbol code such as
//! `39J-49L-L8T4`, and back to the center of the code's cell.
//!
//! # Modules
//!
//! - [`codec`] - `encode` / `decode` and the code, grid and error types
//! - [`batch`] - parallel per-record encoding that never aborts on bad input
//! - [`config`] - `~/.digipin/config.ini` handling
//! - [`log`] / [`logging`] - logging abstraction and `tracing` setup
//!
//! ```
//! use digipin::codec::{decode, encode};
//!
//! let code = encode(28.622788, 77.213033)?;
//! assert_eq!(code.to_string(), "39J-49L-L8T4");
//! assert_eq!(decode(&code.to_string())?.to_string(), "28.622793, 77.213049");
//! # Ok::<(), digipin::codec::CodecError>(())
//! ```

pub mod batch;
pub mod codec;
pub mod config;
pub mod log;
pub mod logging;

pub use codec::{decode, encode, Centroid, Code, CodecError};

/// Version of the library and CLI, shared across the workspace.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_root_reexports() {
        let code: Code = encode(20.5, 81.5).unwrap();
        let centroid: Centroid = decode(&code.to_string()).unwrap();
        assert_eq!(centroid.to_string(), "20.500017, 81.500017");
    }
}
