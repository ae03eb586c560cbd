//! Encode command: one coordinate to a DIGIPIN.

use clap::Args;
use digipin::codec::{self, CodecError};
use tracing::debug;

use super::common::{format_code, resolve_hyphenated};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the encode command.
#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// Latitude in decimal degrees (2.5 to 38.5)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude in decimal degrees (63.5 to 99.5)
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// Print the code without hyphens
    #[arg(long)]
    pub compact: bool,
}

/// Run the encode command.
pub fn run(args: EncodeArgs, debug: bool) -> Result<(), CliError> {
    let runner = CliRunner::new(debug)?;
    runner.log_startup("encode");

    let code = codec::encode(args.lat, args.lon).map_err(CodecError::from)?;
    debug!(lat = args.lat, lon = args.lon, code = %code, "Encoded coordinate");

    let hyphenated = resolve_hyphenated(args.compact, runner.config());
    println!("{}", format_code(&code, hyphenated));

    Ok(())
}
