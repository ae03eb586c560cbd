//! Decode command: one DIGIPIN to coordinates.

use clap::Args;
use digipin::codec::{self, CodecError};
use tracing::debug;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the decode command.
#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// DIGIPIN, with or without hyphens (e.g., 39J-49L-L8T4)
    pub code: String,

    /// Also print the bounding box of the code's cell
    #[arg(long)]
    pub bounds: bool,
}

/// Run the decode command.
pub fn run(args: DecodeArgs, debug: bool) -> Result<(), CliError> {
    let runner = CliRunner::new(debug)?;
    runner.log_startup("decode");

    let bounds = codec::decode_bounds(&args.code).map_err(CodecError::from)?;
    let centroid = bounds.center();
    debug!(code = %args.code, %centroid, "Decoded code");

    println!("{}", centroid);

    if args.bounds {
        println!(
            "bounds: {:.6}, {:.6} to {:.6}, {:.6}",
            bounds.min_lat, bounds.min_lon, bounds.max_lat, bounds.max_lon
        );
    }

    Ok(())
}
