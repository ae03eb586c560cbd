//! DIGIPIN CLI - Command-line interface
//!
//! Encodes coordinates to DIGIPIN codes and back, one at a time or over a
//! delimited file.

mod commands;
mod error;
mod runner;

use clap::{Parser, Subcommand};

use commands::batch::BatchArgs;
use commands::config::ConfigCommands;
use commands::decode::DecodeArgs;
use commands::encode::EncodeArgs;

#[derive(Parser)]
#[command(name = "digipin")]
#[command(version = digipin::VERSION)]
#[command(about = "Encode and decode DIGIPIN grid codes", long_about = None)]
struct Cli {
    /// Enable debug logging (also echoed to stderr)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a latitude/longitude into a DIGIPIN
    Encode(EncodeArgs),

    /// Decode a DIGIPIN into the center of its cell
    Decode(DecodeArgs),

    /// Encode or decode every line of a delimited file
    Batch(BatchArgs),

    /// View or change configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encode(args) => commands::encode::run(args, cli.debug),
        Commands::Decode(args) => commands::decode::run(args, cli.debug),
        Commands::Batch(args) => commands::batch::run(args, cli.debug),
        Commands::Config(command) => commands::config::run(command),
    };

    if let Err(e) = result {
        e.exit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_negative_coordinates_parse() {
        let cli = Cli::try_parse_from(["digipin", "encode", "--lat", "-5", "--lon", "80"]).unwrap();
        match cli.command {
            Commands::Encode(args) => assert_eq!(args.lat, -5.0),
            _ => panic!("expected encode"),
        }
    }

    #[test]
    fn test_debug_flag_is_global() {
        let cli = Cli::try_parse_from(["digipin", "decode", "2LL-LLL-LLLL", "--debug"]).unwrap();
        assert!(cli.debug);
    }
}
