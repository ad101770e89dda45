//! # gtin CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gtin_cli::generate::{run_generate, GenerateArgs};
use gtin_cli::inspect::{run_inspect, InspectArgs};
use gtin_cli::normalize::{run_normalize, NormalizeArgs};
use gtin_cli::prefix::{run_prefix, run_prefixes, PrefixArgs, PrefixesArgs};
use gtin_cli::validate::{run_validate, ValidateArgs};
use gtin_cli::{OutputFormat, EXIT_ERROR};

/// Command-line tool for GS1 GTIN codes.
#[derive(Parser, Debug)]
#[command(name = "gtin", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    /// Ignored when RUST_LOG is set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Report format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate one or more GTIN-8/12/13/14 codes.
    Validate(ValidateArgs),

    /// Append the GS1 check digit to a code body.
    Generate(GenerateArgs),

    /// Convert a GTIN-13 into GTIN-14.
    Normalize(NormalizeArgs),

    /// Resolve the GS1 member organization for a code's prefix.
    Prefix(PrefixArgs),

    /// List the GS1 prefix table.
    Prefixes(PrefixesArgs),

    /// Show format, organization, and GTIN-14 form of a code.
    Inspect(InspectArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "gtin CLI starting");

    let result = match &cli.command {
        Commands::Validate(args) => run_validate(args, cli.output),
        Commands::Generate(args) => run_generate(args, cli.output),
        Commands::Normalize(args) => run_normalize(args, cli.output),
        Commands::Prefix(args) => run_prefix(args, cli.output),
        Commands::Prefixes(args) => run_prefixes(args, cli.output),
        Commands::Inspect(args) => run_inspect(args, cli.output),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
