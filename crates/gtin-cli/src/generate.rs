//! # Generate Subcommand
//!
//! Appends the GS1 check digit to a 7, 11, 12 or 13 digit body. The body is
//! used verbatim: leading zeros are kept and whitespace is rejected.

use anyhow::Result;
use clap::Args;

use crate::{emit, Conversion, OutputFormat};

/// Arguments for the `gtin generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// GTIN body without its check digit.
    #[arg(value_name = "BODY")]
    pub body: String,
}

/// Execute the generate subcommand.
///
/// Returns exit code: 0 on success, 1 if the body is rejected.
pub fn run_generate(args: &GenerateArgs, output: OutputFormat) -> Result<u8> {
    let report = Conversion::run(&args.body, gtin_core::generate);
    tracing::debug!(success = report.error.is_none(), "generate finished");
    emit(&report, output)
}
