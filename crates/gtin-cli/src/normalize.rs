//! # Normalize Subcommand
//!
//! Lifts a GTIN-13 to GTIN-14 with indicator digit `1`.

use anyhow::Result;
use clap::Args;

use crate::{emit, Conversion, OutputFormat};

/// Arguments for the `gtin normalize` subcommand.
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// A valid GTIN-13.
    #[arg(value_name = "CODE")]
    pub code: String,
}

/// Execute the normalize subcommand.
///
/// Returns exit code: 0 on success, 1 if the code is rejected.
pub fn run_normalize(args: &NormalizeArgs, output: OutputFormat) -> Result<u8> {
    let report = Conversion::run(&args.code, gtin_core::normalize);
    tracing::debug!(success = report.error.is_none(), "normalize finished");
    emit(&report, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Report;

    #[test]
    fn lifts_gtin13() {
        let report = Conversion::run("4006381333931", gtin_core::normalize);
        assert_eq!(report.to_text(), "14006381333938");
    }

    #[test]
    fn rejects_gtin12() {
        let report = Conversion::run("012345678905", gtin_core::normalize);
        assert_eq!(report.error.as_ref().map(|e| e.kind), Some("invalid_format"));
    }
}
