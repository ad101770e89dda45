//! # Inspect Subcommand
//!
//! Validates one code and reports everything the library knows about it:
//! format, GS1 member organization, and GTIN-14 form. The argument is
//! stripped of surrounding ASCII whitespace first so that prefix resolution
//! sees the leading digits.

use anyhow::Result;
use clap::Args;
use gtin_core::{Gtin, GtinFormat};
use serde::Serialize;

use crate::{emit, trim_code, Failure, OutputFormat, Report};

/// Arguments for the `gtin inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Code to inspect.
    #[arg(value_name = "CODE")]
    pub code: String,
}

/// Report for an `inspect` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    /// The code without surrounding ASCII whitespace.
    pub code: String,
    /// Format when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<GtinFormat>,
    /// GS1 member organization, when the prefix is allocated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// GTIN-14 form for GTIN-13 and GTIN-14 codes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtin14: Option<String>,
    /// Rejection reason when invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Failure>,
}

impl InspectReport {
    /// Inspect `code`.
    pub fn build(code: &str) -> Self {
        let code = trim_code(code);
        match Gtin::from_string(code) {
            Ok(gtin) => {
                let gtin14 = match gtin.format() {
                    GtinFormat::Gtin13 => gtin.to_gtin14().ok(),
                    GtinFormat::Gtin14 => Some(gtin.to_string()),
                    GtinFormat::Gtin8 | GtinFormat::Gtin12 => None,
                };
                Self {
                    code: code.to_string(),
                    format: Some(gtin.format()),
                    organization: gtin.gs1_prefix_country().ok(),
                    gtin14,
                    error: None,
                }
            }
            Err(err) => Self {
                code: code.to_string(),
                format: None,
                organization: None,
                gtin14: None,
                error: Some(err.into()),
            },
        }
    }
}

impl Report for InspectReport {
    fn to_text(&self) -> String {
        if let Some(err) = &self.error {
            return format!("{}: {}", self.code, err.message);
        }
        let mut lines = vec![format!("code:         {}", self.code)];
        if let Some(format) = self.format {
            lines.push(format!("format:       {format}"));
        }
        lines.push(format!(
            "organization: {}",
            self.organization.as_deref().unwrap_or("(unallocated)")
        ));
        if let Some(gtin14) = &self.gtin14 {
            lines.push(format!("gtin-14:      {gtin14}"));
        }
        lines.join("\n")
    }

    fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Execute the inspect subcommand.
///
/// Returns exit code: 0 if the code is valid, 1 otherwise.
pub fn run_inspect(args: &InspectArgs, output: OutputFormat) -> Result<u8> {
    let report = InspectReport::build(&args.code);
    emit(&report, output)
}
