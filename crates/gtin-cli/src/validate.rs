//! # Validate Subcommand
//!
//! Validates each code and reports its format or the rejection reason.
//! A code of `-` reads further codes from stdin, one per line; blank lines
//! are skipped.

use std::io::BufRead;

use anyhow::{Context, Result};
use clap::Args;
use gtin_core::GtinFormat;
use serde::Serialize;

use crate::{emit, trim_code, Failure, OutputFormat, Report};

/// Arguments for the `gtin validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Codes to validate. Use `-` to read codes from stdin.
    #[arg(value_name = "CODE", required = true)]
    pub codes: Vec<String>,
}

/// Outcome for one validated code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// The code exactly as given.
    pub code: String,
    /// Discovered format when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<GtinFormat>,
    /// Rejection reason when invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Failure>,
}

/// Report for a `validate` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateReport {
    /// Number of valid codes.
    pub passed: usize,
    /// Number of codes checked.
    pub total: usize,
    /// Per-code outcomes, in input order.
    pub results: Vec<ValidationResult>,
}

impl ValidateReport {
    /// Validate every code in order.
    pub fn build(codes: &[String]) -> Self {
        let results: Vec<ValidationResult> = codes
            .iter()
            .map(|code| match gtin_core::validate(code) {
                Ok(format) => ValidationResult {
                    code: code.clone(),
                    format: Some(format),
                    error: None,
                },
                Err(err) => ValidationResult {
                    code: code.clone(),
                    format: None,
                    error: Some(err.into()),
                },
            })
            .collect();
        let passed = results.iter().filter(|r| r.error.is_none()).count();
        Self {
            passed,
            total: results.len(),
            results,
        }
    }
}

impl Report for ValidateReport {
    fn to_text(&self) -> String {
        let mut lines: Vec<String> = self
            .results
            .iter()
            .map(|r| match (&r.format, &r.error) {
                (Some(format), _) => format!("OK    {}  {format}", trim_code(&r.code)),
                (None, Some(err)) => format!("FAIL  {}  {}", trim_code(&r.code), err.message),
                (None, None) => format!("FAIL  {}", trim_code(&r.code)),
            })
            .collect();
        if self.total > 1 {
            lines.push(format!("{}/{} valid", self.passed, self.total));
        }
        lines.join("\n")
    }

    fn is_success(&self) -> bool {
        self.passed == self.total
    }
}

/// Expand `-` arguments into the lines of `stdin`.
pub fn collect_codes(args: &[String], stdin: impl BufRead) -> Result<Vec<String>> {
    let mut codes = Vec::with_capacity(args.len());
    let mut stdin = Some(stdin);
    for arg in args {
        if arg != "-" {
            codes.push(arg.clone());
            continue;
        }
        // stdin can only be drained once; later `-` arguments add nothing.
        if let Some(reader) = stdin.take() {
            for line in reader.lines() {
                let line = line.context("failed to read codes from stdin")?;
                if !trim_code(&line).is_empty() {
                    codes.push(line);
                }
            }
        }
    }
    Ok(codes)
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 if every code is valid, 1 otherwise.
pub fn run_validate(args: &ValidateArgs, output: OutputFormat) -> Result<u8> {
    let codes = collect_codes(&args.codes, std::io::stdin().lock())?;
    tracing::info!(count = codes.len(), "validating codes");

    let report = ValidateReport::build(&codes);
    tracing::debug!(passed = report.passed, total = report.total, "validation finished");
    emit(&report, output)
}
