//! # gtin-cli — Command-Line Front End for gtin-core
//!
//! Provides the `gtin` binary. Argument parsing lives here; every GTIN rule
//! lives in `gtin-core`.
//!
//! ## Subcommands
//!
//! - `gtin validate` — Validate one or more codes (`-` reads stdin).
//! - `gtin generate` — Append the check digit to a body.
//! - `gtin normalize` — Lift a GTIN-13 to GTIN-14.
//! - `gtin prefix` — Resolve the GS1 member organization.
//! - `gtin prefixes` — List the prefix table.
//! - `gtin inspect` — Format, organization, and GTIN-14 form in one report.
//!
//! ## Output and Exit Codes
//!
//! Reports go to stdout as text or JSON (`--output json`); logs go to
//! stderr. Exit code 0 on success, 1 when a code is rejected, 2 on
//! operational error.

pub mod generate;
pub mod inspect;
pub mod normalize;
pub mod prefix;
pub mod validate;

use anyhow::{Context, Result};
use clap::ValueEnum;
use gtin_core::GtinError;
use serde::Serialize;

/// Every input accepted.
pub const EXIT_OK: u8 = 0;
/// At least one input was rejected.
pub const EXIT_REJECTED: u8 = 1;
/// The command could not run (I/O, serialization).
pub const EXIT_ERROR: u8 = 2;

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per result.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
}

/// A command result that can be rendered in either output format.
pub trait Report: Serialize {
    /// Human-readable rendering, without a trailing newline.
    fn to_text(&self) -> String;

    /// Whether every input in the report was accepted.
    fn is_success(&self) -> bool;
}

/// Render `report` for stdout.
pub fn render<R: Report>(report: &R, output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Text => Ok(report.to_text()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("failed to serialize report as JSON")
        }
    }
}

/// Print `report` and translate it into an exit code.
pub fn emit<R: Report>(report: &R, output: OutputFormat) -> Result<u8> {
    println!("{}", render(report, output)?);
    Ok(if report.is_success() {
        EXIT_OK
    } else {
        EXIT_REJECTED
    })
}

/// Strip the surrounding whitespace that GTIN validation ignores.
///
/// Only ASCII whitespace is removed, matching `gtin_core::validate`; a
/// non-breaking space stays in place and is reported as a bad character.
pub fn trim_code(code: &str) -> &str {
    code.trim_matches(|c: char| c.is_ascii_whitespace())
}

/// Serializable form of a [`GtinError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    /// Stable machine-readable variant name.
    pub kind: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Parsed digit count, for length failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub got: Option<usize>,
}

impl From<GtinError> for Failure {
    fn from(err: GtinError) -> Self {
        let (kind, got) = match err {
            GtinError::InvalidLength { got } => ("invalid_length", Some(got)),
            GtinError::InvalidCheckDigit => ("invalid_check_digit", None),
            GtinError::InvalidCharacters => ("invalid_characters", None),
            GtinError::NoGs1PrefixFound => ("no_gs1_prefix_found", None),
            GtinError::InvalidFormat => ("invalid_format", None),
        };
        Self {
            kind,
            message: err.to_string(),
            got,
        }
    }
}

/// Result of applying one string-producing operation to one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// The input exactly as given.
    pub input: String,
    /// Operation output on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Rejection reason on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Failure>,
}

impl Conversion {
    /// Run `op` on `input` and record the outcome.
    pub fn run(input: &str, op: impl FnOnce(&str) -> Result<String, GtinError>) -> Self {
        let (output, error) = match op(input) {
            Ok(out) => (Some(out), None),
            Err(err) => (None, Some(Failure::from(err))),
        };
        Self {
            input: input.to_string(),
            output,
            error,
        }
    }
}

impl Report for Conversion {
    fn to_text(&self) -> String {
        match (&self.output, &self.error) {
            (Some(out), _) => out.clone(),
            (None, Some(err)) => format!("{}: {}", self.input, err.message),
            (None, None) => String::new(),
        }
    }

    fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_code_strips_ascii_whitespace_only() {
        assert_eq!(trim_code(" \t6291041500213\r\n"), "6291041500213");
        assert_eq!(trim_code("\u{a0}6291041500213"), "\u{a0}6291041500213");
    }

    #[test]
    fn failure_kinds_are_stable() {
        let f = Failure::from(GtinError::InvalidLength { got: 3 });
        assert_eq!(f.kind, "invalid_length");
        assert_eq!(f.got, Some(3));
        assert_eq!(
            Failure::from(GtinError::NoGs1PrefixFound).kind,
            "no_gs1_prefix_found"
        );
    }

    #[test]
    fn failure_json_omits_missing_length() {
        let json = serde_json::to_value(Failure::from(GtinError::InvalidCheckDigit)).unwrap();
        assert_eq!(json["kind"], "invalid_check_digit");
        assert!(json.get("got").is_none());
    }

    #[test]
    fn conversion_success_renders_output_only() {
        let c = Conversion::run("629104150021", gtin_core::generate);
        assert!(c.is_success());
        assert_eq!(render(&c, OutputFormat::Text).unwrap(), "6291041500213");
    }

    #[test]
    fn conversion_failure_renders_input_and_reason() {
        let c = Conversion::run("123", gtin_core::generate);
        assert!(!c.is_success());
        let text = render(&c, OutputFormat::Text).unwrap();
        assert!(text.starts_with("123: "));
        assert!(text.contains("3 digits"));
    }

    #[test]
    fn conversion_json_shape() {
        let c = Conversion::run("629104150021", gtin_core::generate);
        let json: serde_json::Value =
            serde_json::from_str(&render(&c, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["input"], "629104150021");
        assert_eq!(json["output"], "6291041500213");
        assert!(json.get("error").is_none());
    }
}
