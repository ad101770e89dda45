//! # Prefix Subcommands
//!
//! `gtin prefix` resolves one code's GS1 member organization.
//! `gtin prefixes` lists the table, optionally filtered by organization.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::{emit, Conversion, OutputFormat, Report};

/// Arguments for the `gtin prefix` subcommand.
#[derive(Args, Debug)]
pub struct PrefixArgs {
    /// Code whose leading digits are resolved. Not validated.
    #[arg(value_name = "CODE")]
    pub code: String,
}

/// Arguments for the `gtin prefixes` subcommand.
#[derive(Args, Debug)]
pub struct PrefixesArgs {
    /// Only list rows whose organization contains this text (case-insensitive).
    #[arg(long, value_name = "TEXT")]
    pub filter: Option<String>,
}

/// One row of the prefix table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixRow {
    /// 2- or 3-digit prefix.
    pub prefix: &'static str,
    /// GS1 member organization or special allocation.
    pub organization: &'static str,
}

/// Report for a `prefixes` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixesReport {
    /// Matching rows in ascending prefix order.
    pub prefixes: Vec<PrefixRow>,
}

impl PrefixesReport {
    /// Collect table rows matching `filter`.
    pub fn build(filter: Option<&str>) -> Self {
        let needle = filter.map(str::to_lowercase);
        let prefixes = gtin_core::prefix::entries()
            .filter(|(_, org)| {
                needle
                    .as_deref()
                    .map_or(true, |n| org.to_lowercase().contains(n))
            })
            .map(|(prefix, organization)| PrefixRow {
                prefix,
                organization,
            })
            .collect();
        Self { prefixes }
    }
}

impl Report for PrefixesReport {
    fn to_text(&self) -> String {
        self.prefixes
            .iter()
            .map(|row| format!("{:<4} {}", row.prefix, row.organization))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn is_success(&self) -> bool {
        !self.prefixes.is_empty()
    }
}

/// Execute the prefix subcommand.
///
/// Returns exit code: 0 on success, 1 if no prefix matches.
pub fn run_prefix(args: &PrefixArgs, output: OutputFormat) -> Result<u8> {
    let report = Conversion::run(&args.code, gtin_core::gs1_prefix_country);
    emit(&report, output)
}

/// Execute the prefixes subcommand.
///
/// Returns exit code: 0 if any row is listed, 1 if the filter matched nothing.
pub fn run_prefixes(args: &PrefixesArgs, output: OutputFormat) -> Result<u8> {
    let report = PrefixesReport::build(args.filter.as_deref());
    tracing::debug!(rows = report.prefixes.len(), "listing prefixes");
    emit(&report, output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_organization() {
        let report = Conversion::run("012345678905", gtin_core::gs1_prefix_country);
        assert_eq!(report.to_text(), "GS1 US");
    }

    #[test]
    fn unknown_prefix_fails() {
        let report = Conversion::run("999999999999", gtin_core::gs1_prefix_country);
        assert!(!report.is_success());
        assert_eq!(
            report.error.as_ref().map(|e| e.kind),
            Some("no_gs1_prefix_found")
        );
    }

    #[test]
    fn unfiltered_listing_is_whole_table() {
        let report = PrefixesReport::build(None);
        assert_eq!(report.prefixes.len(), gtin_core::prefix::len());
        assert_eq!(report.prefixes[0].prefix, "00");
    }

    #[test]
    fn filter_is_case_insensitive() {
        let report = PrefixesReport::build(Some("isbn"));
        let prefixes: Vec<&str> = report.prefixes.iter().map(|r| r.prefix).collect();
        assert_eq!(prefixes, vec!["978", "979"]);
        assert!(report.to_text().starts_with("978  ISBN"));
    }

    #[test]
    fn empty_filter_result_is_failure() {
        let report = PrefixesReport::build(Some("atlantis"));
        assert!(report.prefixes.is_empty());
        assert!(!report.is_success());
    }
}
