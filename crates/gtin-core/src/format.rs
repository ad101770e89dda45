//! # GTIN Formats — Validation and Normalization
//!
//! Classifies a code into one of the four fixed-width GTIN formats and
//! verifies its check digit. Validation is a single pass of short-circuiting
//! guards:
//!
//! 1. trim surrounding ASCII whitespace,
//! 2. parse digits ([`FormatError::InvalidCharacters`]),
//! 3. classify by digit count ([`FormatError::InvalidLength`]),
//! 4. verify the Mod-10 check digit ([`FormatError::InvalidCheckDigit`]).
//!
//! Normalization lifts a GTIN-13 to GTIN-14 by prepending indicator digit
//! `1` and recomputing the check digit.

use serde::{Deserialize, Serialize};

use crate::check_digit;
use crate::digits::parse_digits;
use crate::error::{CheckDigitError, FormatError};

/// Indicator digit prepended when lifting a GTIN-13 to GTIN-14.
pub const GTIN14_INDICATOR: char = '1';

/// One of the four GS1 GTIN formats, each with a fixed total length
/// (check digit included).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GtinFormat {
    /// GTIN-8 (EAN-8), 8 digits.
    Gtin8,
    /// GTIN-12 (UPC-A), 12 digits.
    Gtin12,
    /// GTIN-13 (EAN-13), 13 digits.
    Gtin13,
    /// GTIN-14 (ITF-14 / case codes), 14 digits.
    Gtin14,
}

impl GtinFormat {
    /// All formats, shortest first.
    pub fn all() -> &'static [GtinFormat] {
        &[Self::Gtin8, Self::Gtin12, Self::Gtin13, Self::Gtin14]
    }

    /// Total digit count, check digit included.
    pub const fn len(self) -> usize {
        match self {
            Self::Gtin8 => 8,
            Self::Gtin12 => 12,
            Self::Gtin13 => 13,
            Self::Gtin14 => 14,
        }
    }

    /// The format with exactly `len` digits, if any.
    pub const fn from_len(len: usize) -> Option<Self> {
        match len {
            8 => Some(Self::Gtin8),
            12 => Some(Self::Gtin12),
            13 => Some(Self::Gtin13),
            14 => Some(Self::Gtin14),
            _ => None,
        }
    }
}

impl std::fmt::Display for GtinFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GTIN-{}", self.len())
    }
}

fn trim(code: &str) -> &str {
    code.trim_matches(|c: char| c.is_ascii_whitespace())
}

/// Validate `code` and return its format.
///
/// Surrounding ASCII whitespace is ignored. Length is judged on the parsed
/// digit count, so empty or all-whitespace input reports `got: 0`.
///
/// # Errors
///
/// See the module documentation for the guard order.
pub fn validate(code: &str) -> Result<GtinFormat, FormatError> {
    let digits = parse_digits(trim(code))?;

    let format = GtinFormat::from_len(digits.len())
        .ok_or(FormatError::InvalidLength { got: digits.len() })?;

    if !check_digit::verify(&digits) {
        return Err(FormatError::InvalidCheckDigit);
    }

    Ok(format)
}

/// Convert a GTIN-13 into its GTIN-14 form.
///
/// The trailing check digit is dropped, [`GTIN14_INDICATOR`] is prepended,
/// and a fresh check digit is computed over the 13-digit result. The old
/// check digit cannot be reused: the extra leading digit shifts every
/// weight.
///
/// # Errors
///
/// Any validation error is returned unchanged. A valid code that is not
/// GTIN-13 fails with [`FormatError::InvalidFormat`].
pub fn normalize(code: &str) -> Result<String, FormatError> {
    let format = validate(code)?;
    if format != GtinFormat::Gtin13 {
        return Err(FormatError::InvalidFormat);
    }

    let trimmed = trim(code);
    // Validation guarantees 13 ASCII digits, so byte slicing is safe.
    let body = &trimmed[..trimmed.len() - 1];
    let mut intermediate = String::with_capacity(GtinFormat::Gtin14.len());
    intermediate.push(GTIN14_INDICATOR);
    intermediate.push_str(body);

    check_digit::generate(&intermediate).map_err(|err| match err {
        CheckDigitError::InvalidLength { got } => FormatError::InvalidLength { got },
        CheckDigitError::Digits(inner) => inner.into(),
    })
}
