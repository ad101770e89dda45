//! # Digit Parser
//!
//! Converts text into a sequence of decimal digit values, most-significant
//! digit first (barcode reading order). Length checks belong to callers.

use crate::error::DigitError;

/// Parse every character of `text` as an ASCII decimal digit.
///
/// Empty input yields an empty sequence.
///
/// # Errors
///
/// Returns [`DigitError::InvalidCharacters`] if any character is outside
/// `'0'..='9'`. No partial result is produced.
pub fn parse_digits(text: &str) -> Result<Vec<u8>, DigitError> {
    text.chars()
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as u8)
                .ok_or(DigitError::InvalidCharacters)
        })
        .collect()
}
