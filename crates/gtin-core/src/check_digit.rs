//! # Check-Digit Engine
//!
//! GS1 Mod-10 check digit computation.
//!
//! Digits are weighted right-to-left, starting with 3 at the rightmost body
//! digit and alternating 3, 1, 3, 1, ... The weights are anchored to the
//! rightmost digit, not to absolute position, so the same algorithm serves
//! every GTIN length from GTIN-8 to GTIN-14.
//!
//! The largest possible weighted sum (13 digits of 9) is 468, so a `u32`
//! accumulator cannot overflow.

use crate::digits::parse_digits;
use crate::error::CheckDigitError;

/// Longest body (GTIN-14 minus its check digit).
pub const MAX_BODY_LEN: usize = 13;

/// Body lengths accepted by [`generate`]: GTIN-8, GTIN-12, GTIN-13, GTIN-14.
pub const GENERATION_BODY_LENS: [usize; 4] = [7, 11, 12, 13];

/// Compute the GS1 Mod-10 check digit for a GTIN body.
///
/// `digits` excludes the check digit itself.
///
/// # Errors
///
/// Returns [`CheckDigitError::InvalidLength`] when the body is empty or
/// longer than [`MAX_BODY_LEN`] digits.
pub fn calculate(digits: &[u8]) -> Result<u8, CheckDigitError> {
    if digits.is_empty() || digits.len() > MAX_BODY_LEN {
        return Err(CheckDigitError::InvalidLength { got: digits.len() });
    }

    let mut weight = 3u32;
    let mut sum = 0u32;
    for &d in digits.iter().rev() {
        sum += u32::from(d) * weight;
        weight = if weight == 3 { 1 } else { 3 };
    }

    let remainder = (sum % 10) as u8;
    Ok(if remainder == 0 { 0 } else { 10 - remainder })
}

/// Check a complete digit sequence whose last element is the check digit.
///
/// Returns `false` when the sequence is too short or too long to carry a
/// check digit, or when the trailing digit does not match.
pub fn verify(digits: &[u8]) -> bool {
    match digits.split_last() {
        Some((&claimed, body)) => calculate(body).is_ok_and(|expected| expected == claimed),
        None => false,
    }
}

/// Append the check digit to a GTIN body given as text.
///
/// The digit is spliced onto `code` exactly as supplied, so leading zeros
/// survive byte-for-byte. No whitespace trimming is performed.
///
/// # Errors
///
/// - [`CheckDigitError::Digits`] if `code` contains a non-digit character.
/// - [`CheckDigitError::InvalidLength`] if the body is not 7, 11, 12 or 13
///   digits long.
pub fn generate(code: &str) -> Result<String, CheckDigitError> {
    let digits = parse_digits(code)?;
    if !GENERATION_BODY_LENS.contains(&digits.len()) {
        return Err(CheckDigitError::InvalidLength { got: digits.len() });
    }

    let check = calculate(&digits)?;
    let mut out = String::with_capacity(code.len() + 1);
    out.push_str(code);
    out.push(char::from(b'0' + check));
    Ok(out)
}
