//! # Error Hierarchy
//!
//! Structured error types for GTIN handling, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Each component reports failures through its own enum, carrying only the
//! variants it can actually produce. The public facade collapses them into
//! [`GtinError`], the closed five-variant set that consumers match on.
//! Matching must dispatch on the variant: only [`GtinError::InvalidLength`]
//! carries a payload, and message text is not part of the contract.

use thiserror::Error;

/// Unified error type returned by every public GTIN operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GtinError {
    /// The parsed digit count matches no accepted format or generation length.
    #[error("invalid length: got {got} digits")]
    InvalidLength {
        /// Number of digits actually parsed (not the raw string length).
        got: usize,
    },

    /// Length and characters are fine but the trailing digit fails Mod-10.
    #[error("invalid check digit")]
    InvalidCheckDigit,

    /// At least one character is not an ASCII decimal digit.
    #[error("invalid characters: only ASCII digits 0-9 are permitted")]
    InvalidCharacters,

    /// Neither the 3-digit nor the 2-digit prefix matches a GS1 allocation.
    #[error("no GS1 prefix found")]
    NoGs1PrefixFound,

    /// The operation does not support this GTIN format.
    #[error("invalid format for this operation")]
    InvalidFormat,
}

/// Errors from the digit parser.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitError {
    /// A character outside `'0'..='9'` was encountered.
    #[error("input contains a non-digit character")]
    InvalidCharacters,
}

/// Errors from check-digit calculation and generation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckDigitError {
    /// Body length outside the range the operation accepts.
    #[error("invalid body length: got {got} digits")]
    InvalidLength {
        /// Number of digits supplied.
        got: usize,
    },

    /// Input could not be parsed as digits.
    #[error(transparent)]
    Digits(#[from] DigitError),
}

/// Errors from the GS1 prefix table.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixError {
    /// No 3-digit or 2-digit row matched.
    #[error("prefix not allocated by GS1")]
    NotFound,
}

/// Errors from format classification, validation, and normalization.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// Trimmed, parsed digit count is not 8, 12, 13 or 14.
    #[error("no GTIN format has {got} digits")]
    InvalidLength {
        /// Number of digits parsed after trimming.
        got: usize,
    },

    /// Input could not be parsed as digits.
    #[error("input contains a non-digit character")]
    InvalidCharacters,

    /// Trailing digit does not match the recomputed check digit.
    #[error("check digit mismatch")]
    InvalidCheckDigit,

    /// Normalization requested for a format other than GTIN-13.
    #[error("only GTIN-13 can be normalized to GTIN-14")]
    InvalidFormat,
}

impl From<DigitError> for FormatError {
    fn from(err: DigitError) -> Self {
        match err {
            DigitError::InvalidCharacters => Self::InvalidCharacters,
        }
    }
}

impl From<DigitError> for GtinError {
    fn from(err: DigitError) -> Self {
        match err {
            DigitError::InvalidCharacters => Self::InvalidCharacters,
        }
    }
}

impl From<CheckDigitError> for GtinError {
    fn from(err: CheckDigitError) -> Self {
        match err {
            CheckDigitError::InvalidLength { got } => Self::InvalidLength { got },
            CheckDigitError::Digits(inner) => inner.into(),
        }
    }
}

impl From<PrefixError> for GtinError {
    fn from(err: PrefixError) -> Self {
        match err {
            PrefixError::NotFound => Self::NoGs1PrefixFound,
        }
    }
}

impl From<FormatError> for GtinError {
    fn from(err: FormatError) -> Self {
        match err {
            FormatError::InvalidLength { got } => Self::InvalidLength { got },
            FormatError::InvalidCharacters => Self::InvalidCharacters,
            FormatError::InvalidCheckDigit => Self::InvalidCheckDigit,
            FormatError::InvalidFormat => Self::InvalidFormat,
        }
    }
}
