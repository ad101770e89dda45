//! # Public Facade
//!
//! The stable external API. Each operation delegates to its component and
//! re-maps the component error onto [`GtinError`].
//!
//! [`Gtin`] is the only way to hold a code that is known to be valid. Its
//! fields are private and every constructor ([`Gtin::from_string`],
//! [`FromStr`], [`TryFrom`], serde deserialization) runs full validation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::check_digit;
use crate::error::GtinError;
use crate::format::{self, GtinFormat};
use crate::prefix;

/// Validate a GTIN and return its format.
///
/// Surrounding ASCII whitespace is ignored.
///
/// # Errors
///
/// [`GtinError::InvalidCharacters`], [`GtinError::InvalidLength`] or
/// [`GtinError::InvalidCheckDigit`], checked in that order.
pub fn validate(code: &str) -> Result<GtinFormat, GtinError> {
    match format::validate(code) {
        Ok(format) => {
            tracing::trace!(%format, "gtin validated");
            Ok(format)
        }
        Err(err) => {
            let err = GtinError::from(err);
            tracing::debug!(error = %err, input_len = code.len(), "gtin rejected");
            Err(err)
        }
    }
}

/// Append the GS1 check digit to a 7, 11, 12 or 13 digit body.
///
/// The input is not trimmed and is returned verbatim with the digit
/// appended.
///
/// # Errors
///
/// [`GtinError::InvalidCharacters`] or [`GtinError::InvalidLength`].
pub fn generate(code: &str) -> Result<String, GtinError> {
    check_digit::generate(code).map_err(GtinError::from)
}

/// Convert a valid GTIN-13 into GTIN-14 with indicator digit `1`.
///
/// # Errors
///
/// Validation errors propagate; any format other than GTIN-13 yields
/// [`GtinError::InvalidFormat`].
pub fn normalize(code: &str) -> Result<String, GtinError> {
    format::normalize(code).map_err(GtinError::from)
}

/// Name of the GS1 member organization or special allocation for the
/// leading digits of `code`.
///
/// # Errors
///
/// [`GtinError::NoGs1PrefixFound`] if no 3- or 2-digit prefix matches.
pub fn gs1_prefix_country(code: &str) -> Result<String, GtinError> {
    prefix::lookup(code)
        .map(str::to_owned)
        .map_err(GtinError::from)
}

/// A GTIN that passed validation.
///
/// Holds the string exactly as the caller supplied it (surrounding
/// whitespace included) together with its format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Gtin {
    code: String,
    format: GtinFormat,
}

impl Gtin {
    /// Validate `code` and wrap it.
    ///
    /// # Errors
    ///
    /// Any error from [`validate`].
    pub fn from_string(code: impl Into<String>) -> Result<Self, GtinError> {
        let code = code.into();
        let format = validate(&code)?;
        Ok(Self { code, format })
    }

    /// The format discovered during validation.
    pub fn format(&self) -> GtinFormat {
        self.format
    }

    /// The code as originally supplied.
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// GS1 member organization for this code's prefix.
    ///
    /// # Errors
    ///
    /// [`GtinError::NoGs1PrefixFound`] for unallocated prefixes.
    pub fn gs1_prefix_country(&self) -> Result<String, GtinError> {
        gs1_prefix_country(&self.code)
    }

    /// GTIN-14 form of a GTIN-13.
    ///
    /// # Errors
    ///
    /// [`GtinError::InvalidFormat`] unless this is a GTIN-13.
    pub fn to_gtin14(&self) -> Result<String, GtinError> {
        normalize(&self.code)
    }
}

impl std::fmt::Display for Gtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for Gtin {
    type Err = GtinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl TryFrom<String> for Gtin {
    type Error = GtinError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_string(value)
    }
}

impl TryFrom<&str> for Gtin {
    type Error = GtinError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_string(value)
    }
}

impl From<Gtin> for String {
    fn from(gtin: Gtin) -> Self {
        gtin.code
    }
}

impl AsRef<str> for Gtin {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_scenarios() {
        assert_eq!(generate("629104150021").unwrap(), "6291041500213");
        assert_eq!(validate("6291041500213").unwrap(), GtinFormat::Gtin13);
        assert_eq!(
            validate("6291041500214"),
            Err(GtinError::InvalidCheckDigit)
        );
        assert_eq!(normalize("6291041500213").unwrap(), "16291041500210");
        assert_eq!(gs1_prefix_country("012345678905").unwrap(), "GS1 US");
        assert_eq!(
            gs1_prefix_country("999999999999"),
            Err(GtinError::NoGs1PrefixFound)
        );
        assert_eq!(validate(""), Err(GtinError::InvalidLength { got: 0 }));
    }

    #[test]
    fn facade_remaps_every_variant() {
        assert_eq!(validate("12a"), Err(GtinError::InvalidCharacters));
        assert_eq!(generate("12a"), Err(GtinError::InvalidCharacters));
        assert_eq!(generate("123"), Err(GtinError::InvalidLength { got: 3 }));
        assert_eq!(normalize("96385074"), Err(GtinError::InvalidFormat));
    }

    #[test]
    fn generate_is_not_trimmed() {
        assert_eq!(generate("629104150021 "), Err(GtinError::InvalidCharacters));
    }

    #[test]
    fn from_string_keeps_original_text() {
        let gtin = Gtin::from_string("  6291041500213\n").unwrap();
        assert_eq!(gtin.format(), GtinFormat::Gtin13);
        assert_eq!(gtin.to_string(), "  6291041500213\n");
        assert_eq!(gtin.as_str(), "  6291041500213\n");
    }

    #[test]
    fn from_string_rejects_invalid() {
        assert_eq!(
            Gtin::from_string("6291041500214"),
            Err(GtinError::InvalidCheckDigit)
        );
        assert_eq!(
            Gtin::from_string(""),
            Err(GtinError::InvalidLength { got: 0 })
        );
    }

    #[test]
    fn parse_and_try_from_validate() {
        let gtin: Gtin = "96385074".parse().unwrap();
        assert_eq!(gtin.format(), GtinFormat::Gtin8);
        assert!(Gtin::try_from("96385075").is_err());
        assert!(Gtin::try_from(String::from("012345678905")).is_ok());
    }

    #[test]
    fn gtin_accessors() {
        let gtin = Gtin::from_string("6291041500213").unwrap();
        assert_eq!(gtin.gs1_prefix_country().unwrap(), "GS1 Emirates");
        assert_eq!(gtin.to_gtin14().unwrap(), "16291041500210");

        let upc = Gtin::from_string("012345678905").unwrap();
        assert_eq!(upc.to_gtin14(), Err(GtinError::InvalidFormat));
        assert_eq!(String::from(upc), "012345678905");
    }

    #[test]
    fn serde_roundtrip_is_a_plain_string() {
        let gtin = Gtin::from_string("9780306406157").unwrap();
        let json = serde_json::to_string(&gtin).unwrap();
        assert_eq!(json, "\"9780306406157\"");
        let back: Gtin = serde_json::from_str(&json).unwrap();
        assert_eq!(back, gtin);
        assert_eq!(back.format(), GtinFormat::Gtin13);
    }

    #[test]
    fn deserialization_cannot_bypass_validation() {
        let result: Result<Gtin, _> = serde_json::from_str("\"9780306406158\"");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("check digit"));
    }
}
