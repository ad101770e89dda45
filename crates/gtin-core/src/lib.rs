#![deny(missing_docs)]

//! # gtin-core — GS1 GTIN Primitives
//!
//! Validation, check-digit generation, GTIN-13 → GTIN-14 normalization, and
//! GS1 prefix resolution for Global Trade Item Numbers. Every operation is a
//! pure function of its input; the only shared state is the read-only prefix
//! table, built once on first use.
//!
//! ## Design Principles
//!
//! 1. **Valid by construction.** [`Gtin`] has private fields and a single
//!    validating constructor. Holding a `Gtin` proves the check digit was
//!    verified. Deserialization goes through the same path.
//!
//! 2. **One weighted-sum routine.** Generation, validation, and
//!    normalization all call [`check_digit::calculate`]; the Mod-10 weights
//!    are anchored on the rightmost body digit for every GTIN length.
//!
//! 3. **Closed error set.** Components report through their own enums in
//!    [`error`]; the facade maps them onto the five-variant [`GtinError`].
//!    No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! ## Example
//!
//! ```
//! use gtin_core::{generate, gs1_prefix_country, normalize, validate, Gtin, GtinFormat};
//!
//! assert_eq!(generate("629104150021").unwrap(), "6291041500213");
//! assert_eq!(validate("6291041500213").unwrap(), GtinFormat::Gtin13);
//! assert_eq!(normalize("6291041500213").unwrap(), "16291041500210");
//! assert_eq!(gs1_prefix_country("012345678905").unwrap(), "GS1 US");
//!
//! let gtin: Gtin = "96385074".parse().unwrap();
//! assert_eq!(gtin.format(), GtinFormat::Gtin8);
//! ```

pub mod check_digit;
pub mod digits;
pub mod error;
pub mod format;
pub mod gtin;
pub mod prefix;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{CheckDigitError, DigitError, FormatError, GtinError, PrefixError};
pub use format::GtinFormat;
pub use gtin::{generate, gs1_prefix_country, normalize, validate, Gtin};
