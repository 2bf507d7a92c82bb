//! Error Types for Quantity Parsing
//!
//! ## Design Philosophy
//!
//! Parsing runs on configuration paths and in flag handlers, sometimes on
//! devices with a few kilobytes of RAM. The error type follows the same rules
//! as the rest of the crate:
//!
//! 1. **Small Size**: the largest variant carries one `&'static str`.
//!
//! 2. **No Heap Allocation**: no `String` payloads. The offending input is
//!    owned by the caller and is not copied into the error.
//!
//! 3. **Copy Semantics**: errors are returned by value and can be stored in
//!    queues or compared in tests without clones.
//!
//! 4. **Local Failure**: every failure concerns a single value assignment.
//!    Nothing is ever partially written; callers abort the one assignment and
//!    carry on.
//!
//! ## Error Categories
//!
//! ### Literal Errors
//! - `NotANumber`: no digit before the first non-numeric character (`"mA"`)
//! - `MultipleDecimalPoints`: a second `.` inside the literal (`"1.1.1"`)
//!
//! ### Magnitude Errors
//! - `ExponentTooLarge`: the scaling shift is beyond 10^18
//! - `Overflow`: the value does not fit the kind's integer width
//!
//! ### Suffix Errors
//! - `UnrecognizedUnit`: the text after the number is not a known spelling
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use physic_core::{ParseError, QuantityKind};
//!
//! fn apply_setting(text: &str) -> Option<i64> {
//!     match QuantityKind::ElectricCurrent.parse(text) {
//!         Ok(value) => Some(value),
//!         Err(ParseError::UnrecognizedUnit { expected }) => {
//!             // Tell the user which unit this setting wants
//!             let _ = expected;
//!             None
//!         }
//!         Err(_) => None,
//!     }
//! }
//!
//! assert_eq!(apply_setting("12.5mA"), Some(12_500_000));
//! assert_eq!(apply_setting("12.5mV"), None);
//! ```

use thiserror_no_std::Error;

/// Result type for parse operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Parse failures - kept small and `Copy` for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// No digit appears before the first non-numeric character
    #[error("parse error: is not a number")]
    NotANumber,

    /// A second decimal point was found inside the numeric literal
    #[error("parse error: multiple decimal points at byte {position}")]
    MultipleDecimalPoints {
        /// Byte offset of the offending point
        position: usize,
    },

    /// The power of ten needed to reach the base unit is beyond 10^18
    #[error("parse error: exceeds maximum exponent")]
    ExponentTooLarge,

    /// The value does not fit the kind's integer width
    #[error("parse error: overflows")]
    Overflow,

    /// The suffix is not one of the kind's accepted spellings
    #[error("parse error: no units provided, need {expected}")]
    UnrecognizedUnit {
        /// Canonical unit the kind expects
        expected: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ParseError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NotANumber =>
                defmt::write!(fmt, "is not a number"),
            Self::MultipleDecimalPoints { position } =>
                defmt::write!(fmt, "multiple decimal points at {}", position),
            Self::ExponentTooLarge =>
                defmt::write!(fmt, "exceeds maximum exponent"),
            Self::Overflow =>
                defmt::write!(fmt, "overflows"),
            Self::UnrecognizedUnit { expected } =>
                defmt::write!(fmt, "no units provided, need {=str}", expected),
        }
    }
}
