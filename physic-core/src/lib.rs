//! Fixed-point physical quantities for peripheral I/O
//!
//! Parses human-typed values such as `12.5mA`, `2.4kHz` or `-20C` into
//! integer counts of a small base unit, and renders those integers back as
//! compact strings with an SI prefix.
//!
//! Key constraints:
//! - No floating point anywhere in parse or format
//! - No heap allocation; output goes to a fixed-capacity string
//! - Overflow is detected, never wrapped
//!
//! ```
//! use physic_core::{QuantityKind, TextValue};
//! use physic_core::quantities::ElectricCurrent;
//!
//! // Dynamic: pick the kind at runtime
//! let raw = QuantityKind::ElectricCurrent.parse("2.4kA").unwrap();
//! assert_eq!(QuantityKind::ElectricCurrent.format(raw).as_str(), "2.400kA");
//!
//! // Typed: flag or config binding
//! let mut limit = ElectricCurrent::AMPERE;
//! limit.set_from_text("12.5mA").unwrap();
//! assert_eq!(limit.format_to_text().as_str(), "12.500mA");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod constants;
pub mod convert;
pub mod decimal;
pub mod errors;
pub mod format;
pub mod prefix;
pub mod quantities;
pub mod registry;
pub mod traits;

// Public API
pub use errors::{ParseError, ParseResult};
pub use format::{FormattedValue, Notation, PrefixFamily};
pub use prefix::SiPrefix;
pub use registry::{KindSpec, QuantityKind};
pub use traits::{Quantity, TextValue};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
