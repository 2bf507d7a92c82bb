//! Constants for Physic Core
//!
//! Centralized, documented constants used by the parser, the converter and
//! the formatter. Every numeric value that shows up in more than one module
//! lives here.
//!
//! ## Organization
//!
//! - **Prefixes**: powers of ten and storage exponents
//! - **Units**: named quantities expressed in each kind's base unit
//! - **Buffers**: fixed capacities for allocation-free formatting
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Unit constants are raw base-unit integers; the typed newtypes in
//!    [`crate::quantities`] wrap them
//! 3. Use descriptive names that include the base unit

/// Powers of ten and storage exponents.
pub mod prefixes;

/// Named physical quantities in base units.
pub mod units;

/// Buffer sizes for formatting without allocation.
pub mod buffers;

// Re-export commonly used constants for convenience
pub use prefixes::{POWERS_OF_TEN, MAX_SHIFT};

pub use units::{
    NANORADIAN_PER_DEGREE, NANORADIAN_PER_PI, NANORADIAN_PER_RADIAN,
    ZERO_CELSIUS_NANOKELVIN,
};

pub use buffers::FORMAT_CAPACITY;
