//! Fixed-point conversion
//!
//! Turns a [`DecimalLiteral`] into an integer count of storage units by
//! shifting it a number of decimal places. A literal `12.5` (digits `125`,
//! exponent -1) read as milliamperes into nanoampere storage gets a scale
//! of 6 and becomes 12 500 000.
//!
//! Digits below the storage resolution are truncated toward zero; they are
//! never rounded.

use crate::constants::{MAX_SHIFT, POWERS_OF_TEN};
use crate::decimal::DecimalLiteral;
use crate::errors::{ParseError, ParseResult};

const I64_LIMIT: u64 = i64::MAX as u64;
/// Magnitude of `i64::MIN`, reachable only by negative literals.
const I64_NEGATIVE_LIMIT: u64 = i64::MIN.unsigned_abs();

/// Scale `literal` by `10^scale` and return the signed integer result.
///
/// Errors:
/// - [`ParseError::Overflow`] when the digits or the scaled magnitude do not
///   fit `i64` (`i64::MIN` itself is accepted)
/// - [`ParseError::ExponentTooLarge`] when the combined shift is beyond
///   [`MAX_SHIFT`] places in either direction
///
/// Zero converts to 0 at any scale.
pub fn to_scaled(literal: &DecimalLiteral<'_>, scale: i32) -> ParseResult<i64> {
    let limit = if literal.is_negative() { I64_NEGATIVE_LIMIT } else { I64_LIMIT };
    let mut magnitude: u64 = 0;
    for digit in literal.digits() {
        magnitude = magnitude
            .checked_mul(10)
            .and_then(|m| m.checked_add(u64::from(digit - b'0')))
            .filter(|m| *m <= limit)
            .ok_or(ParseError::Overflow)?;
    }
    if magnitude == 0 {
        return Ok(0);
    }

    let shift = literal
        .exponent()
        .checked_add(scale)
        .ok_or(ParseError::ExponentTooLarge)?;
    let places = shift.unsigned_abs();
    if places > MAX_SHIFT {
        return Err(ParseError::ExponentTooLarge);
    }
    let factor = POWERS_OF_TEN[places as usize];

    let scaled = if shift < 0 {
        magnitude / factor
    } else {
        magnitude
            .checked_mul(factor)
            .filter(|m| *m <= limit)
            .ok_or(ParseError::Overflow)?
    };

    if literal.is_negative() {
        // scaled <= |i64::MIN|, so the negation always fits
        Ok(0i64.wrapping_sub_unsigned(scaled))
    } else {
        i64::try_from(scaled).map_err(|_| ParseError::Overflow)
    }
}
