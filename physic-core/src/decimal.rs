//! Decimal literal tokenizer
//!
//! Reads the numeric prefix of a value such as `-12.50mA` and reduces it to
//! sign, significant digits and a power of ten:
//!
//! ```text
//! "-12.50mA"  ->  negative, digits "125", exponent -1, consumed 6
//! "1000Hz"    ->  digits "1", exponent 3, consumed 4
//! "0.005uF"   ->  digits "5", exponent -3, consumed 5
//! ```
//!
//! The digits borrow from the input: an integer slice followed by a fraction
//! slice, with insignificant zeros trimmed from both ends of the pair. No
//! allocation takes place.

use crate::errors::{ParseError, ParseResult};

/// Significant digits of a literal with a sign and decimal exponent
///
/// Value is `±digits × 10^exponent`. The concatenated digits never start or
/// end with `0`, except for zero itself which is `"0"` with exponent 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalLiteral<'a> {
    negative: bool,
    integer: &'a str,
    fraction: &'a str,
    exponent: i32,
}

impl<'a> DecimalLiteral<'a> {
    const ZERO_DIGITS: &'static str = "0";

    /// `true` when the literal started with `-`
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Power of ten applied to the digits
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// `true` when every digit of the literal was zero
    pub fn is_zero(&self) -> bool {
        self.integer == Self::ZERO_DIGITS && self.fraction.is_empty() && self.exponent == 0
    }

    /// Significant digits as ASCII values, most significant first
    pub fn digits(&self) -> impl Iterator<Item = u8> + 'a {
        self.integer.bytes().chain(self.fraction.bytes())
    }
}

/// Tokenize the numeric literal at the start of `text`.
///
/// Returns the literal and the number of bytes it spans, sign and point
/// included. Scanning stops at the first byte that is neither a digit nor a
/// point; a sign is only accepted as the first byte.
pub fn parse_decimal(text: &str) -> ParseResult<(DecimalLiteral<'_>, usize)> {
    let bytes = text.as_bytes();
    let (negative, start) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };

    let mut pos = start;
    let mut point = None;
    let mut seen_digit = false;
    while let Some(&b) = bytes.get(pos) {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' => {
                if point.is_some() {
                    return Err(ParseError::MultipleDecimalPoints { position: pos });
                }
                point = Some(pos);
            }
            _ => break,
        }
        pos += 1;
    }
    if !seen_digit {
        return Err(ParseError::NotANumber);
    }
    let end = pos;

    // Only ASCII bytes were consumed, so these slices are on char boundaries.
    let (mut integer, mut fraction) = match point {
        Some(p) => (&text[start..p], &text[p + 1..end]),
        None => (&text[start..end], ""),
    };

    let mut exponent = -i32::try_from(fraction.len()).map_err(|_| ParseError::ExponentTooLarge)?;

    let trimmed = fraction.trim_end_matches('0');
    exponent += (fraction.len() - trimmed.len()) as i32;
    fraction = trimmed;
    if fraction.is_empty() {
        let trimmed = integer.trim_end_matches('0');
        let zeros = i32::try_from(integer.len() - trimmed.len())
            .map_err(|_| ParseError::ExponentTooLarge)?;
        exponent += zeros;
        integer = trimmed;
    }

    integer = integer.trim_start_matches('0');
    if integer.is_empty() {
        fraction = fraction.trim_start_matches('0');
    }

    let literal = if integer.is_empty() && fraction.is_empty() {
        DecimalLiteral {
            negative,
            integer: DecimalLiteral::ZERO_DIGITS,
            fraction: "",
            exponent: 0,
        }
    } else {
        DecimalLiteral {
            negative,
            integer,
            fraction,
            exponent,
        }
    };
    Ok((literal, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    extern crate std;
    use std::string::String;

    fn digits(literal: &DecimalLiteral<'_>) -> String {
        literal.digits().map(char::from).collect()
    }

    fn parse(text: &str) -> (bool, String, i32, usize) {
        let (literal, consumed) = parse_decimal(text).expect("literal");
        (literal.is_negative(), digits(&literal), literal.exponent(), consumed)
    }

    #[test]
    fn integer_literals() {
        assert_eq!(parse("1"), (false, "1".into(), 0, 1));
        assert_eq!(parse("42mA"), (false, "42".into(), 0, 2));
        assert_eq!(parse("1000Hz"), (false, "1".into(), 3, 4));
        assert_eq!(parse("-200u"), (true, "2".into(), 2, 4));
        assert_eq!(parse("+7V"), (false, "7".into(), 0, 2));
    }

    #[test]
    fn fractional_literals() {
        assert_eq!(parse("12.5mA"), (false, "125".into(), -1, 4));
        assert_eq!(parse("12.50"), (false, "125".into(), -1, 5));
        assert_eq!(parse("0.005uF"), (false, "5".into(), -3, 5));
        assert_eq!(parse("10.5"), (false, "105".into(), -1, 4));
        assert_eq!(parse("100.0K"), (false, "1".into(), 2, 5));
        assert_eq!(parse(".5"), (false, "5".into(), -1, 2));
        assert_eq!(parse("5."), (false, "5".into(), 0, 2));
        assert_eq!(parse("-0.25Pi"), (true, "25".into(), -2, 5));
    }

    #[test]
    fn leading_zeros_are_not_significant() {
        assert_eq!(parse("007"), (false, "7".into(), 0, 3));
        assert_eq!(parse("00.0700"), (false, "7".into(), -2, 7));
    }

    #[test]
    fn zero_is_its_own_case() {
        for text in ["0", "00", "0.0", "-0", ".0", "0.", "000.000C"] {
            let (literal, _) = parse_decimal(text).expect("zero");
            assert!(literal.is_zero(), "{}", text);
            assert_eq!(digits(&literal), "0");
            assert_eq!(literal.exponent(), 0);
        }
    }

    #[test]
    fn scanning_stops_at_suffix() {
        let (_, consumed) = parse_decimal("2.4kA").expect("literal");
        assert_eq!(consumed, 3);
        let (_, consumed) = parse_decimal("1°").expect("literal");
        assert_eq!(consumed, 1);
        // a sign inside the number ends the literal
        let (_, consumed) = parse_decimal("5-3").expect("literal");
        assert_eq!(consumed, 1);
    }

    #[test]
    fn not_a_number() {
        for text in ["", "-", "+", ".", "-.", "mA", "Pi", "°C", " 1"] {
            assert_eq!(parse_decimal(text), Err(ParseError::NotANumber), "{:?}", text);
        }
    }

    #[test]
    fn multiple_points() {
        assert_eq!(
            parse_decimal("1.1.1.1"),
            Err(ParseError::MultipleDecimalPoints { position: 3 })
        );
        assert_eq!(
            parse_decimal("-1..2"),
            Err(ParseError::MultipleDecimalPoints { position: 3 })
        );
    }
}
