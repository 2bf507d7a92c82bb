//! Magnitude-Aware Formatting
//!
//! ## Output Shape
//!
//! Shared SI notation renders an integer count of storage units as
//!
//! ```text
//! [-] whole [.ddd] [prefix] symbol
//! ```
//!
//! with exactly three fraction digits when the fraction is non-zero and none
//! otherwise: `12500000` nanoamperes is `12.500mA`, `2000000000` is `2A`.
//!
//! ## Tiers
//!
//! The magnitude picks one of seven tiers. Thresholds and divisors are shared
//! by every family; only the prefix letters move:
//!
//! ```text
//! tier  magnitude >=               divisor  pico  nano  micro
//!  0    999 999 500 000 000 001    10^15    M     G     T
//!  1    999 999 500 000 001        10^12    k     M     G
//!  2    999 999 500 001            10^9     -     k     M
//!  3    999 999 501                10^6     m     -     k
//!  4    1 000 000                  10^3     µ     m     -
//!  5    1 000                      1        n     µ     m
//!  6    1                          (whole)  p     n     µ
//! ```
//!
//! Thresholds sit half a thousandth below the next power so that a value
//! which would round up to `1000.000` is shown as `1` of the next prefix
//! instead. Rounding is half-up on the remainder (`rem * 2 > divisor`).
//!
//! ## Bespoke Notations
//!
//! - Angles are never SI-prefixed. They print in degrees with a number of
//!   fraction digits that shrinks as the angle grows.
//! - Relative humidity prints in percent with at most one fraction digit.

use core::fmt::{self, Write};

use heapless::String;

use crate::constants::units::{MILLI_RH, NANORADIAN_PER_DEGREE};
use crate::constants::{FORMAT_CAPACITY, POWERS_OF_TEN};
use crate::prefix::SiPrefix;

/// Fixed-capacity string holding a formatted quantity
pub type FormattedValue = String<FORMAT_CAPACITY>;

/// `(threshold, divisor)` for tiers 0 to 5; tier 6 is everything below.
const TIERS: [(u64, u64); 6] = [
    (999_999_500_000_000_001, 1_000_000_000_000_000),
    (999_999_500_000_001, 1_000_000_000_000),
    (999_999_500_001, 1_000_000_000),
    (999_999_501, 1_000_000),
    (1_000_000, 1_000),
    (1_000, 1),
];

/// Storage resolution of a kind, which fixes its row of display prefixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PrefixFamily {
    /// Stored in 10^-12 units (capacitance)
    Pico,
    /// Stored in 10^-9 units
    Nano,
    /// Stored in 10^-6 units (frequency)
    Micro,
}

impl PrefixFamily {
    /// Display prefixes from tier 0 (largest) to tier 6 (smallest);
    /// `None` is the bare unit
    pub const fn ladder(self) -> [Option<SiPrefix>; 7] {
        use SiPrefix::*;
        match self {
            Self::Pico => [Some(Mega), Some(Kilo), None, Some(Milli), Some(Micro), Some(Nano), Some(Pico)],
            Self::Nano => [Some(Giga), Some(Mega), Some(Kilo), None, Some(Milli), Some(Micro), Some(Nano)],
            Self::Micro => [Some(Tera), Some(Giga), Some(Mega), Some(Kilo), None, Some(Milli), Some(Micro)],
        }
    }

    /// Symbol written for `tier`
    fn prefix(self, tier: usize) -> &'static str {
        self.ladder()[tier].map_or("", SiPrefix::symbol)
    }
}

/// How a kind renders its values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// Shared SI tiers followed by `symbol`; `zero` is subtracted first
    Si {
        /// Prefix row matching the storage resolution
        family: PrefixFamily,
        /// Unit symbol appended after the prefix
        symbol: &'static str,
        /// Stored value that renders as zero (0 °C for temperature)
        zero: i64,
    },
    /// Degrees with magnitude-dependent precision
    Degrees,
    /// Percent relative humidity with one fraction digit
    Humidity,
}

impl Notation {
    /// Render `value` (in storage units) into `out`
    pub fn write<W: Write>(&self, out: &mut W, value: i64) -> fmt::Result {
        match *self {
            Self::Si { family, symbol, zero } => {
                write_si(out, value.saturating_sub(zero), family, symbol)
            }
            Self::Degrees => write_degrees(out, value),
            Self::Humidity => write_humidity(out, value),
        }
    }

    /// Stored value rendered as a bare `0`
    pub const fn zero_point(&self) -> i64 {
        match *self {
            Self::Si { zero, .. } => zero,
            Self::Degrees | Self::Humidity => 0,
        }
    }

    /// Render `value` into a fresh [`FormattedValue`]
    pub fn format(&self, value: i64) -> FormattedValue {
        let mut out = FormattedValue::new();
        // The longest rendering is well under the capacity.
        let _ = self.write(&mut out, value);
        out
    }
}

/// Write `value` with shared SI notation.
///
/// Zero is written as a bare `0` without prefix or symbol. `i64::MIN` is
/// shown as `-i64::MAX`.
pub fn write_si<W: Write>(
    out: &mut W,
    value: i64,
    family: PrefixFamily,
    symbol: &str,
) -> fmt::Result {
    if value == 0 {
        return out.write_char('0');
    }
    let sign = if value < 0 { "-" } else { "" };
    let magnitude = value.checked_abs().unwrap_or(i64::MAX).unsigned_abs();
    for (tier, &(threshold, divisor)) in TIERS.iter().enumerate() {
        if magnitude >= threshold {
            let mut thousandths = magnitude / divisor;
            if (magnitude % divisor) * 2 > divisor {
                thousandths += 1;
            }
            let whole = thousandths / 1_000;
            let fraction = thousandths % 1_000;
            return if fraction == 0 {
                write!(out, "{}{}{}{}", sign, whole, family.prefix(tier), symbol)
            } else {
                write!(out, "{}{}.{:03}{}{}", sign, whole, fraction, family.prefix(tier), symbol)
            };
        }
    }
    write!(out, "{}{}{}{}", sign, magnitude, family.prefix(6), symbol)
}

/// Write `value` exactly, as a plain decimal of the SI unit followed by `unit`.
///
/// `storage_exponent` is the power of ten of one stored count (`-9` for
/// nanoamperes). Every digit is kept and trailing fraction zeros are dropped,
/// so `1234567891` nanoamperes with unit `A` is `1.234567891A` and zero is
/// `0A`. Unlike the display notations this never rounds; parsing the output
/// with the same unit returns `value`.
pub fn write_exact<W: Write>(
    out: &mut W,
    value: i64,
    storage_exponent: i32,
    unit: &str,
) -> fmt::Result {
    let sign = if value < 0 { "-" } else { "" };
    let magnitude = u128::from(value.unsigned_abs());
    if storage_exponent >= 0 {
        let scale = 10u128.checked_pow(storage_exponent.unsigned_abs()).ok_or(fmt::Error)?;
        let whole = magnitude.checked_mul(scale).ok_or(fmt::Error)?;
        return write!(out, "{}{}{}", sign, whole, unit);
    }
    let places = storage_exponent.unsigned_abs();
    let step = 10u128.checked_pow(places).ok_or(fmt::Error)?;
    let whole = magnitude / step;
    let mut fraction = magnitude % step;
    if fraction == 0 {
        return write!(out, "{}{}{}", sign, whole, unit);
    }
    let mut width = places as usize;
    while fraction % 10 == 0 {
        fraction /= 10;
        width -= 1;
    }
    write!(out, "{}{}.{:0width$}{}", sign, whole, fraction, unit, width = width)
}

/// Write a nanoradian `value` in degrees.
///
/// Three fraction digits below 10°, two below 100°, one below 1000° and
/// none above. Each band rounds half-up at its own resolution.
pub fn write_degrees<W: Write>(out: &mut W, value: i64) -> fmt::Result {
    if value == 0 {
        return out.write_str("0°");
    }
    let sign = if value < 0 { "-" } else { "" };
    let magnitude = value.unsigned_abs();
    let degree = NANORADIAN_PER_DEGREE.unsigned_abs();

    let digits = if magnitude < 10 * degree {
        3
    } else if magnitude < 100 * degree {
        2
    } else if magnitude < 1_000 * degree {
        1
    } else {
        0
    };
    let step = POWERS_OF_TEN[digits];
    // magnitude * step stays below 10^12 whenever digits > 0
    let units = (magnitude * step + degree / 2) / degree;

    if digits == 0 {
        write!(out, "{}{}°", sign, units)
    } else {
        write!(
            out,
            "{}{}.{:0width$}°",
            sign,
            units / step,
            units % step,
            width = digits
        )
    }
}

/// Write a relative humidity `value` (0.00001 %rH units) in percent.
///
/// Truncates to a tenth of a percent. Negative readings keep their sign
/// even when the whole part is zero.
pub fn write_humidity<W: Write>(out: &mut W, value: i64) -> fmt::Result {
    let tenths = value / i64::from(MILLI_RH);
    let sign = if tenths < 0 { "-" } else { "" };
    let whole = tenths.unsigned_abs() / 10;
    let fraction = tenths.unsigned_abs() % 10;
    if fraction == 0 {
        write!(out, "{}{}%rH", sign, whole)
    } else {
        write!(out, "{}{}.{}%rH", sign, whole, fraction)
    }
}
