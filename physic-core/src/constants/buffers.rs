//! Buffer Sizes for Allocation-Free Formatting
//!
//! Formatting writes into fixed-capacity `heapless` strings so it can run on
//! targets without an allocator.

/// Capacity in bytes of a formatted quantity.
///
/// The longest renderings are:
/// - `-9.223G` plus a three-byte symbol such as `m/s` (SI notation)
/// - `-528460276054°` (degree notation, `°` is two bytes)
/// - `-92233720368547.7%rH` (humidity notation fed an `i64::MIN`)
/// - `-9223372036.854775808Radian` (exact rendering of an angle)
///
/// None exceeds 28 bytes.
pub const FORMAT_CAPACITY: usize = 32;
