//! Powers of Ten and Storage Exponents
//!
//! Every kind stores its value as an integer count of a small base unit.
//! The exponent of that unit relative to the SI unit is the kind's storage
//! exponent; parsing shifts the literal by `prefix - storage` decimal places.

/// Positive powers of ten such that `POWERS_OF_TEN[n] == 10^n`.
///
/// 10^18 is the largest power that fits both `u64` and `i64`. Shifts beyond
/// this table are rejected rather than computed.
pub const POWERS_OF_TEN: [u64; 19] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
];

/// Largest decimal shift the converter accepts in either direction.
pub const MAX_SHIFT: u32 = 18;

// ===== STORAGE EXPONENTS =====

/// Storage exponent of picounit kinds (capacitance).
pub const STORAGE_PICO: i32 = -12;

/// Storage exponent of nanounit kinds (most kinds).
pub const STORAGE_NANO: i32 = -9;

/// Storage exponent of microunit kinds (frequency).
pub const STORAGE_MICRO: i32 = -6;

/// Storage exponent of relative humidity.
///
/// One stored unit is 10^-7 of the bare `rH` ratio, which is 0.00001 %rH.
pub const STORAGE_HUMIDITY: i32 = -7;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_powers_of_ten() {
        let mut expected = 1u64;
        for (n, value) in POWERS_OF_TEN.iter().enumerate() {
            assert_eq!(*value, expected, "10^{}", n);
            expected = expected.saturating_mul(10);
        }
        assert_eq!(POWERS_OF_TEN.len(), MAX_SHIFT as usize + 1);
    }
}
