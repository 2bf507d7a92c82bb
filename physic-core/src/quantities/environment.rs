//! Temperature and relative humidity
//!
//! ## Temperature
//!
//! Stored as absolute nanokelvin, so every reading is comparable without
//! knowing which scale it was typed in. Parsing accepts `K`, `C`/`°C` and
//! `F`/`°F`; any SI prefix applies to the number before the scale offset:
//!
//! ```text
//! "25C"   -> 25 K + 273.15 K  = 298.15 K
//! "80F"   -> (80 + 459.67) × 5/9 K ≈ 299.817 K
//! "5MK"   -> 5 000 000 K
//! ```
//!
//! Formatting always shows Celsius. 0 °C itself prints as a bare `0`.
//!
//! ## Relative Humidity
//!
//! Stored as a 32-bit count of 0.00001 %rH. Input is either a ratio (`rH`,
//! `0.5rH` is 50 %) or a percentage (`%rH`). No SI prefix is accepted.
//! Output is truncated to a tenth of a percent.

use crate::constants::units::{
    FAHRENHEIT_NANOKELVIN, MICRO_RH, MILLI_RH, PERCENT_RH, ZERO_CELSIUS_NANOKELVIN,
    ZERO_FAHRENHEIT_NANOKELVIN,
};

quantity! {
    /// Thermodynamic temperature in nanokelvin; the largest value is about
    /// 9.2 GK.
    Temperature(i64) => Temperature
}

impl Temperature {
    /// 1 nK
    pub const NANOKELVIN: Self = Self(1);
    /// 1 µK
    pub const MICROKELVIN: Self = Self(1_000);
    /// 1 mK
    pub const MILLIKELVIN: Self = Self(1_000_000);
    /// 1 K
    pub const KELVIN: Self = Self(1_000_000_000);
    /// 1 kK
    pub const KILOKELVIN: Self = Self(1_000_000_000_000);
    /// 1 MK
    pub const MEGAKELVIN: Self = Self(1_000_000_000_000_000);
    /// 1 GK
    pub const GIGAKELVIN: Self = Self(1_000_000_000_000_000_000);

    /// 0 °C as an absolute temperature
    pub const ZERO_CELSIUS: Self = Self(ZERO_CELSIUS_NANOKELVIN);
    /// Step of 0.001 °C
    pub const MILLI_CELSIUS: Self = Self::MILLIKELVIN;
    /// Step of 1 °C
    pub const CELSIUS: Self = Self::KELVIN;

    /// 0 °F as an absolute temperature
    pub const ZERO_FAHRENHEIT: Self = Self(ZERO_FAHRENHEIT_NANOKELVIN);
    /// Step of 0.001 °F
    pub const MILLI_FAHRENHEIT: Self = Self(FAHRENHEIT_NANOKELVIN / 1_000);
    /// Step of 1 °F
    pub const FAHRENHEIT: Self = Self(FAHRENHEIT_NANOKELVIN);

    /// Build from a Celsius reading in millidegrees
    ///
    /// # Panics
    ///
    /// Overflows, and so panics in debug builds, outside roughly ±9.2 million
    /// °C. [`Temperature::checked_from_milli_celsius`] never panics.
    pub const fn from_milli_celsius(milli: i64) -> Self {
        Self(ZERO_CELSIUS_NANOKELVIN + milli * 1_000_000)
    }

    /// Like [`Temperature::from_milli_celsius`], `None` when out of range
    pub const fn checked_from_milli_celsius(milli: i64) -> Option<Self> {
        match milli.checked_mul(1_000_000) {
            Some(nano) => match nano.checked_add(ZERO_CELSIUS_NANOKELVIN) {
                Some(raw) => Some(Self(raw)),
                None => None,
            },
            None => None,
        }
    }

    /// Celsius reading in millidegrees, truncated toward zero
    ///
    /// Total over the whole range.
    pub const fn to_milli_celsius(self) -> i64 {
        // |difference| / 10^6 always fits back into i64
        ((self.0 as i128 - ZERO_CELSIUS_NANOKELVIN as i128) / 1_000_000) as i64
    }
}

quantity! {
    /// Relative humidity in 0.00001 %rH.
    ///
    /// The 32-bit range tops out at about 21 474 %rH, far beyond any real
    /// reading; supersaturated and slightly negative values from drifting
    /// sensors are both representable.
    RelativeHumidity(i32) => RelativeHumidity
}

impl RelativeHumidity {
    /// 0.00001 %rH, the storage unit
    pub const TENTH_MICRO_RH: Self = Self(1);
    /// 0.0001 %rH
    pub const MICRO_RH: Self = Self(MICRO_RH);
    /// 0.1 %rH
    pub const MILLI_RH: Self = Self(MILLI_RH);
    /// 1 %rH
    pub const PERCENT_RH: Self = Self(PERCENT_RH);
}
