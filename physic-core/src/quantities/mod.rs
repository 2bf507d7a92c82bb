//! Typed Physical Quantities
//!
//! ## Overview
//!
//! One newtype per [`QuantityKind`](crate::registry::QuantityKind), each
//! wrapping the integer count of its storage unit. The wrappers are `Copy`,
//! totally ordered and carry no per-kind logic beyond their unit constants.
//! Parsing and formatting go through the shared registry engine.
//!
//! ```rust
//! use physic_core::quantities::{Distance, ElectricCurrent, Temperature};
//!
//! let current: ElectricCurrent = "12.5mA".parse().unwrap();
//! assert_eq!(current, 12_500 * ElectricCurrent::MICROAMPERE);
//! assert_eq!(current.to_string(), "12.500mA");
//!
//! let run: Distance = "9Mile".parse().unwrap();
//! assert_eq!(run.to_string(), "14.484km");
//!
//! assert_eq!(Temperature::ZERO_CELSIUS.to_string(), "0");
//! ```
//!
//! ## Grouping
//!
//! - [`geometry`]: angle, distance, speed
//! - [`electrical`]: current, potential, resistance, capacitance, power, energy
//! - [`mechanical`]: force, mass, pressure
//! - [`environment`]: temperature, relative humidity
//! - [`light`]: luminous intensity, luminous flux
//! - [`frequency`]: frequency and its period
//!
//! ## Serialization
//!
//! With the `serde` feature, human-readable formats (JSON, TOML, ...) carry
//! quantities as an exact decimal of the SI unit, e.g. `"0.0125A"` or
//! `"1.234567891A"`. The display form rounds to three fraction digits and is
//! not used here. Deserialization accepts any spelling the parser
//! understands, or a bare integer in storage units. Binary formats carry the
//! raw integer.
//!
//! ## Arithmetic
//!
//! `+`, `-`, unary `-`, `*` and `/` follow the integer operators underneath:
//! they panic on overflow in debug builds and wrap in release builds. Use
//! [`checked_add`](ElectricCurrent::checked_add) and friends where the
//! operands are not known to be in range.

/// Declare a newtype quantity bound to one registry kind.
macro_rules! quantity {
    (
        $(#[$meta:meta])*
        $name:ident($repr:ty) => $kind:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        #[repr(transparent)]
        pub struct $name(pub $repr);

        impl $name {
            /// Wrap a raw count of storage units
            pub const fn new(raw: $repr) -> Self {
                Self(raw)
            }

            /// Raw count of storage units
            pub const fn raw(self) -> $repr {
                self.0
            }

            /// Checked addition
            pub fn checked_add(self, rhs: Self) -> Option<Self> {
                self.0.checked_add(rhs.0).map(Self)
            }

            /// Checked subtraction
            pub fn checked_sub(self, rhs: Self) -> Option<Self> {
                self.0.checked_sub(rhs.0).map(Self)
            }

            /// Checked negation; `None` for the most negative value
            pub fn checked_neg(self) -> Option<Self> {
                self.0.checked_neg().map(Self)
            }

            /// Checked scaling by an integer factor
            pub fn checked_mul(self, factor: $repr) -> Option<Self> {
                self.0.checked_mul(factor).map(Self)
            }
        }

        impl $crate::traits::Quantity for $name {
            const KIND: $crate::registry::QuantityKind = $crate::registry::QuantityKind::$kind;

            fn from_base(raw: i64) -> Option<Self> {
                <$repr>::try_from(raw).ok().map(Self)
            }

            fn base(self) -> i64 {
                i64::from(self.0)
            }
        }

        impl core::str::FromStr for $name {
            type Err = $crate::errors::ParseError;

            fn from_str(text: &str) -> Result<Self, Self::Err> {
                <Self as $crate::traits::Quantity>::parse_text(text)
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.pad(<Self as $crate::traits::Quantity>::format(*self).as_str())
            }
        }

        impl core::ops::Add for $name {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl core::ops::Sub for $name {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl core::ops::Neg for $name {
            type Output = Self;
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl core::ops::Mul<$repr> for $name {
            type Output = Self;
            fn mul(self, rhs: $repr) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl core::ops::Mul<$name> for $repr {
            type Output = $name;
            fn mul(self, rhs: $name) -> $name {
                $name(self * rhs.0)
            }
        }

        impl core::ops::Div<$repr> for $name {
            type Output = Self;
            fn div(self, rhs: $repr) -> Self {
                Self(self.0 / rhs)
            }
        }

        impl core::ops::AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                self.0 += rhs.0;
            }
        }

        impl core::ops::SubAssign for $name {
            fn sub_assign(&mut self, rhs: Self) {
                self.0 -= rhs.0;
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                if serializer.is_human_readable() {
                    let text = <Self as $crate::traits::Quantity>::KIND.format_exact(i64::from(self.0));
                    serializer.serialize_str(text.as_str())
                } else {
                    serializer.serialize_i64(i64::from(self.0))
                }
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let visitor = $crate::quantities::serde_support::QuantityVisitor::<Self>::new();
                if deserializer.is_human_readable() {
                    deserializer.deserialize_any(visitor)
                } else {
                    deserializer.deserialize_i64(visitor)
                }
            }
        }

        #[cfg(feature = "defmt")]
        impl defmt::Format for $name {
            fn format(&self, fmt: defmt::Formatter) {
                let text = <Self as $crate::traits::Quantity>::format(*self);
                defmt::write!(fmt, "{=str}", text.as_str());
            }
        }
    };
}

pub mod electrical;
pub mod environment;
pub mod frequency;
pub mod geometry;
pub mod light;
pub mod mechanical;

pub use electrical::{
    ElectricCurrent, ElectricPotential, ElectricResistance, ElectricalCapacitance, Energy, Power,
};
pub use environment::{RelativeHumidity, Temperature};
pub use frequency::Frequency;
pub use geometry::{Angle, Distance, Speed};
pub use light::{LuminousFlux, LuminousIntensity};
pub use mechanical::{Force, Mass, Pressure};

/// Parse a frequency such as `"10MHz"` or `"100µHz"`
pub fn parse_frequency(text: &str) -> crate::errors::ParseResult<Frequency> {
    text.parse()
}

#[cfg(feature = "serde")]
pub(crate) mod serde_support {
    use core::fmt;
    use core::marker::PhantomData;

    use serde::de::{self, Unexpected, Visitor};

    use crate::traits::Quantity;

    pub(crate) struct QuantityVisitor<Q>(PhantomData<Q>);

    impl<Q> QuantityVisitor<Q> {
        pub(crate) const fn new() -> Self {
            Self(PhantomData)
        }
    }

    impl<'de, Q: Quantity> Visitor<'de> for QuantityVisitor<Q> {
        type Value = Q;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(
                f,
                "a {} in {} or an integer count of storage units",
                Q::KIND.name(),
                Q::KIND.spec().expected
            )
        }

        fn visit_str<E: de::Error>(self, text: &str) -> Result<Q, E> {
            Q::parse_text(text).map_err(E::custom)
        }

        fn visit_i64<E: de::Error>(self, raw: i64) -> Result<Q, E> {
            Q::from_base(raw).ok_or_else(|| E::invalid_value(Unexpected::Signed(raw), &self))
        }

        fn visit_u64<E: de::Error>(self, raw: u64) -> Result<Q, E> {
            i64::try_from(raw)
                .ok()
                .and_then(Q::from_base)
                .ok_or_else(|| E::invalid_value(Unexpected::Unsigned(raw), &self))
        }
    }
}
