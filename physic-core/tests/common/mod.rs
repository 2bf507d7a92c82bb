//! Shared fixtures for integration tests
//!
//! This module provides:
//! - Tier boundary tables for the pico, nano and micro prefix families
//! - Degree rendering cases for angles
//! - Accepted spellings per kind with their expected storage values
//!
//! The tier tables are formatted with an empty unit symbol so that one table
//! covers every kind of the family.

#![allow(dead_code)]

use physic_core::format::{write_si, FormattedValue, PrefixFamily};
use physic_core::QuantityKind;

/// `(raw value, expected rendering)`
pub type FormatCase = (i64, &'static str);

/// `(input text, expected storage value)`
pub type ParseCase = (&'static str, i64);

/// Render `value` with the shared SI notation and no unit symbol
pub fn render(value: i64, family: PrefixFamily) -> FormattedValue {
    let mut out = FormattedValue::new();
    write_si(&mut out, value, family, "").expect("formatted value fits");
    out
}

/// Parse `text` as `kind`, panicking with the input on failure
pub fn parse_ok(kind: QuantityKind, text: &str) -> i64 {
    match kind.parse(text) {
        Ok(value) => value,
        Err(err) => panic!("{} rejected {:?}: {}", kind, text, err),
    }
}

pub const PICO_CASES: &[FormatCase] = &[
    (0, "0"),
    (1, "1p"),
    (-1, "-1p"),
    (900, "900p"),
    (999, "999p"),
    (-999, "-999p"),
    (1_000, "1n"),
    (-1_000, "-1n"),
    (1_100, "1.100n"),
    (999_999, "999.999n"),
    (1_000_000, "1µ"),
    (1_000_501, "1.001µ"),
    (-1_000_501, "-1.001µ"),
    (1_100_000, "1.100µ"),
    (999_999_501, "1m"),
    (-999_999_501, "-1m"),
    (999_999_999, "1m"),
    (1_000_000_000, "1m"),
    (1_100_000_000, "1.100m"),
    (999_999_499_999, "999.999m"),
    (-999_999_499_999, "-999.999m"),
    (999_999_500_001, "1"),
    (-999_999_500_001, "-1"),
    (1_000_000_000_000, "1"),
    (1_100_000_000_000, "1.100"),
    (999_999_499_999_999, "999.999"),
    (999_999_500_000_001, "1k"),
    (1_000_000_000_000_000, "1k"),
    (1_100_000_000_000_000, "1.100k"),
    (999_999_499_999_999_999, "999.999k"),
    (999_999_500_000_000_001, "1M"),
    (1_000_000_000_000_000_000, "1M"),
    (1_100_000_000_000_000_000, "1.100M"),
    (1_999_499_999_999_999_999, "1.999M"),
    (-1_999_499_999_999_999_999, "-1.999M"),
    (1_999_500_000_000_000_001, "2M"),
    (-1_999_500_000_000_000_001, "-2M"),
    (i64::MAX, "9.223M"),
    (-i64::MAX, "-9.223M"),
    (i64::MIN, "-9.223M"),
];

pub const NANO_CASES: &[FormatCase] = &[
    (0, "0"),
    (1, "1n"),
    (-1, "-1n"),
    (900, "900n"),
    (999, "999n"),
    (1_000, "1µ"),
    (-1_000, "-1µ"),
    (1_100, "1.100µ"),
    (999_999, "999.999µ"),
    (1_000_000, "1m"),
    (1_100_100, "1.100m"),
    (1_101_000, "1.101m"),
    (1_100_499, "1.100m"),
    (1_199_999, "1.200m"),
    (4_999_501, "5m"),
    (1_999_501, "2m"),
    (-1_100_501, "-1.101m"),
    (111_100_501, "111.101m"),
    (999_999_499, "999.999m"),
    (999_999_501, "1"),
    (999_999_999, "1"),
    (1_000_000_000, "1"),
    (-1_000_000_000, "-1"),
    (1_100_499_000, "1.100"),
    (-1_100_501_000, "-1.101"),
    (999_999_499_000, "999.999"),
    (999_999_499_999, "999.999"),
    (999_999_500_001, "1k"),
    (999_999_501_000, "1k"),
    (-999_999_999_999, "-1k"),
    (1_100_000_000_000, "1.100k"),
    (1_199_999_000_000, "1.200k"),
    (-1_100_501_000_000, "-1.101k"),
    (999_999_499_000_000, "999.999k"),
    (999_999_501_000_000, "1M"),
    (-999_999_999_999_999, "-1M"),
    (1_100_000_000_000_000, "1.100M"),
    (-1_100_501_000_000_000, "-1.101M"),
    (999_999_499_000_000_000, "999.999M"),
    (999_999_501_100_000_000, "1G"),
    (999_999_999_999_999_999, "1G"),
    (1_100_000_000_000_000_000, "1.100G"),
    (1_999_999_999_999_999_999, "2G"),
    (-1_999_999_999_999_999_999, "-2G"),
    (1_100_499_000_000_000_000, "1.100G"),
    (-1_100_501_000_000_000_000, "-1.101G"),
    (i64::MAX, "9.223G"),
    (-i64::MAX, "-9.223G"),
    (i64::MIN, "-9.223G"),
];

pub const MICRO_CASES: &[FormatCase] = &[
    (0, "0"),
    (1, "1µ"),
    (-1, "-1µ"),
    (999, "999µ"),
    (1_000, "1m"),
    (1_100, "1.100m"),
    (-1_100, "-1.100m"),
    (999_999, "999.999m"),
    (1_000_000, "1"),
    (1_000_501, "1.001"),
    (-1_000_501, "-1.001"),
    (999_999_501, "1k"),
    (999_999_999, "1k"),
    (1_100_000_000, "1.100k"),
    (999_999_499_999, "999.999k"),
    (999_999_500_001, "1M"),
    (-999_999_500_001, "-1M"),
    (1_100_000_000_000, "1.100M"),
    (999_999_499_999_999, "999.999M"),
    (999_999_500_000_001, "1G"),
    (1_100_000_000_000_000, "1.100G"),
    (999_999_499_999_999_999, "999.999G"),
    (999_999_500_000_000_001, "1T"),
    (1_999_499_999_999_999_999, "1.999T"),
    (1_999_500_000_000_000_001, "2T"),
    (i64::MAX, "9.223T"),
    (i64::MIN, "-9.223T"),
];

/// One degree in nanoradians
pub const DEGREE: i64 = 17_453_293;

pub const ANGLE_CASES: &[FormatCase] = &[
    (0, "0°"),
    (DEGREE / 10_000 + DEGREE / 2_000, "0.001°"),
    (-DEGREE / 10_000 - DEGREE / 2_000, "-0.001°"),
    (DEGREE / 1_000, "0.001°"),
    (DEGREE / 2, "0.500°"),
    (-DEGREE / 2, "-0.500°"),
    (DEGREE, "1.000°"),
    (-DEGREE, "-1.000°"),
    (10 * DEGREE, "10.00°"),
    (-10 * DEGREE, "-10.00°"),
    (100 * DEGREE, "100.0°"),
    (-100 * DEGREE, "-100.0°"),
    (1_000 * DEGREE, "1000°"),
    (-1_000 * DEGREE, "-1000°"),
    (100_000_000_000 * DEGREE, "100000000000°"),
    (-100_000_000_000 * DEGREE, "-100000000000°"),
    (i64::MAX - DEGREE, "528460276054°"),
    (-i64::MAX + DEGREE, "-528460276054°"),
    (3_141_592_653, "180.0°"),
    (6_283_185_307, "360.0°"),
    (1_000_000_000, "57.30°"),
];

pub const ANGLE_INPUTS: &[ParseCase] = &[
    ("1Degrees", DEGREE),
    ("-1Degrees", -DEGREE),
    ("180.00Degrees", 180 * DEGREE),
    ("0.5Degrees", 8_726_646),
    ("0.5°", 8_726_646),
    ("1nRadians", 1),
    ("1uRadians", 1_000),
    ("1mRadians", 1_000_000),
    ("0.5uRadians", 500),
    ("0.5mRadians", 500_000),
    ("1Radians", 1_000_000_000),
    ("1Pi", 3_141_592_653),
    ("2Pi", 6_283_185_306),
    ("-2Pi", -6_283_185_306),
    ("0.5Pi", 1_570_796_326),
    ("1π", 3_141_592_653),
    ("200", 200_000_000_000),
    ("200u", 200_000),
    ("1", 1_000_000_000),
];

pub const FREQUENCY_INPUTS: &[ParseCase] = &[
    ("1uHz", 1),
    ("10uHz", 10),
    ("100µHz", 100),
    ("1mHz", 1_000),
    ("100mHz", 100_000),
    ("1Hz", 1_000_000),
    ("10hz", 10_000_000),
    ("1kHz", 1_000_000_000),
    ("1MHz", 1_000_000_000_000),
    ("1GHz", 1_000_000_000_000_000),
    ("1THz", 1_000_000_000_000_000_000),
    ("12.345Hz", 12_345_000),
    ("-12.345Hz", -12_345_000),
    ("1", 1_000_000),
];

pub const DISTANCE_INPUTS: &[ParseCase] = &[
    ("1um", 1_000),
    ("100µm", 100_000),
    ("1mm", 1_000_000),
    ("100mm", 100_000_000),
    ("1m", 1_000_000_000),
    ("1km", 1_000_000_000_000),
    ("1Mm", 1_000_000_000_000_000),
    ("1Gm", 1_000_000_000_000_000_000),
    ("1metre", 1_000_000_000),
    ("10Metres", 10_000_000_000),
    ("1in", 25_400_000),
    ("1Inches", 25_400_000),
    ("1ft", 304_800_000),
    ("10Feet", 3_048_000_000),
    ("1Yard", 914_400_000),
    ("1miles", 1_609_344_000_000),
    ("2", 2_000_000_000),
];

pub const CAPACITANCE_INPUTS: &[ParseCase] = &[
    ("1pF", 1),
    ("100pF", 100),
    ("1nF", 1_000),
    ("1uF", 1_000_000),
    ("10µF", 10_000_000),
    ("1mF", 1_000_000_000),
    ("1F", 1_000_000_000_000),
    ("1kF", 1_000_000_000_000_000),
    ("1f", 1_000_000_000_000),
    ("1farad", 1_000_000_000_000),
    ("10Farads", 10_000_000_000_000),
];

pub const CURRENT_INPUTS: &[ParseCase] = &[
    ("1nA", 1),
    ("1uA", 1_000),
    ("1µA", 1_000),
    ("1mA", 1_000_000),
    ("12.5mA", 12_500_000),
    ("1A", 1_000_000_000),
    ("2.4kA", 2_400_000_000_000),
    ("1MA", 1_000_000_000_000_000),
    ("1GA", 1_000_000_000_000_000_000),
    ("1a", 1_000_000_000),
    ("2Amps", 2_000_000_000),
];

/// Render-after-parse cases: `(kind, input, rendering)`
pub const SHOWCASE: &[(QuantityKind, &str, &str)] = &[
    (QuantityKind::ElectricCurrent, "12.5mA", "12.500mA"),
    (QuantityKind::ElectricCurrent, "2.4kA", "2.400kA"),
    (QuantityKind::ElectricCurrent, "2Amps", "2A"),
    (QuantityKind::ElectricPotential, "250uV", "250µV"),
    (QuantityKind::ElectricResistance, "33.3kOhms", "33.300kΩ"),
    (QuantityKind::ElectricResistance, "5MOhm", "5MΩ"),
    (QuantityKind::Force, "9.8N", "9.800N"),
    (QuantityKind::Frequency, "10MHz", "10MHz"),
    (QuantityKind::Frequency, "10mHz", "10mHz"),
    (QuantityKind::Frequency, "1kHz", "1kHz"),
    (QuantityKind::Mass, "10mg", "10mg"),
    (QuantityKind::Mass, "16.5kg", "16.500kg"),
    (QuantityKind::Mass, "16Tonne", "16Mg"),
    (QuantityKind::Pressure, "300kPa", "300kPa"),
    (QuantityKind::Pressure, "16MPascal", "16MPa"),
    (QuantityKind::RelativeHumidity, "50.6%rH", "50.6%rH"),
    (QuantityKind::RelativeHumidity, "20%rH", "20%rH"),
    (QuantityKind::Speed, "10m/s", "10m/s"),
    (QuantityKind::Speed, "100km/h", "27.778m/s"),
    (QuantityKind::Speed, "2067fps", "630.022m/s"),
    (QuantityKind::Speed, "55mph", "24.587m/s"),
    (QuantityKind::Temperature, "1C", "1°C"),
    (QuantityKind::Temperature, "0C", "0"),
    (QuantityKind::Temperature, "5MK", "5M°C"),
    (QuantityKind::Temperature, "80F", "26.667°C"),
    (QuantityKind::Power, "25mW", "25mW"),
    (QuantityKind::Power, "1.21GW", "1.210GW"),
    (QuantityKind::ElectricalCapacitance, "22pF", "22pF"),
    (QuantityKind::LuminousFlux, "2.5Mlm", "2.500Mlm"),
    (QuantityKind::LuminousIntensity, "12cd", "12cd"),
    (QuantityKind::Energy, "4.2kJ", "4.200kJ"),
    (QuantityKind::Distance, "1Foot", "304.800mm"),
    (QuantityKind::Distance, "1Metre", "1m"),
    (QuantityKind::Distance, "9Mile", "14.484km"),
    (QuantityKind::Angle, "2Pi", "360.0°"),
    (QuantityKind::Angle, "90Degrees", "90.00°"),
    (QuantityKind::Angle, "1Radian", "57.30°"),
];
