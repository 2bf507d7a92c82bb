//! Serde integration tests
//!
//! Quantities embedded in JSON configuration read from any accepted spelling
//! or from a raw integer, and write back as an exact decimal of the SI unit
//! that reads back to the same stored value.

#![cfg(feature = "serde")]

use physic_core::quantities::{
    Angle, Distance, ElectricCurrent, ElectricPotential, ElectricResistance,
    ElectricalCapacitance, Energy, Force, Frequency, LuminousFlux, LuminousIntensity, Mass,
    Power, Pressure, RelativeHumidity, Speed, Temperature,
};
use physic_core::Quantity;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct ChannelConfig {
    name: String,
    supply: ElectricPotential,
    limit: ElectricCurrent,
    sample_rate: Frequency,
    #[serde(default)]
    alarm: Option<Temperature>,
}

fn round_trip<Q>(value: Q) -> Q
where
    Q: Quantity + Serialize + DeserializeOwned,
{
    let json = serde_json::to_string(&value).expect("serialize");
    serde_json::from_str(&json).unwrap_or_else(|err| panic!("{} rejected: {}", json, err))
}

macro_rules! assert_round_trips {
    ($($ty:ident),+ $(,)?) => {
        $(
            for raw in [0, 1, -1, 1_234_567, i64::from(i32::MAX), i64::from(i32::MIN)] {
                let value = $ty::from_base(raw).expect("fits");
                assert_eq!(round_trip(value), value, "{} {}", stringify!($ty), raw);
            }
        )+
    };
}

#[test]
fn serializes_as_exact_text() {
    let limit = 12_500 * ElectricCurrent::MICROAMPERE;
    assert_eq!(serde_json::to_string(&limit).expect("serialize"), "\"0.0125A\"");
    assert_eq!(
        serde_json::to_string(&Temperature::ZERO_CELSIUS).expect("serialize"),
        "\"273.15K\""
    );
    assert_eq!(
        serde_json::to_string(&(50 * RelativeHumidity::PERCENT_RH)).expect("serialize"),
        "\"0.5rH\""
    );
    assert_eq!(serde_json::to_string(&Mass(0)).expect("serialize"), "\"0g\"");
}

#[test]
fn every_kind_round_trips_zero_and_small_values() {
    assert_round_trips!(
        Angle,
        Distance,
        ElectricCurrent,
        ElectricPotential,
        ElectricResistance,
        ElectricalCapacitance,
        Force,
        Frequency,
        Mass,
        Pressure,
        RelativeHumidity,
        Speed,
        Temperature,
        Power,
        Energy,
        LuminousIntensity,
        LuminousFlux,
    );
    assert_eq!(round_trip(Temperature::ZERO_CELSIUS), Temperature::ZERO_CELSIUS);
}

#[test]
fn values_finer_than_the_display_survive() {
    let current = ElectricCurrent(1_234_567_891);
    assert_eq!(current.to_string(), "1.235A");
    assert_eq!(serde_json::to_string(&current).expect("serialize"), "\"1.234567891A\"");
    assert_eq!(round_trip(current), current);

    for value in [
        Temperature(1),
        Temperature(i64::MIN),
        Temperature(i64::MAX),
        Temperature::from_milli_celsius(-40_001),
    ] {
        assert_eq!(round_trip(value), value);
    }
    assert_eq!(round_trip(ElectricalCapacitance(i64::MIN)), ElectricalCapacitance(i64::MIN));
    assert_eq!(round_trip(Frequency(16_666)), Frequency(16_666));
    assert_eq!(round_trip(Angle(1_570_796_327)), Angle(1_570_796_327));
    assert_eq!(round_trip(RelativeHumidity(-3)), RelativeHumidity(-3));
}

#[test]
fn deserializes_text_and_raw_integers() {
    let from_text: ElectricCurrent = serde_json::from_str("\"2.4kA\"").expect("text");
    assert_eq!(from_text, 2_400 * ElectricCurrent::AMPERE);

    let from_raw: ElectricCurrent = serde_json::from_str("12500000").expect("integer");
    assert_eq!(from_raw, 12_500 * ElectricCurrent::MICROAMPERE);

    let negative: ElectricCurrent = serde_json::from_str("-1").expect("negative integer");
    assert_eq!(negative, ElectricCurrent(-1));
}

#[test]
fn narrow_kinds_reject_out_of_range_integers() {
    let result: Result<RelativeHumidity, _> = serde_json::from_str("3000000000");
    assert!(result.is_err());
    let result: Result<RelativeHumidity, _> = serde_json::from_str("\"21475%rH\"");
    assert!(result.is_err());
}

#[test]
fn bad_text_reports_parse_error() {
    let err = serde_json::from_str::<ElectricPotential>("\"3.3\"").expect_err("no unit");
    assert!(err.to_string().contains("need V"), "{}", err);

    let err = serde_json::from_str::<ElectricPotential>("true").expect_err("not a value");
    assert!(err.to_string().contains("integer count of storage units"), "{}", err);
}

#[test]
fn config_round_trip() {
    let json = r#"{
        "name": "heater",
        "supply": "24V",
        "limit": "1.5A",
        "sample_rate": "10Hz",
        "alarm": "80C"
    }"#;
    let config: ChannelConfig = serde_json::from_str(json).expect("config parses");
    assert_eq!(config.supply, 24 * ElectricPotential::VOLT);
    assert_eq!(config.limit, 1_500 * ElectricCurrent::MILLIAMPERE);
    assert_eq!(config.sample_rate, 10 * Frequency::HERTZ);
    assert_eq!(
        config.alarm,
        Some(Temperature::ZERO_CELSIUS + 80 * Temperature::KELVIN)
    );

    let written = serde_json::to_value(&config).expect("serialize");
    assert_eq!(written["limit"], "1.5A");
    assert_eq!(written["sample_rate"], "10Hz");
    assert_eq!(written["alarm"], "353.15K");

    let again: ChannelConfig = serde_json::from_value(written).expect("reparse");
    assert_eq!(again, config);
}

#[test]
fn missing_optional_quantity() {
    let json = r#"{"name":"fan","supply":"12V","limit":"200mA","sample_rate":"1kHz"}"#;
    let config: ChannelConfig = serde_json::from_str(json).expect("config parses");
    assert_eq!(config.alarm, None);
}
