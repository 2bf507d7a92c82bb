//! Sensor Readout
//!
//! Converts raw readings from a simulated environmental board into typed
//! quantities and prints a log line per sample. Readings are integer counts
//! straight from the ADC driver; no floating point is involved.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_sensor_readout
//! ```

use physic_core::quantities::{
    ElectricCurrent, ElectricPotential, Power, RelativeHumidity, Temperature,
};

/// One sample as delivered by the board driver
struct Sample {
    /// Millidegrees Celsius
    temperature_mc: i64,
    /// Hundredths of a percent relative humidity
    humidity_centi: i32,
    /// Bus voltage in millivolts
    bus_mv: i64,
    /// Shunt current in microamperes
    shunt_ua: i64,
}

const SAMPLES: &[Sample] = &[
    Sample { temperature_mc: 21_375, humidity_centi: 4_512, bus_mv: 12_040, shunt_ua: 350_000 },
    Sample { temperature_mc: 21_500, humidity_centi: 4_498, bus_mv: 12_010, shunt_ua: 1_250_000 },
    Sample { temperature_mc: -5_125, humidity_centi: 8_870, bus_mv: 11_870, shunt_ua: 980 },
    Sample { temperature_mc: 0, humidity_centi: 10_000, bus_mv: 0, shunt_ua: 0 },
];

fn main() {
    println!("Sensor Readout Example");
    println!("======================\n");

    let centi_rh = RelativeHumidity::PERCENT_RH / 100;
    let mut total = Power::default();
    for (i, sample) in SAMPLES.iter().enumerate() {
        let temperature = Temperature::from_milli_celsius(sample.temperature_mc);
        let humidity = sample.humidity_centi * centi_rh;
        let bus = sample.bus_mv * ElectricPotential::MILLIVOLT;
        let current = sample.shunt_ua * ElectricCurrent::MICROAMPERE;
        // mV * µA = nW
        let power = sample.bus_mv * sample.shunt_ua * Power::NANOWATT;
        total += power;

        println!(
            "#{} temp={:>9} rh={:>8} bus={:>8} i={:>9} p={:>9}",
            i, temperature, humidity, bus, current, power
        );
    }

    println!("\nsum of sampled power: {}", total);
    println!(
        "first sample back in millidegrees: {}",
        Temperature::from_milli_celsius(SAMPLES[0].temperature_mc).to_milli_celsius()
    );
}
