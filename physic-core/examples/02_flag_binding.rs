//! Command-Line Flag Binding
//!
//! Quantities implement `FromStr` and `Display`, so they plug straight into
//! clap as typed arguments. Defaults render through the same formatter that
//! `--help` shows.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_flag_binding -- --limit 250mA --rate 2.4kHz
//! cargo run --example 02_flag_binding -- --limit 3.3V   # rejected
//! ```

use clap::Parser;
use physic_core::quantities::{ElectricCurrent, ElectricPotential, Frequency, Temperature};
use physic_core::TextValue;

/// Bench supply controller
#[derive(Debug, Parser)]
struct Args {
    /// Output voltage
    #[arg(long, default_value_t = 5 * ElectricPotential::VOLT)]
    voltage: ElectricPotential,

    /// Current limit
    #[arg(long, default_value_t = 100 * ElectricCurrent::MILLIAMPERE)]
    limit: ElectricCurrent,

    /// Telemetry sample rate
    #[arg(long, default_value_t = 10 * Frequency::HERTZ)]
    rate: Frequency,

    /// Shut down above this heatsink temperature
    #[arg(long)]
    shutdown: Option<Temperature>,
}

fn main() {
    let args = Args::parse();

    println!("voltage:  {}", args.voltage);
    println!("limit:    {}", args.limit);
    println!("rate:     {}", args.rate);
    if let Some(period) = args.rate.period() {
        println!("period:   {:?}", period);
    }

    // Settings from outside argv go through the same trait
    let mut shutdown = args
        .shutdown
        .unwrap_or(Temperature::ZERO_CELSIUS + 85 * Temperature::KELVIN);
    if let Ok(text) = std::env::var("SUPPLY_SHUTDOWN") {
        if let Err(err) = shutdown.set_from_text(&text) {
            eprintln!("ignoring SUPPLY_SHUTDOWN={:?}: {}", text, err);
        }
    }
    println!("shutdown: {}", shutdown.format_to_text());
}
