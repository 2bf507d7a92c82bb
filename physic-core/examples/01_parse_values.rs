//! Parsing and Formatting Values
//!
//! Walks through the dynamic API: pick a quantity kind at runtime, parse a
//! few human-typed strings into fixed-point integers, and render them back.
//!
//! ## What You'll Learn
//!
//! - Which spellings each kind accepts
//! - How values are stored (nanoamperes, microhertz, ...)
//! - What each failure looks like
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_parse_values
//! ```

use physic_core::{ParseError, QuantityKind};

fn main() {
    println!("Physic Parse/Format Example");
    println!("===========================\n");

    let inputs = [
        (QuantityKind::ElectricCurrent, "12.5mA"),
        (QuantityKind::ElectricCurrent, "-0.000000001A"),
        (QuantityKind::Frequency, "2.4GHz"),
        (QuantityKind::Frequency, "100µHz"),
        (QuantityKind::Temperature, "-20C"),
        (QuantityKind::Temperature, "98.6°F"),
        (QuantityKind::Distance, "5ft"),
        (QuantityKind::Mass, "2.2oz"),
        (QuantityKind::Angle, "90°"),
        (QuantityKind::RelativeHumidity, "50.6%rH"),
    ];

    println!("Accepted inputs:");
    for (kind, text) in inputs {
        match kind.parse(text) {
            Ok(raw) => println!(
                "  {:<24} {:>14} -> {:>22} -> {}",
                kind.name(),
                text,
                raw,
                kind.format(raw)
            ),
            Err(err) => println!("  {:<24} {:>14} -> unexpected error: {}", kind.name(), text, err),
        }
    }
    println!();

    // Failures never produce a partial value
    let failures = [
        (QuantityKind::ElectricPotential, "3.3"),
        (QuantityKind::ElectricCurrent, "mA"),
        (QuantityKind::ElectricCurrent, "1.2.3A"),
        (QuantityKind::ElectricCurrent, "10GA"),
        (QuantityKind::ElectricCurrent, "1TA"),
        (QuantityKind::Mass, "1pound"),
    ];

    println!("Rejected inputs:");
    for (kind, text) in failures {
        match kind.parse(text) {
            Ok(raw) => println!("  {:>10} unexpectedly parsed as {}", text, raw),
            Err(ParseError::UnrecognizedUnit { expected }) => {
                println!("  {:>10} -> wrong unit, {} wants {}", text, kind.name(), expected)
            }
            Err(err) => println!("  {:>10} -> {}", text, err),
        }
    }
}
