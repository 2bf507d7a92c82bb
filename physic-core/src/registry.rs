//! Quantity Kind Registry
//!
//! ## Overview
//!
//! Every physical kind is one row of static data ([`KindSpec`]): how it is
//! stored, which SI prefixes it accepts, which suffix spellings it
//! understands and how it is rendered. A single engine reads the row:
//!
//! ```text
//!  "2.4kA"
//!    │
//!    ├─ decimal literal ──────── digits 24, exponent -1   ("kA" left)
//!    ├─ prefix split ─────────── kilo                     ("A" left)
//!    ├─ fixed-point scale ────── 10^(3 - (-9)) → 2 400 000 000 000
//!    ├─ alias lookup ─────────── "A" → identity
//!    └─ width check ──────────── fits i64
//! ```
//!
//! ## Prefix Restrictions
//!
//! Some kinds refuse a prefix letter unless it forms one exact compound
//! suffix. This keeps spellings such as `mile`, `mph` or `Tonne` from being
//! read as milli-ile, milli-ph or tera-onne:
//!
//! | Kind     | Letter | Only as |
//! |----------|--------|---------|
//! | Distance | `m`    | `mm`    |
//! | Distance | `M`    | `Mm`    |
//! | Force    | `n`    | `nN`    |
//! | Mass     | `G`    | `Gg`    |
//! | Mass     | `T`    | `Tg`    |
//! | Speed    | `m`    | `mm/s`  |
//! | Speed    | `k`    | `km/s`  |
//!
//! Relative humidity takes no prefix at all. The table is kept as-is for
//! compatibility, inconsistencies included: other kinds do not protect their
//! aliases, so `1pound`, `1pi` and `1pascal` split off a pico prefix and then
//! fail to match a unit. Use `Pound`, `Pi` and `Pa` instead.
//!
//! ## Precision
//!
//! Digits below the storage resolution are truncated while parsing; the
//! formatter rounds. Alias conversions run in 128-bit arithmetic and truncate
//! toward zero.

use core::fmt;

use crate::constants::prefixes::{STORAGE_HUMIDITY, STORAGE_MICRO, STORAGE_NANO, STORAGE_PICO};
use crate::constants::units::{
    FOOT_NANOMETRE, FOOT_PER_SECOND_NANOMETRE_PER_SECOND, INCH_NANOMETRE,
    MILE_NANOMETRE, MILE_PER_HOUR_NANOMETRE_PER_SECOND, NANORADIAN_PER_DEGREE,
    NANORADIAN_PER_PI, NANORADIAN_PER_RADIAN, OUNCE_NANOGRAM, POUND_NANOGRAM,
    RANKINE_OFFSET_NANO_FAHRENHEIT, TONNE_NANOGRAM, YARD_NANOMETRE,
    ZERO_CELSIUS_NANOKELVIN,
};
use crate::convert::to_scaled;
use crate::decimal::parse_decimal;
use crate::errors::{ParseError, ParseResult};
use crate::format::{write_exact, FormattedValue, Notation, PrefixFamily};
use crate::prefix::{split_prefix, SiPrefix};

/// One SI unit at nano storage resolution.
const NANO_UNIT: i64 = 1_000_000_000;

/// Physical kinds understood by the parser and formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QuantityKind {
    /// Plane angle, stored in nanoradians
    Angle,
    /// Length, stored in nanometres
    Distance,
    /// Electric current, stored in nanoamperes
    ElectricCurrent,
    /// Voltage, stored in nanovolts
    ElectricPotential,
    /// Resistance, stored in nano-ohms
    ElectricResistance,
    /// Capacitance, stored in picofarads
    ElectricalCapacitance,
    /// Force, stored in nanonewtons
    Force,
    /// Frequency, stored in microhertz
    Frequency,
    /// Mass, stored in nanograms
    Mass,
    /// Pressure, stored in nanopascals
    Pressure,
    /// Relative humidity, stored in 0.00001 %rH
    RelativeHumidity,
    /// Speed, stored in nanometres per second
    Speed,
    /// Thermodynamic temperature, stored in nanokelvin
    Temperature,
    /// Power, stored in nanowatts
    Power,
    /// Energy, stored in nanojoules
    Energy,
    /// Luminous intensity, stored in nanocandelas
    LuminousIntensity,
    /// Luminous flux, stored in nanolumens
    LuminousFlux,
}

/// Which SI prefixes a kind accepts in front of its suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixPolicy {
    /// Any prefix letter is split off
    Any,
    /// The literal is followed directly by the suffix
    Never,
    /// Listed letters are only a prefix when the remaining text equals the
    /// paired compound; unlisted letters are always a prefix
    Restricted(&'static [(SiPrefix, &'static str)]),
}

impl PrefixPolicy {
    /// Split an accepted prefix off `text`, returning the unit suffix left.
    pub fn split<'a>(&self, text: &'a str) -> (Option<SiPrefix>, &'a str) {
        let (prefix, rest) = match self {
            Self::Never => return (None, text),
            Self::Any | Self::Restricted(_) => match split_prefix(text) {
                Some(found) => found,
                None => return (None, text),
            },
        };
        if let Self::Restricted(compounds) = self {
            let guarded = compounds.iter().find(|(p, _)| *p == prefix);
            if let Some((_, compound)) = guarded {
                if *compound != text {
                    return (None, text);
                }
            }
        }
        (Some(prefix), rest)
    }
}

/// Affine map from a scaled literal to storage units:
/// `(value + bias) * numerator / denominator`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    /// Added before scaling
    pub bias: i64,
    /// Scale numerator
    pub numerator: i64,
    /// Scale denominator, never zero
    pub denominator: i64,
}

impl Conversion {
    /// The canonical unit
    pub const IDENTITY: Self = Self::ratio(1, 1);

    /// Pure scale factor
    pub const fn ratio(numerator: i64, denominator: i64) -> Self {
        Self { bias: 0, numerator, denominator }
    }

    /// Pure offset
    pub const fn offset(bias: i64) -> Self {
        Self { bias, numerator: 1, denominator: 1 }
    }

    /// Apply to `value`, truncating toward zero.
    pub fn apply(&self, value: i64) -> ParseResult<i64> {
        let scaled = (i128::from(value) + i128::from(self.bias)) * i128::from(self.numerator)
            / i128::from(self.denominator);
        i64::try_from(scaled).map_err(|_| ParseError::Overflow)
    }
}

/// Set of suffix spellings sharing one conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitAlias {
    /// Accepted spellings, matched exactly; `""` accepts a bare number
    pub spellings: &'static [&'static str],
    /// Conversion into storage units
    pub conversion: Conversion,
}

impl UnitAlias {
    const fn new(spellings: &'static [&'static str], conversion: Conversion) -> Self {
        Self { spellings, conversion }
    }
}

/// Integer width a kind's storage must fit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerWidth {
    /// Signed 64-bit
    I64,
    /// Signed 32-bit
    I32,
}

impl IntegerWidth {
    fn check(self, value: i64) -> ParseResult<i64> {
        match self {
            Self::I64 => Ok(value),
            Self::I32 => i32::try_from(value)
                .map(i64::from)
                .map_err(|_| ParseError::Overflow),
        }
    }
}

/// Static description of one kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindSpec {
    /// Human-readable kind name
    pub name: &'static str,
    /// Unit named in [`ParseError::UnrecognizedUnit`]
    pub expected: &'static str,
    /// Identity spelling used for exact, lossless output
    pub unit: &'static str,
    /// Power of ten of one storage unit relative to the SI unit
    pub storage_exponent: i32,
    /// Accepted prefixes
    pub prefixes: PrefixPolicy,
    /// Accepted suffixes
    pub aliases: &'static [UnitAlias],
    /// Rendering
    pub notation: Notation,
    /// Storage width
    pub width: IntegerWidth,
}

impl KindSpec {
    /// Conversion registered for `suffix`, if any
    pub fn lookup(&self, suffix: &str) -> Option<Conversion> {
        self.aliases
            .iter()
            .find(|alias| alias.spellings.contains(&suffix))
            .map(|alias| alias.conversion)
    }

    /// Parse `text` into storage units.
    ///
    /// A bare zero with no unit is the value the kind renders as `0`, so
    /// `"0"` is 0 °C for temperature.
    pub fn parse(&self, text: &str) -> ParseResult<i64> {
        let (literal, consumed) = parse_decimal(text)?;
        let (prefix, suffix) = self.prefixes.split(&text[consumed..]);
        if literal.is_zero() && prefix.is_none() && suffix.is_empty() {
            return Ok(self.notation.zero_point());
        }
        let exponent = prefix.map_or(0, SiPrefix::exponent);
        let value = to_scaled(&literal, exponent - self.storage_exponent)?;
        let conversion = self
            .lookup(suffix)
            .ok_or(ParseError::UnrecognizedUnit { expected: self.expected })?;
        self.width.check(conversion.apply(value)?)
    }
}

// ===== ALIAS TABLES =====

static ANGLE_UNITS: [UnitAlias; 3] = [
    UnitAlias::new(
        &["°", "Degrees", "degrees"],
        Conversion::ratio(NANORADIAN_PER_DEGREE, NANORADIAN_PER_RADIAN),
    ),
    UnitAlias::new(
        &["Pi", "pi", "π"],
        Conversion::ratio(NANORADIAN_PER_PI, NANORADIAN_PER_RADIAN),
    ),
    UnitAlias::new(&["Radians", "radians", "Radian", "radian", ""], Conversion::IDENTITY),
];

static DISTANCE_UNITS: [UnitAlias; 5] = [
    UnitAlias::new(
        &["mile", "Mile", "miles", "Miles"],
        Conversion::ratio(MILE_NANOMETRE, NANO_UNIT),
    ),
    UnitAlias::new(
        &["yard", "Yard", "yards", "Yards"],
        Conversion::ratio(YARD_NANOMETRE, NANO_UNIT),
    ),
    UnitAlias::new(
        &["foot", "Foot", "Feet", "feet", "ft", "Ft"],
        Conversion::ratio(FOOT_NANOMETRE, NANO_UNIT),
    ),
    UnitAlias::new(
        &["in", "In", "inch", "Inch", "inches", "Inches"],
        Conversion::ratio(INCH_NANOMETRE, NANO_UNIT),
    ),
    UnitAlias::new(&["m", "metre", "metres", "Metre", "Metres", ""], Conversion::IDENTITY),
];

static CURRENT_UNITS: [UnitAlias; 1] = [UnitAlias::new(
    &["A", "a", "amp", "amps", "Amp", "Amps", ""],
    Conversion::IDENTITY,
)];

static POTENTIAL_UNITS: [UnitAlias; 1] = [UnitAlias::new(
    &["V", "v", "volt", "Volt", "volts", "Volts"],
    Conversion::IDENTITY,
)];

static RESISTANCE_UNITS: [UnitAlias; 1] = [UnitAlias::new(
    &["Ohm", "Ohms", "ohm", "ohms", "Ω"],
    Conversion::IDENTITY,
)];

static CAPACITANCE_UNITS: [UnitAlias; 1] = [UnitAlias::new(
    &["f", "farad", "farads", "F", "Farad", "Farads", ""],
    Conversion::IDENTITY,
)];

static FORCE_UNITS: [UnitAlias; 1] = [UnitAlias::new(
    &["N", "Newton", "newton", "Newtons", "newtons"],
    Conversion::IDENTITY,
)];

static FREQUENCY_UNITS: [UnitAlias; 1] =
    [UnitAlias::new(&["Hz", "hz", ""], Conversion::IDENTITY)];

static MASS_UNITS: [UnitAlias; 4] = [
    UnitAlias::new(
        &["tonne", "Tonne", "tonnes", "Tonnes"],
        Conversion::ratio(TONNE_NANOGRAM, NANO_UNIT),
    ),
    UnitAlias::new(
        &["pound", "Pound", "pounds", "Pounds", "lb"],
        Conversion::ratio(POUND_NANOGRAM, NANO_UNIT),
    ),
    UnitAlias::new(
        &["ounce", "Ounce", "ounces", "Ounces", "oz", "Oz"],
        Conversion::ratio(OUNCE_NANOGRAM, NANO_UNIT),
    ),
    UnitAlias::new(&["g", "gram", "grams", "Gram", "Grams"], Conversion::IDENTITY),
];

static PRESSURE_UNITS: [UnitAlias; 1] = [UnitAlias::new(
    &["Pa", "pa", "Pascal", "pascal", "Pascals", "pascals"],
    Conversion::IDENTITY,
)];

static HUMIDITY_UNITS: [UnitAlias; 2] = [
    UnitAlias::new(&["rH", "rh"], Conversion::IDENTITY),
    UnitAlias::new(&["%rH", "%rh"], Conversion::ratio(1, 100)),
];

static SPEED_UNITS: [UnitAlias; 4] = [
    UnitAlias::new(
        &["fps"],
        Conversion::ratio(FOOT_PER_SECOND_NANOMETRE_PER_SECOND, NANO_UNIT),
    ),
    UnitAlias::new(
        &["mph"],
        Conversion::ratio(MILE_PER_HOUR_NANOMETRE_PER_SECOND, NANO_UNIT),
    ),
    // exact 1000/3600, the rounded constant would drift
    UnitAlias::new(&["km/h"], Conversion::ratio(10, 36)),
    UnitAlias::new(&["m/s"], Conversion::IDENTITY),
];

static TEMPERATURE_UNITS: [UnitAlias; 3] = [
    UnitAlias::new(&["K"], Conversion::IDENTITY),
    UnitAlias::new(&["C", "°C"], Conversion::offset(ZERO_CELSIUS_NANOKELVIN)),
    UnitAlias::new(
        &["F", "°F"],
        Conversion {
            bias: RANKINE_OFFSET_NANO_FAHRENHEIT,
            numerator: 5,
            denominator: 9,
        },
    ),
];

static POWER_UNITS: [UnitAlias; 1] = [UnitAlias::new(
    &["watt", "watts", "Watt", "Watts", "W", "w"],
    Conversion::IDENTITY,
)];

static ENERGY_UNITS: [UnitAlias; 1] = [UnitAlias::new(
    &["Joule", "Joules", "joule", "joules", "J", "j"],
    Conversion::IDENTITY,
)];

static INTENSITY_UNITS: [UnitAlias; 1] = [UnitAlias::new(
    &["cd", "Candela", "candela", "Candelas", "candelas"],
    Conversion::IDENTITY,
)];

static FLUX_UNITS: [UnitAlias; 1] = [UnitAlias::new(
    &["lm", "Lumen", "lumen", "Lumens", "lumens"],
    Conversion::IDENTITY,
)];

// ===== KIND TABLE =====

const fn nano(symbol: &'static str) -> Notation {
    Notation::Si { family: PrefixFamily::Nano, symbol, zero: 0 }
}

const fn si_kind(
    name: &'static str,
    expected: &'static str,
    aliases: &'static [UnitAlias],
    symbol: &'static str,
) -> KindSpec {
    KindSpec {
        name,
        expected,
        unit: expected,
        storage_exponent: STORAGE_NANO,
        prefixes: PrefixPolicy::Any,
        aliases,
        notation: nano(symbol),
        width: IntegerWidth::I64,
    }
}

static ANGLE: KindSpec = KindSpec {
    notation: Notation::Degrees,
    ..si_kind("angle", "Radian", &ANGLE_UNITS, "")
};

static DISTANCE: KindSpec = KindSpec {
    prefixes: PrefixPolicy::Restricted(&[(SiPrefix::Milli, "mm"), (SiPrefix::Mega, "Mm")]),
    ..si_kind("distance", "m", &DISTANCE_UNITS, "m")
};

static ELECTRIC_CURRENT: KindSpec = si_kind("electric current", "A", &CURRENT_UNITS, "A");

static ELECTRIC_POTENTIAL: KindSpec =
    si_kind("electric potential", "V", &POTENTIAL_UNITS, "V");

static ELECTRIC_RESISTANCE: KindSpec =
    si_kind("electric resistance", "Ohm", &RESISTANCE_UNITS, "Ω");

static ELECTRICAL_CAPACITANCE: KindSpec = KindSpec {
    storage_exponent: STORAGE_PICO,
    notation: Notation::Si { family: PrefixFamily::Pico, symbol: "F", zero: 0 },
    ..si_kind("electrical capacitance", "F", &CAPACITANCE_UNITS, "F")
};

static FORCE: KindSpec = KindSpec {
    prefixes: PrefixPolicy::Restricted(&[(SiPrefix::Nano, "nN")]),
    ..si_kind("force", "N", &FORCE_UNITS, "N")
};

static FREQUENCY: KindSpec = KindSpec {
    storage_exponent: STORAGE_MICRO,
    notation: Notation::Si { family: PrefixFamily::Micro, symbol: "Hz", zero: 0 },
    ..si_kind("frequency", "Hz", &FREQUENCY_UNITS, "Hz")
};

static MASS: KindSpec = KindSpec {
    prefixes: PrefixPolicy::Restricted(&[(SiPrefix::Giga, "Gg"), (SiPrefix::Tera, "Tg")]),
    ..si_kind("mass", "g", &MASS_UNITS, "g")
};

static PRESSURE: KindSpec = si_kind("pressure", "Pa", &PRESSURE_UNITS, "Pa");

static RELATIVE_HUMIDITY: KindSpec = KindSpec {
    storage_exponent: STORAGE_HUMIDITY,
    prefixes: PrefixPolicy::Never,
    notation: Notation::Humidity,
    width: IntegerWidth::I32,
    unit: "rH",
    ..si_kind("relative humidity", "%rH", &HUMIDITY_UNITS, "")
};

static SPEED: KindSpec = KindSpec {
    prefixes: PrefixPolicy::Restricted(&[(SiPrefix::Milli, "mm/s"), (SiPrefix::Kilo, "km/s")]),
    ..si_kind("speed", "m/s", &SPEED_UNITS, "m/s")
};

static TEMPERATURE: KindSpec = KindSpec {
    notation: Notation::Si {
        family: PrefixFamily::Nano,
        symbol: "°C",
        zero: ZERO_CELSIUS_NANOKELVIN,
    },
    unit: "K",
    ..si_kind("temperature", "K or C", &TEMPERATURE_UNITS, "°C")
};

static POWER: KindSpec = si_kind("power", "W", &POWER_UNITS, "W");

static ENERGY: KindSpec = si_kind("energy", "J", &ENERGY_UNITS, "J");

static LUMINOUS_INTENSITY: KindSpec =
    si_kind("luminous intensity", "cd", &INTENSITY_UNITS, "cd");

static LUMINOUS_FLUX: KindSpec = si_kind("luminous flux", "lm", &FLUX_UNITS, "lm");

impl QuantityKind {
    /// Every kind, in declaration order
    pub const ALL: [QuantityKind; 17] = [
        Self::Angle,
        Self::Distance,
        Self::ElectricCurrent,
        Self::ElectricPotential,
        Self::ElectricResistance,
        Self::ElectricalCapacitance,
        Self::Force,
        Self::Frequency,
        Self::Mass,
        Self::Pressure,
        Self::RelativeHumidity,
        Self::Speed,
        Self::Temperature,
        Self::Power,
        Self::Energy,
        Self::LuminousIntensity,
        Self::LuminousFlux,
    ];

    /// Static description of this kind
    pub fn spec(self) -> &'static KindSpec {
        match self {
            Self::Angle => &ANGLE,
            Self::Distance => &DISTANCE,
            Self::ElectricCurrent => &ELECTRIC_CURRENT,
            Self::ElectricPotential => &ELECTRIC_POTENTIAL,
            Self::ElectricResistance => &ELECTRIC_RESISTANCE,
            Self::ElectricalCapacitance => &ELECTRICAL_CAPACITANCE,
            Self::Force => &FORCE,
            Self::Frequency => &FREQUENCY,
            Self::Mass => &MASS,
            Self::Pressure => &PRESSURE,
            Self::RelativeHumidity => &RELATIVE_HUMIDITY,
            Self::Speed => &SPEED,
            Self::Temperature => &TEMPERATURE,
            Self::Power => &POWER,
            Self::Energy => &ENERGY,
            Self::LuminousIntensity => &LUMINOUS_INTENSITY,
            Self::LuminousFlux => &LUMINOUS_FLUX,
        }
    }

    /// Kind name, e.g. `"electric current"`
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Parse `text` into this kind's storage units.
    ///
    /// ```
    /// use physic_core::QuantityKind;
    ///
    /// assert_eq!(QuantityKind::ElectricCurrent.parse("12.5mA"), Ok(12_500_000));
    /// assert_eq!(QuantityKind::Temperature.parse("0C"), Ok(273_150_000_000));
    /// ```
    pub fn parse(self, text: &str) -> ParseResult<i64> {
        let spec = self.spec();
        match spec.parse(text) {
            Ok(value) => {
                log_trace!("{}: {:?} -> {}", spec.name, text, value);
                Ok(value)
            }
            Err(err) => {
                log_debug!("{}: rejected {:?}: {}", spec.name, text, err);
                Err(err)
            }
        }
    }

    /// Render `value` into `out`
    pub fn write<W: fmt::Write>(self, out: &mut W, value: i64) -> fmt::Result {
        self.spec().notation.write(out, value)
    }

    /// Render `value` into a fixed-capacity string.
    ///
    /// ```
    /// use physic_core::QuantityKind;
    ///
    /// assert_eq!(QuantityKind::ElectricCurrent.format(12_500_000).as_str(), "12.500mA");
    /// assert_eq!(QuantityKind::Frequency.format(0).as_str(), "0");
    /// ```
    pub fn format(self, value: i64) -> FormattedValue {
        self.spec().notation.format(value)
    }

    /// Write `value` without rounding, in the kind's SI unit.
    ///
    /// The output always parses back to `value`; serialization uses it.
    pub fn write_exact<W: fmt::Write>(self, out: &mut W, value: i64) -> fmt::Result {
        let spec = self.spec();
        write_exact(out, value, spec.storage_exponent, spec.unit)
    }

    /// Exact rendering into a fixed-capacity string.
    ///
    /// ```
    /// use physic_core::QuantityKind;
    ///
    /// let exact = QuantityKind::ElectricCurrent.format_exact(1_234_567_891);
    /// assert_eq!(exact.as_str(), "1.234567891A");
    /// assert_eq!(QuantityKind::Temperature.format_exact(273_150_000_000).as_str(), "273.15K");
    /// ```
    pub fn format_exact(self, value: i64) -> FormattedValue {
        let mut out = FormattedValue::new();
        // The longest exact rendering is well under the capacity.
        let _ = self.write_exact(&mut out, value);
        out
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
