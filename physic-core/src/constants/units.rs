//! Named Quantities in Base Units
//!
//! Raw integer values of units that are not a plain power of ten of the
//! kind's base unit. The typed constants on each quantity (for example
//! `Angle::PI` or `Mass::POUND`) are built from these.
//!
//! Values are truncated to the base unit, never rounded.

// ===== ANGLE (nanoradian) =====

/// One radian in nanoradians.
pub const NANORADIAN_PER_RADIAN: i64 = 1_000_000_000;

/// π radians (180°) in nanoradians.
///
/// 3.141592653589… truncated to 3141592653.
pub const NANORADIAN_PER_PI: i64 = 3_141_592_653;

/// 2π radians (360°) in nanoradians.
pub const NANORADIAN_PER_THETA: i64 = 6_283_185_307;

/// One degree in nanoradians.
///
/// π/180 = 0.017453292519… rounded to 17453293. The formatter divides by
/// this value; it is odd, so half-way cases cannot occur.
pub const NANORADIAN_PER_DEGREE: i64 = 17_453_293;

// ===== DISTANCE (nanometre) =====

/// One thou (mil) in nanometres.
///
/// Source: international yard and pound agreement (1959), 1 in = 25.4 mm
pub const THOU_NANOMETRE: i64 = 25_400;

/// One inch in nanometres.
pub const INCH_NANOMETRE: i64 = 1_000 * THOU_NANOMETRE;

/// One foot in nanometres.
pub const FOOT_NANOMETRE: i64 = 12 * INCH_NANOMETRE;

/// One yard in nanometres.
pub const YARD_NANOMETRE: i64 = 3 * FOOT_NANOMETRE;

/// One statute mile in nanometres.
pub const MILE_NANOMETRE: i64 = 1_760 * YARD_NANOMETRE;

// ===== FORCE (nanonewton) =====

/// Standard gravity acting on one kilogram, in nanonewtons.
///
/// Source: CGPM 1901, g0 = 9.80665 m/s²
pub const EARTH_GRAVITY_NANONEWTON: i64 = 9_806_650_000;

/// One pound-force in nanonewtons.
///
/// Pound is both a unit of mass and of force; the suffix disambiguates.
pub const POUND_FORCE_NANONEWTON: i64 = 4_448_221_615_261;

// ===== MASS (nanogram) =====

/// One avoirdupois ounce in nanograms.
pub const OUNCE_NANOGRAM: i64 = 28_349_523_125;

/// One avoirdupois pound in nanograms (16 ounces, exactly 453.59237 g).
pub const POUND_NANOGRAM: i64 = 16 * OUNCE_NANOGRAM;

/// One slug in nanograms.
pub const SLUG_NANOGRAM: i64 = 14_593_903_000_000;

/// One metric tonne in nanograms.
pub const TONNE_NANOGRAM: i64 = 1_000_000_000_000_000;

// ===== SPEED (nanometre per second) =====

/// Speed of light in vacuum, in nanometres per second.
///
/// Source: SI definition of the metre, c = 299 792 458 m/s
pub const LIGHT_SPEED_NANOMETRE_PER_SECOND: i64 = 299_792_458_000_000_000;

/// One kilometre per hour in nanometres per second (truncated).
pub const KILOMETRE_PER_HOUR_NANOMETRE_PER_SECOND: i64 = 277_777_778;

/// One mile per hour in nanometres per second.
pub const MILE_PER_HOUR_NANOMETRE_PER_SECOND: i64 = 447_040_000;

/// One foot per second in nanometres per second.
pub const FOOT_PER_SECOND_NANOMETRE_PER_SECOND: i64 = 304_800_000;

// ===== TEMPERATURE (nanokelvin) =====

/// 0 °C in nanokelvin.
///
/// Source: SI brochure, T(K) = t(°C) + 273.15
pub const ZERO_CELSIUS_NANOKELVIN: i64 = 273_150_000_000;

/// 0 °F in nanokelvin (255.372 K, truncated to the millikelvin).
pub const ZERO_FAHRENHEIT_NANOKELVIN: i64 = 255_372_000_000;

/// Size of one degree Fahrenheit in nanokelvin (5/9 K, truncated).
pub const FAHRENHEIT_NANOKELVIN: i64 = 555_555_555;

/// Absolute zero on the Fahrenheit scale, in nano degrees Fahrenheit.
///
/// Parsing `°F` adds this bias before the 5/9 ratio so that 32 °F lands
/// exactly on [`ZERO_CELSIUS_NANOKELVIN`].
pub const RANKINE_OFFSET_NANO_FAHRENHEIT: i64 = 459_670_000_000;

// ===== RELATIVE HUMIDITY (0.00001 %rH) =====

/// 0.0001 %rH in storage units.
pub const MICRO_RH: i32 = 10;

/// 0.1 %rH in storage units.
pub const MILLI_RH: i32 = 1_000 * MICRO_RH;

/// 1 %rH in storage units.
pub const PERCENT_RH: i32 = 10 * MILLI_RH;
