//! Force, mass and pressure

use crate::constants::units::{
    EARTH_GRAVITY_NANONEWTON, OUNCE_NANOGRAM, POUND_FORCE_NANONEWTON, POUND_NANOGRAM,
    SLUG_NANOGRAM, TONNE_NANOGRAM,
};

quantity! {
    /// Force in nanonewtons; the largest value is about 9.2 GN.
    ///
    /// Nano is only accepted as `nN` so that `newton` keeps its meaning.
    Force(i64) => Force
}

impl Force {
    /// 1 nN
    pub const NANONEWTON: Self = Self(1);
    /// 1 µN
    pub const MICRONEWTON: Self = Self(1_000);
    /// 1 mN
    pub const MILLINEWTON: Self = Self(1_000_000);
    /// 1 N
    pub const NEWTON: Self = Self(1_000_000_000);
    /// 1 kN
    pub const KILONEWTON: Self = Self(1_000_000_000_000);
    /// 1 MN
    pub const MEGANEWTON: Self = Self(1_000_000_000_000_000);
    /// 1 GN
    pub const GIGANEWTON: Self = Self(1_000_000_000_000_000_000);

    /// Weight of one kilogram under standard gravity
    pub const EARTH_GRAVITY: Self = Self(EARTH_GRAVITY_NANONEWTON);
    /// One pound-force
    pub const POUND_FORCE: Self = Self(POUND_FORCE_NANONEWTON);
}

quantity! {
    /// Mass in nanograms; the largest value is about 9.2 Gg.
    ///
    /// Giga and tera are only accepted as `Gg` and `Tg`, so `Tonne` is a
    /// tonne. `pound` and `pounds` cannot be reached because `p` is read as
    /// pico; use `Pound` or `lb`.
    Mass(i64) => Mass
}

impl Mass {
    /// 1 ng
    pub const NANOGRAM: Self = Self(1);
    /// 1 µg
    pub const MICROGRAM: Self = Self(1_000);
    /// 1 mg
    pub const MILLIGRAM: Self = Self(1_000_000);
    /// 1 g
    pub const GRAM: Self = Self(1_000_000_000);
    /// 1 kg
    pub const KILOGRAM: Self = Self(1_000_000_000_000);
    /// 1 Mg
    pub const MEGAGRAM: Self = Self(1_000_000_000_000_000);
    /// 1 Gg
    pub const GIGAGRAM: Self = Self(1_000_000_000_000_000_000);

    /// Metric tonne
    pub const TONNE: Self = Self(TONNE_NANOGRAM);
    /// Avoirdupois ounce
    pub const OUNCE: Self = Self(OUNCE_NANOGRAM);
    /// Avoirdupois pound
    pub const POUND: Self = Self(POUND_NANOGRAM);
    /// One slug
    pub const SLUG: Self = Self(SLUG_NANOGRAM);
}

quantity! {
    /// Pressure in nanopascals; the largest value is about 9.2 GPa.
    Pressure(i64) => Pressure
}

impl Pressure {
    /// 1 nPa
    pub const NANOPASCAL: Self = Self(1);
    /// 1 µPa
    pub const MICROPASCAL: Self = Self(1_000);
    /// 1 mPa
    pub const MILLIPASCAL: Self = Self(1_000_000);
    /// 1 Pa
    pub const PASCAL: Self = Self(1_000_000_000);
    /// 1 kPa
    pub const KILOPASCAL: Self = Self(1_000_000_000_000);
    /// 1 MPa
    pub const MEGAPASCAL: Self = Self(1_000_000_000_000_000);
    /// 1 GPa
    pub const GIGAPASCAL: Self = Self(1_000_000_000_000_000_000);
}
