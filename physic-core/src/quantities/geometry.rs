//! Angle, distance and speed

use crate::constants::units::{
    FOOT_NANOMETRE, FOOT_PER_SECOND_NANOMETRE_PER_SECOND, INCH_NANOMETRE,
    KILOMETRE_PER_HOUR_NANOMETRE_PER_SECOND, LIGHT_SPEED_NANOMETRE_PER_SECOND, MILE_NANOMETRE,
    MILE_PER_HOUR_NANOMETRE_PER_SECOND, NANORADIAN_PER_DEGREE, NANORADIAN_PER_PI,
    NANORADIAN_PER_RADIAN, NANORADIAN_PER_THETA, THOU_NANOMETRE, YARD_NANOMETRE,
};

quantity! {
    /// Plane angle in nanoradians.
    ///
    /// Formats in degrees, never with an SI prefix. Parses radians (with any
    /// SI prefix), `°`/`Degrees` and multiples of `Pi`. The largest value
    /// is about 9.2 Grad, or 528 460 276 054°.
    Angle(i64) => Angle
}

impl Angle {
    /// 1 nrad
    pub const NANORADIAN: Self = Self(1);
    /// 1 µrad
    pub const MICRORADIAN: Self = Self(1_000);
    /// 1 mrad
    pub const MILLIRADIAN: Self = Self(1_000_000);
    /// 1 rad
    pub const RADIAN: Self = Self(NANORADIAN_PER_RADIAN);
    /// 1°
    pub const DEGREE: Self = Self(NANORADIAN_PER_DEGREE);
    /// π rad (180°)
    pub const PI: Self = Self(NANORADIAN_PER_PI);
    /// 2π rad, a full turn
    pub const THETA: Self = Self(NANORADIAN_PER_THETA);
}

quantity! {
    /// Length in nanometres; the largest value is about 9.2 Gm.
    Distance(i64) => Distance
}

impl Distance {
    /// 1 nm
    pub const NANOMETRE: Self = Self(1);
    /// 1 µm
    pub const MICROMETRE: Self = Self(1_000);
    /// 1 mm
    pub const MILLIMETRE: Self = Self(1_000_000);
    /// 1 m
    pub const METRE: Self = Self(1_000_000_000);
    /// 1 km
    pub const KILOMETRE: Self = Self(1_000_000_000_000);
    /// 1 Mm
    pub const MEGAMETRE: Self = Self(1_000_000_000_000_000);
    /// 1 Gm
    pub const GIGAMETRE: Self = Self(1_000_000_000_000_000_000);

    /// One thou (0.001 in)
    pub const THOU: Self = Self(THOU_NANOMETRE);
    /// One inch
    pub const INCH: Self = Self(INCH_NANOMETRE);
    /// One foot
    pub const FOOT: Self = Self(FOOT_NANOMETRE);
    /// One yard
    pub const YARD: Self = Self(YARD_NANOMETRE);
    /// One statute mile
    pub const MILE: Self = Self(MILE_NANOMETRE);
}

quantity! {
    /// Speed in nanometres per second; the largest value is about 9.2 Gm/s.
    ///
    /// Only `m/s` takes an SI prefix, and only as `mm/s` or `km/s` for milli
    /// and kilo. `km/h`, `mph` and `fps` are accepted as-is.
    Speed(i64) => Speed
}

impl Speed {
    /// 1 nm/s
    pub const NANOMETRE_PER_SECOND: Self = Self(1);
    /// 1 µm/s
    pub const MICROMETRE_PER_SECOND: Self = Self(1_000);
    /// 1 mm/s
    pub const MILLIMETRE_PER_SECOND: Self = Self(1_000_000);
    /// 1 m/s
    pub const METRE_PER_SECOND: Self = Self(1_000_000_000);
    /// 1 km/s
    pub const KILOMETRE_PER_SECOND: Self = Self(1_000_000_000_000);
    /// 1 Mm/s
    pub const MEGAMETRE_PER_SECOND: Self = Self(1_000_000_000_000_000);
    /// 1 Gm/s
    pub const GIGAMETRE_PER_SECOND: Self = Self(1_000_000_000_000_000_000);

    /// Speed of light in vacuum
    pub const LIGHT_SPEED: Self = Self(LIGHT_SPEED_NANOMETRE_PER_SECOND);
    /// 1 km/h, rounded to the nanometre
    pub const KILOMETRE_PER_HOUR: Self = Self(KILOMETRE_PER_HOUR_NANOMETRE_PER_SECOND);
    /// 1 mph
    pub const MILE_PER_HOUR: Self = Self(MILE_PER_HOUR_NANOMETRE_PER_SECOND);
    /// 1 ft/s
    pub const FOOT_PER_SECOND: Self = Self(FOOT_PER_SECOND_NANOMETRE_PER_SECOND);
}
