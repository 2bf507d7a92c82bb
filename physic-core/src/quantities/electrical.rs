//! Electrical quantities

quantity! {
    /// Electric current in nanoamperes; the largest value is about 9.2 GA.
    ElectricCurrent(i64) => ElectricCurrent
}

impl ElectricCurrent {
    /// 1 nA
    pub const NANOAMPERE: Self = Self(1);
    /// 1 µA
    pub const MICROAMPERE: Self = Self(1_000);
    /// 1 mA
    pub const MILLIAMPERE: Self = Self(1_000_000);
    /// 1 A
    pub const AMPERE: Self = Self(1_000_000_000);
    /// 1 kA
    pub const KILOAMPERE: Self = Self(1_000_000_000_000);
    /// 1 MA
    pub const MEGAAMPERE: Self = Self(1_000_000_000_000_000);
    /// 1 GA
    pub const GIGAAMPERE: Self = Self(1_000_000_000_000_000_000);
}

quantity! {
    /// Voltage in nanovolts; the largest value is about 9.2 GV.
    ElectricPotential(i64) => ElectricPotential
}

impl ElectricPotential {
    /// 1 nV
    pub const NANOVOLT: Self = Self(1);
    /// 1 µV
    pub const MICROVOLT: Self = Self(1_000);
    /// 1 mV
    pub const MILLIVOLT: Self = Self(1_000_000);
    /// 1 V
    pub const VOLT: Self = Self(1_000_000_000);
    /// 1 kV
    pub const KILOVOLT: Self = Self(1_000_000_000_000);
    /// 1 MV
    pub const MEGAVOLT: Self = Self(1_000_000_000_000_000);
    /// 1 GV
    pub const GIGAVOLT: Self = Self(1_000_000_000_000_000_000);
}

quantity! {
    /// Resistance in nano-ohms; the largest value is about 9.2 GΩ.
    ///
    /// Parses `Ohm`, `ohm` and `Ω`; formats with `Ω`.
    ElectricResistance(i64) => ElectricResistance
}

impl ElectricResistance {
    /// 1 nΩ
    pub const NANOOHM: Self = Self(1);
    /// 1 µΩ
    pub const MICROOHM: Self = Self(1_000);
    /// 1 mΩ
    pub const MILLIOHM: Self = Self(1_000_000);
    /// 1 Ω
    pub const OHM: Self = Self(1_000_000_000);
    /// 1 kΩ
    pub const KILOOHM: Self = Self(1_000_000_000_000);
    /// 1 MΩ
    pub const MEGAOHM: Self = Self(1_000_000_000_000_000);
    /// 1 GΩ
    pub const GIGAOHM: Self = Self(1_000_000_000_000_000_000);
}

quantity! {
    /// Capacitance in picofarads; the largest value is about 9.2 MF.
    ElectricalCapacitance(i64) => ElectricalCapacitance
}

impl ElectricalCapacitance {
    /// 1 pF
    pub const PICOFARAD: Self = Self(1);
    /// 1 nF
    pub const NANOFARAD: Self = Self(1_000);
    /// 1 µF
    pub const MICROFARAD: Self = Self(1_000_000);
    /// 1 mF
    pub const MILLIFARAD: Self = Self(1_000_000_000);
    /// 1 F
    pub const FARAD: Self = Self(1_000_000_000_000);
    /// 1 kF
    pub const KILOFARAD: Self = Self(1_000_000_000_000_000);
    /// 1 MF
    pub const MEGAFARAD: Self = Self(1_000_000_000_000_000_000);
}

quantity! {
    /// Power in nanowatts; the largest value is about 9.2 GW.
    Power(i64) => Power
}

impl Power {
    /// 1 nW
    pub const NANOWATT: Self = Self(1);
    /// 1 µW
    pub const MICROWATT: Self = Self(1_000);
    /// 1 mW
    pub const MILLIWATT: Self = Self(1_000_000);
    /// 1 W
    pub const WATT: Self = Self(1_000_000_000);
    /// 1 kW
    pub const KILOWATT: Self = Self(1_000_000_000_000);
    /// 1 MW
    pub const MEGAWATT: Self = Self(1_000_000_000_000_000);
    /// 1 GW
    pub const GIGAWATT: Self = Self(1_000_000_000_000_000_000);
}

quantity! {
    /// Energy in nanojoules; the largest value is about 9.2 GJ.
    Energy(i64) => Energy
}

impl Energy {
    /// 1 nJ
    pub const NANOJOULE: Self = Self(1);
    /// 1 µJ
    pub const MICROJOULE: Self = Self(1_000);
    /// 1 mJ
    pub const MILLIJOULE: Self = Self(1_000_000);
    /// 1 J
    pub const JOULE: Self = Self(1_000_000_000);
    /// 1 kJ
    pub const KILOJOULE: Self = Self(1_000_000_000_000);
    /// 1 MJ
    pub const MEGAJOULE: Self = Self(1_000_000_000_000_000);
    /// 1 GJ
    pub const GIGAJOULE: Self = Self(1_000_000_000_000_000_000);
}
