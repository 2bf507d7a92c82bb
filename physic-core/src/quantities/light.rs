//! Photometric quantities

quantity! {
    /// Luminous intensity in nanocandelas; the largest value is about 9.2 Gcd.
    LuminousIntensity(i64) => LuminousIntensity
}

impl LuminousIntensity {
    /// 1 ncd
    pub const NANOCANDELA: Self = Self(1);
    /// 1 µcd
    pub const MICROCANDELA: Self = Self(1_000);
    /// 1 mcd
    pub const MILLICANDELA: Self = Self(1_000_000);
    /// 1 cd
    pub const CANDELA: Self = Self(1_000_000_000);
    /// 1 kcd
    pub const KILOCANDELA: Self = Self(1_000_000_000_000);
    /// 1 Mcd
    pub const MEGACANDELA: Self = Self(1_000_000_000_000_000);
    /// 1 Gcd
    pub const GIGACANDELA: Self = Self(1_000_000_000_000_000_000);
}

quantity! {
    /// Luminous flux in nanolumens; the largest value is about 9.2 Glm.
    LuminousFlux(i64) => LuminousFlux
}

impl LuminousFlux {
    /// 1 nlm
    pub const NANOLUMEN: Self = Self(1);
    /// 1 µlm
    pub const MICROLUMEN: Self = Self(1_000);
    /// 1 mlm
    pub const MILLILUMEN: Self = Self(1_000_000);
    /// 1 lm
    pub const LUMEN: Self = Self(1_000_000_000);
    /// 1 klm
    pub const KILOLUMEN: Self = Self(1_000_000_000_000);
    /// 1 Mlm
    pub const MEGALUMEN: Self = Self(1_000_000_000_000_000);
    /// 1 Glm
    pub const GIGALUMEN: Self = Self(1_000_000_000_000_000_000);
}
