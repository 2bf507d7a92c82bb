//! SI prefix table
//!
//! Maps the single magnitude character after a numeric literal to its power
//! of ten. Matching is case-sensitive: `m` is milli and `M` is mega. Both `u`
//! and `µ` mean micro; `µ` is two bytes in UTF-8, so splitting works on
//! characters and always returns the remaining text on a char boundary.

/// SI magnitude prefix accepted between a number and its unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SiPrefix {
    /// 10^-12
    Pico,
    /// 10^-9
    Nano,
    /// 10^-6
    Micro,
    /// 10^-3
    Milli,
    /// 10^3
    Kilo,
    /// 10^6
    Mega,
    /// 10^9
    Giga,
    /// 10^12
    Tera,
}

impl SiPrefix {
    /// Power of ten this prefix stands for
    pub const fn exponent(self) -> i32 {
        match self {
            Self::Pico => -12,
            Self::Nano => -9,
            Self::Micro => -6,
            Self::Milli => -3,
            Self::Kilo => 3,
            Self::Mega => 6,
            Self::Giga => 9,
            Self::Tera => 12,
        }
    }

    /// Look up a prefix character
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'p' => Some(Self::Pico),
            'n' => Some(Self::Nano),
            'u' | 'µ' => Some(Self::Micro),
            'm' => Some(Self::Milli),
            'k' => Some(Self::Kilo),
            'M' => Some(Self::Mega),
            'G' => Some(Self::Giga),
            'T' => Some(Self::Tera),
            _ => None,
        }
    }

    /// Symbol used when rendering; micro renders as `µ`
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Pico => "p",
            Self::Nano => "n",
            Self::Micro => "µ",
            Self::Milli => "m",
            Self::Kilo => "k",
            Self::Mega => "M",
            Self::Giga => "G",
            Self::Tera => "T",
        }
    }
}

/// Split a leading prefix character off `text`.
///
/// Consumes exactly one codepoint when it is a prefix and returns the rest.
/// Returns `None` for empty text or a non-prefix first character.
pub fn split_prefix(text: &str) -> Option<(SiPrefix, &str)> {
    let mut chars = text.chars();
    let prefix = SiPrefix::from_char(chars.next()?)?;
    Some((prefix, chars.as_str()))
}
