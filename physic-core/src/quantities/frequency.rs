//! Frequency and period
//!
//! Frequency is stored in microhertz, which keeps slow signals such as one
//! sample per minute (16 666 µHz) exact enough for scheduling, while still
//! reaching 9.2 THz at the top.
//!
//! Conversions to and from [`Duration`] work on nanoseconds: one hertz
//! is 10^15 µHz·ns, so `period = 10^15 / f` and `f = 10^15 / period`, both
//! truncated.

use core::time::Duration;

/// `µHz × ns` in one cycle per second.
const MICROHERTZ_NANOSECONDS: u128 = 1_000_000_000_000_000;

quantity! {
    /// Frequency in microhertz; the largest value is about 9.2 THz.
    Frequency(i64) => Frequency
}

impl Frequency {
    /// 1 µHz
    pub const MICROHERTZ: Self = Self(1);
    /// 1 mHz
    pub const MILLIHERTZ: Self = Self(1_000);
    /// 1 Hz
    pub const HERTZ: Self = Self(1_000_000);
    /// 1 kHz
    pub const KILOHERTZ: Self = Self(1_000_000_000);
    /// 1 MHz
    pub const MEGAHERTZ: Self = Self(1_000_000_000_000);
    /// 1 GHz
    pub const GIGAHERTZ: Self = Self(1_000_000_000_000_000);
    /// 1 THz
    pub const TERAHERTZ: Self = Self(1_000_000_000_000_000_000);

    /// Duration of one cycle.
    ///
    /// `None` for zero or negative frequencies. Periods shorter than a
    /// nanosecond truncate to zero.
    pub fn period(self) -> Option<Duration> {
        let hz = u128::try_from(self.0).ok().filter(|f| *f > 0)?;
        let nanos = u64::try_from(MICROHERTZ_NANOSECONDS / hz).ok()?;
        Some(Duration::from_nanos(nanos))
    }

    /// Frequency whose cycle lasts `period`.
    ///
    /// `None` for a zero period.
    pub fn from_period(period: Duration) -> Option<Self> {
        let nanos = period.as_nanos();
        if nanos == 0 {
            return None;
        }
        i64::try_from(MICROHERTZ_NANOSECONDS / nanos).ok().map(Self)
    }
}
