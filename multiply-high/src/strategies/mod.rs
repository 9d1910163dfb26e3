//! The interchangeable implementations of the high-multiply primitive.
//!
//! Every strategy compiled for the current target is public, whichever one backs the crate
//! entry points, so that they can be checked against each other.
use core::fmt;
use core::str::FromStr;

mod portable;
pub use portable::Portable;

mod wide;
pub use wide::Wide;

#[cfg(all(any(target_arch = "x86_64", target_arch = "aarch64"), not(miri)))]
mod intrinsic;
#[cfg(all(any(target_arch = "x86_64", target_arch = "aarch64"), not(miri)))]
pub use intrinsic::Intrinsic;


/// A way of computing the high half of a 64x64 bit product.
pub trait HighMultiplyStrategy {
    /// The name of the strategy.
    const KIND: StrategyKind;

    /// High 64 bits of the two's complement product `x * y`.
    fn signed_high(x: i64, y: i64) -> i64;

    /// High 64 bits of the unsigned product `x * y`.
    fn unsigned_high(x: u64, y: u64) -> u64;
}

/// Names the strategies of this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Dedicated instruction of the target.
    Intrinsic,
    /// Native 128-bit integers.
    Wide,
    /// 32-bit limb decomposition.
    Portable,
}

impl StrategyKind {
    /// The strategies compiled for the current target, by order of preference.
    pub const fn available() -> &'static [StrategyKind] {
        #[cfg(all(any(target_arch = "x86_64", target_arch = "aarch64"), not(miri)))]
        {
            &[Self::Intrinsic, Self::Wide, Self::Portable]
        }
        #[cfg(not(all(any(target_arch = "x86_64", target_arch = "aarch64"), not(miri))))]
        {
            &[Self::Wide, Self::Portable]
        }
    }

    /// Returns the name used by [`FromStr`] and [`Display`](fmt::Display).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Intrinsic => "intrinsic",
            Self::Wide => "wide",
            Self::Portable => "portable",
        }
    }

    /// Calls the signed high-multiply of the named strategy.
    ///
    /// # Panics
    ///
    /// Panics if the strategy is not compiled for this target, see [`Self::available`].
    pub fn signed_high(self, x: i64, y: i64) -> i64 {
        match self {
            #[cfg(all(any(target_arch = "x86_64", target_arch = "aarch64"), not(miri)))]
            Self::Intrinsic => Intrinsic::signed_high(x, y),
            Self::Wide => Wide::signed_high(x, y),
            Self::Portable => Portable::signed_high(x, y),
            #[allow(unreachable_patterns)]
            kind => panic!("the {kind} strategy is not available on this target"),
        }
    }

    /// Calls the unsigned high-multiply of the named strategy.
    ///
    /// # Panics
    ///
    /// Panics if the strategy is not compiled for this target, see [`Self::available`].
    pub fn unsigned_high(self, x: u64, y: u64) -> u64 {
        match self {
            #[cfg(all(any(target_arch = "x86_64", target_arch = "aarch64"), not(miri)))]
            Self::Intrinsic => Intrinsic::unsigned_high(x, y),
            Self::Wide => Wide::unsigned_high(x, y),
            Self::Portable => Portable::unsigned_high(x, y),
            #[allow(unreachable_patterns)]
            kind => panic!("the {kind} strategy is not available on this target"),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseStrategyError {
    _private: (),
}

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown strategy, expected one of: intrinsic, wide, portable")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseStrategyError {}

impl FromStr for StrategyKind {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "intrinsic" => Ok(Self::Intrinsic),
            "wide" => Ok(Self::Wide),
            "portable" => Ok(Self::Portable),
            _ => Err(ParseStrategyError { _private: () }),
        }
    }
}

// Preference order: dedicated instruction, then 128-bit integers, then limbs.

/// The strategy backing [`signed_high_multiply`](crate::signed_high_multiply) and
/// [`unsigned_high_multiply`](crate::unsigned_high_multiply).
#[cfg(all(
    feature = "intrinsic",
    any(target_arch = "x86_64", target_arch = "aarch64"),
    not(miri)
))]
pub type ActiveStrategy = Intrinsic;

/// The strategy backing [`signed_high_multiply`](crate::signed_high_multiply) and
/// [`unsigned_high_multiply`](crate::unsigned_high_multiply).
#[cfg(all(
    not(all(
        feature = "intrinsic",
        any(target_arch = "x86_64", target_arch = "aarch64"),
        not(miri)
    )),
    feature = "wide"
))]
pub type ActiveStrategy = Wide;

/// The strategy backing [`signed_high_multiply`](crate::signed_high_multiply) and
/// [`unsigned_high_multiply`](crate::unsigned_high_multiply).
#[cfg(all(
    not(all(
        feature = "intrinsic",
        any(target_arch = "x86_64", target_arch = "aarch64"),
        not(miri)
    )),
    not(feature = "wide")
))]
pub type ActiveStrategy = Portable;

/// The kind of [`ActiveStrategy`].
pub const ACTIVE_STRATEGY: StrategyKind = <ActiveStrategy as HighMultiplyStrategy>::KIND;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for &kind in StrategyKind::available() {
            assert_eq!(kind.name().parse::<StrategyKind>(), Ok(kind));
        }
        assert!("mulx".parse::<StrategyKind>().is_err());
        assert!("Wide".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn dispatch_by_kind_agrees() {
        for &kind in StrategyKind::available() {
            assert_eq!(kind.signed_high(i64::MIN, i64::MIN), 0x4000_0000_0000_0000);
            assert_eq!(kind.unsigned_high(u64::MAX, u64::MAX), u64::MAX - 1);
            assert_eq!(kind.signed_high(-1, 1), -1);
            assert_eq!(kind.unsigned_high(u64::MAX, 2), 1);
        }
    }

    #[test]
    fn portable_and_wide_always_available() {
        let available = StrategyKind::available();
        assert!(available.contains(&StrategyKind::Wide));
        assert!(available.contains(&StrategyKind::Portable));
        assert_eq!(available.last(), Some(&StrategyKind::Portable));
    }
}
