use super::{HighMultiplyStrategy, StrategyKind};

/// Widening multiplication with the native 128-bit integer types.
#[derive(Clone, Copy, Debug, Default)]
pub struct Wide;

impl Wide {
    /// High 64 bits of the two's complement product `x * y`.
    #[inline(always)]
    pub const fn signed_high(x: i64, y: i64) -> i64 {
        ((x as i128 * y as i128) >> 64) as i64
    }

    /// High 64 bits of the unsigned product `x * y`.
    #[inline(always)]
    pub const fn unsigned_high(x: u64, y: u64) -> u64 {
        ((x as u128 * y as u128) >> 64) as u64
    }
}

impl HighMultiplyStrategy for Wide {
    const KIND: StrategyKind = StrategyKind::Wide;

    #[inline(always)]
    fn signed_high(x: i64, y: i64) -> i64 {
        Wide::signed_high(x, y)
    }

    #[inline(always)]
    fn unsigned_high(x: u64, y: u64) -> u64 {
        Wide::unsigned_high(x, y)
    }
}
