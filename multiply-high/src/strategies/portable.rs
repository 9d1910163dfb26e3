//! A strategy using only 64-bit arithmetic.
//!
//! Each operand is split into a low 32-bit half and a high 32-bit half, and the high word of the
//! product is rebuilt from the four partial products (Hacker's Delight, `mulhs` and `mulhu`).
//!
//! In the signed case the low halves `x0`, `y0` are unsigned and the high halves `x1`, `y1` carry
//! the sign of the operand. The low partial product `x0 * y0` can exceed `i64::MAX`, so it is
//! formed and shifted as a `u64`; sign extending it would corrupt the result.
use super::{HighMultiplyStrategy, StrategyKind};

const LOW_MASK: u64 = 0xFFFF_FFFF;

/// Limb decomposition, usable on any target.
#[derive(Clone, Copy, Debug, Default)]
pub struct Portable;

impl Portable {
    /// High 64 bits of the two's complement product `x * y`.
    #[inline(always)]
    pub const fn signed_high(x: i64, y: i64) -> i64 {
        let x0 = x & LOW_MASK as i64;
        let x1 = x >> 32;
        let y0 = y & LOW_MASK as i64;
        let y1 = y >> 32;

        let t = x1 * y0 + ((x0 as u64 * y0 as u64) >> 32) as i64;
        x1 * y1 + (t >> 32) + (((t & LOW_MASK as i64) + x0 * y1) >> 32)
    }

    /// High 64 bits of the unsigned product `x * y`.
    #[inline(always)]
    pub const fn unsigned_high(x: u64, y: u64) -> u64 {
        let x0 = x & LOW_MASK;
        let x1 = x >> 32;
        let y0 = y & LOW_MASK;
        let y1 = y >> 32;

        let t = x1 * y0 + ((x0 * y0) >> 32);
        x1 * y1 + (t >> 32) + (((t & LOW_MASK) + x0 * y1) >> 32)
    }
}

impl HighMultiplyStrategy for Portable {
    const KIND: StrategyKind = StrategyKind::Portable;

    #[inline(always)]
    fn signed_high(x: i64, y: i64) -> i64 {
        Portable::signed_high(x, y)
    }

    #[inline(always)]
    fn unsigned_high(x: u64, y: u64) -> u64 {
        Portable::unsigned_high(x, y)
    }
}
