//! A strategy issuing the high-multiply instruction of the target directly.
//!
//! x86_64 has no stable intrinsic for the one-operand `mul`/`imul` forms, and aarch64 has none for
//! `umulh`/`smulh`, so the instructions are emitted with `asm!`.
use core::arch::asm;

use super::{HighMultiplyStrategy, StrategyKind};

/// Dedicated high-multiply instruction of the target.
#[derive(Clone, Copy, Debug, Default)]
pub struct Intrinsic;

impl Intrinsic {
    /// High 64 bits of the two's complement product `x * y`.
    #[cfg(target_arch = "x86_64")]
    #[inline(always)]
    pub fn signed_high(x: i64, y: i64) -> i64 {
        let high: i64;
        // SAFETY: `imul r/m64` only reads its operands and writes rdx:rax and the flags.
        unsafe {
            asm!(
                "imul {y}",
                y = in(reg) y,
                inout("rax") x => _,
                out("rdx") high,
                options(pure, nomem, nostack),
            );
        }
        high
    }

    /// High 64 bits of the unsigned product `x * y`.
    #[cfg(target_arch = "x86_64")]
    #[inline(always)]
    pub fn unsigned_high(x: u64, y: u64) -> u64 {
        let high: u64;
        // SAFETY: `mul r/m64` only reads its operands and writes rdx:rax and the flags.
        unsafe {
            asm!(
                "mul {y}",
                y = in(reg) y,
                inout("rax") x => _,
                out("rdx") high,
                options(pure, nomem, nostack),
            );
        }
        high
    }

    /// High 64 bits of the two's complement product `x * y`.
    #[cfg(target_arch = "aarch64")]
    #[inline(always)]
    pub fn signed_high(x: i64, y: i64) -> i64 {
        let high: i64;
        // SAFETY: `smulh` is a pure register to register operation.
        unsafe {
            asm!(
                "smulh {high}, {x}, {y}",
                high = lateout(reg) high,
                x = in(reg) x,
                y = in(reg) y,
                options(pure, nomem, nostack, preserves_flags),
            );
        }
        high
    }

    /// High 64 bits of the unsigned product `x * y`.
    #[cfg(target_arch = "aarch64")]
    #[inline(always)]
    pub fn unsigned_high(x: u64, y: u64) -> u64 {
        let high: u64;
        // SAFETY: `umulh` is a pure register to register operation.
        unsafe {
            asm!(
                "umulh {high}, {x}, {y}",
                high = lateout(reg) high,
                x = in(reg) x,
                y = in(reg) y,
                options(pure, nomem, nostack, preserves_flags),
            );
        }
        high
    }
}

impl HighMultiplyStrategy for Intrinsic {
    const KIND: StrategyKind = StrategyKind::Intrinsic;

    #[inline(always)]
    fn signed_high(x: i64, y: i64) -> i64 {
        Intrinsic::signed_high(x, y)
    }

    #[inline(always)]
    fn unsigned_high(x: u64, y: u64) -> u64 {
        Intrinsic::unsigned_high(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::generic_tests::*;
    use crate::strategies::{Portable, Wide};

    #[test]
    fn intrinsic_boundaries() {
        check_signed_boundaries::<Intrinsic>();
        check_unsigned_boundaries::<Intrinsic>();
    }

    #[test]
    fn intrinsic_matches_exact_product() {
        check_matches_exact_product::<Intrinsic>();
    }

    #[test]
    fn intrinsic_is_symmetric() {
        check_symmetry::<Intrinsic>();
    }

    #[test]
    fn intrinsic_matches_other_strategies() {
        check_strategies_agree::<Intrinsic, Wide>();
        check_strategies_agree::<Intrinsic, Portable>();
    }
}
