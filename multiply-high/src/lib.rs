//! High half of a 64x64 bit multiplication.
//!
//! This crate computes bits `[127:64]` of the exact 128-bit product of two 64-bit integers, for
//! signed (two's complement) and unsigned operands. It is meant as a building block for code that
//! needs the upper part of a wide product without materializing the full 128-bit value, such as
//! binary/decimal floating point conversion or Shoup modular reduction.
//!
//! Three strategies compute the same result:
//!
//! + [`Intrinsic`](strategies::Intrinsic): the dedicated instruction of the target (`mul` and
//!   `imul` on x86_64, `umulh` and `smulh` on aarch64).
//! + [`Wide`](strategies::Wide): widening to `u128`/`i128`.
//! + [`Portable`](strategies::Portable): four 32x32 bit partial products recombined with carries.
//!
//! The strategy backing [`signed_high_multiply`] and [`unsigned_high_multiply`] is picked at
//! compile time, in this order of preference:
//!
//! + `Intrinsic`, if the `intrinsic` feature is enabled and the target has the instruction,
//! + `Wide`, if the `wide` feature is enabled,
//! + `Portable` otherwise.
//!
//! Both features are on by default. There is no runtime dispatch.
//!
//! ```
//! use multiply_high::{signed_high_multiply, unsigned_high_multiply};
//!
//! assert_eq!(unsigned_high_multiply(u64::MAX, 2), 1);
//! assert_eq!(signed_high_multiply(-1, 1), -1);
//! assert_eq!(signed_high_multiply(i64::MIN, i64::MIN), 0x4000_0000_0000_0000);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod strategies;
pub use strategies::{
    ActiveStrategy, HighMultiplyStrategy, ParseStrategyError, StrategyKind, ACTIVE_STRATEGY,
};

#[cfg(feature = "c_api")]
pub mod c_api;

/// Returns the high 64 bits of the 128-bit two's complement product `x * y`.
///
/// The operation is total: every pair of inputs has a well-defined result.
///
/// ```
/// use multiply_high::signed_high_multiply;
///
/// assert_eq!(signed_high_multiply(-1, -1), 0);
/// assert_eq!(signed_high_multiply(i64::MAX, 2), 0);
/// assert_eq!(signed_high_multiply(i64::MIN, 2), -1);
/// ```
#[inline(always)]
pub fn signed_high_multiply(x: i64, y: i64) -> i64 {
    ActiveStrategy::signed_high(x, y)
}

/// Returns the high 64 bits of the 128-bit unsigned product `x * y`.
///
/// ```
/// use multiply_high::unsigned_high_multiply;
///
/// assert_eq!(unsigned_high_multiply(u64::MAX, u64::MAX), u64::MAX - 1);
/// assert_eq!(unsigned_high_multiply(1 << 32, 1 << 32), 1);
/// ```
#[inline(always)]
pub fn unsigned_high_multiply(x: u64, y: u64) -> u64 {
    ActiveStrategy::unsigned_high(x, y)
}

/// Method call syntax for the high-multiply entry points.
///
/// ```
/// use multiply_high::MultiplyHigh;
///
/// assert_eq!(u64::MAX.multiply_high(3), 2);
/// assert_eq!((-5i64).multiply_high(7), -1);
/// ```
pub trait MultiplyHigh: Sized {
    /// Returns the high half of the double width product of `self` and `rhs`.
    fn multiply_high(self, rhs: Self) -> Self;
}

impl MultiplyHigh for i64 {
    #[inline(always)]
    fn multiply_high(self, rhs: Self) -> Self {
        signed_high_multiply(self, rhs)
    }
}

impl MultiplyHigh for u64 {
    #[inline(always)]
    fn multiply_high(self, rhs: Self) -> Self {
        unsigned_high_multiply(self, rhs)
    }
}
