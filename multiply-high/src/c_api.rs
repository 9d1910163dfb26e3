//! C bindings for the high-multiply entry points.
//!
//! The symbols do not depend on the strategy the crate was built with:
//!
//! ```c
//! int64_t multiply_high_signed(int64_t x, int64_t y);
//! uint64_t multiply_high_unsigned(uint64_t x, uint64_t y);
//! ```

/// High 64 bits of the 128-bit two's complement product `x * y`.
#[no_mangle]
pub extern "C" fn multiply_high_signed(x: i64, y: i64) -> i64 {
    crate::signed_high_multiply(x, y)
}

/// High 64 bits of the 128-bit unsigned product `x * y`.
#[no_mangle]
pub extern "C" fn multiply_high_unsigned(x: u64, y: u64) -> u64 {
    crate::unsigned_high_multiply(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c_symbols_forward_to_entry_points() {
        assert_eq!(multiply_high_signed(i64::MIN, i64::MIN), 0x4000_0000_0000_0000);
        assert_eq!(multiply_high_signed(-1, 1), -1);
        assert_eq!(multiply_high_unsigned(u64::MAX, u64::MAX), u64::MAX - 1);
        assert_eq!(multiply_high_unsigned(u64::MAX, 2), 1);
    }
}
