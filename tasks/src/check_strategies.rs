use multiply_high::{StrategyKind, ACTIVE_STRATEGY};
use rand::random;
use std::io::{Error, ErrorKind};

const SIGNED_EDGES: [i64; 9] = [
    0,
    1,
    -1,
    i64::MIN,
    i64::MIN + 1,
    i64::MAX,
    0xFFFF_FFFF,
    -0xFFFF_FFFF,
    1 << 32,
];

const UNSIGNED_EDGES: [u64; 8] = [
    0,
    1,
    u64::MAX,
    u64::MAX - 1,
    1 << 63,
    0xFFFF_FFFF,
    1 << 32,
    0xFFFF_FFFF_0000_0000,
];

fn mismatch(kind: StrategyKind, x: impl std::fmt::LowerHex, y: impl std::fmt::LowerHex) -> Error {
    Error::new(
        ErrorKind::InvalidData,
        format!("strategy {kind} disagrees with the exact product for x={x:#x} y={y:#x}"),
    )
}

fn check_signed(x: i64, y: i64) -> Result<(), Error> {
    let expected = ((i128::from(x) * i128::from(y)) >> 64) as i64;
    for &kind in StrategyKind::available() {
        if kind.signed_high(x, y) != expected {
            return Err(mismatch(kind, x, y));
        }
    }
    Ok(())
}

fn check_unsigned(x: u64, y: u64) -> Result<(), Error> {
    let expected = ((u128::from(x) * u128::from(y)) >> 64) as u64;
    for &kind in StrategyKind::available() {
        if kind.unsigned_high(x, y) != expected {
            return Err(mismatch(kind, x, y));
        }
    }
    Ok(())
}

pub fn check_strategies(iterations: usize) -> Result<(), Error> {
    let available = StrategyKind::available();
    log::info!(
        "checking strategies {:?}, active strategy is {ACTIVE_STRATEGY}",
        available
    );

    for &x in SIGNED_EDGES.iter() {
        for &y in SIGNED_EDGES.iter() {
            check_signed(x, y)?;
        }
    }
    for &x in UNSIGNED_EDGES.iter() {
        for &y in UNSIGNED_EDGES.iter() {
            check_unsigned(x, y)?;
        }
    }
    log::debug!("boundary operands ok");

    for i in 0..iterations {
        check_signed(random(), random())?;
        check_unsigned(random(), random())?;

        if (i + 1) % 100_000 == 0 {
            log::debug!("{} random operand pairs ok", i + 1);
        }
    }

    log::info!(
        "{} strategies agree on {iterations} random operand pairs",
        available.len()
    );
    Ok(())
}
