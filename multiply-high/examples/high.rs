//! Prints the high 64 bits of the product of two operands, as computed by every strategy compiled
//! for this target. Operands may be written in decimal or with a `0x` prefix, with an optional
//! leading `-` for signed operands.
use clap::{Arg, ArgAction, Command};
use multiply_high::{StrategyKind, ACTIVE_STRATEGY};

fn parse_operand(s: &str) -> Result<i128, String> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let magnitude = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => i128::from_str_radix(&hex.replace('_', ""), 16),
        None => digits.replace('_', "").parse::<i128>(),
    }
    .map_err(|e| format!("invalid operand {s:?}: {e}"))?;

    Ok(if negative { -magnitude } else { magnitude })
}

fn narrow<T: TryFrom<i128>>(value: i128, signedness: &str) -> Result<T, String> {
    T::try_from(value).map_err(|_| format!("{value} does not fit in a {signedness} 64-bit integer"))
}

fn run(lhs: i128, rhs: i128, signed: bool) -> Result<(), String> {
    println!("active strategy: {ACTIVE_STRATEGY}");
    if signed {
        let (x, y) = (narrow::<i64>(lhs, "signed")?, narrow::<i64>(rhs, "signed")?);
        for &kind in StrategyKind::available() {
            let high = kind.signed_high(x, y);
            println!("{kind:>9}: {high} ({high:#018x})");
        }
    } else {
        let (x, y) = (
            narrow::<u64>(lhs, "unsigned")?,
            narrow::<u64>(rhs, "unsigned")?,
        );
        for &kind in StrategyKind::available() {
            let high = kind.unsigned_high(x, y);
            println!("{kind:>9}: {high} ({high:#018x})");
        }
    }
    Ok(())
}

pub fn main() {
    let matches = Command::new("high")
        .about("Computes the high 64 bits of a 64x64 bit product")
        .arg(
            Arg::new("lhs")
                .required(true)
                .allow_hyphen_values(true)
                .value_parser(parse_operand),
        )
        .arg(
            Arg::new("rhs")
                .required(true)
                .allow_hyphen_values(true)
                .value_parser(parse_operand),
        )
        .arg(
            Arg::new("signed")
                .short('s')
                .long("signed")
                .action(ArgAction::SetTrue)
                .help("Treat the operands as two's complement integers"),
        )
        .get_matches();

    let lhs = *matches.get_one::<i128>("lhs").unwrap();
    let rhs = *matches.get_one::<i128>("rhs").unwrap();

    if let Err(e) = run(lhs, rhs, matches.get_flag("signed")) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
