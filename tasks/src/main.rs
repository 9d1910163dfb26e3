use clap::{value_parser, Arg, ArgAction, Command};
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

mod check_strategies;

// -------------------------------------------------------------------------------------------------
// CONSTANTS
// -------------------------------------------------------------------------------------------------

const DEFAULT_ITERATIONS: usize = 1_000_000;

// -------------------------------------------------------------------------------------------------
// MAIN
// -------------------------------------------------------------------------------------------------

fn main() -> Result<(), std::io::Error> {
    // We parse the input args
    let matches = Command::new("tasks")
        .about("Rust scripts runner")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Prints debug messages"),
        )
        .subcommand(
            Command::new("check_strategies")
                .about("Check that every compiled high-multiply strategy gives the same results")
                .arg(
                    Arg::new("iterations")
                        .short('n')
                        .long("iterations")
                        .value_parser(value_parser!(usize))
                        .help("Number of random operand pairs to check"),
                ),
        )
        .arg_required_else_help(true)
        .get_matches();

    // We initialize the logger with proper verbosity
    let verb = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    CombinedLogger::init(vec![TermLogger::new(
        verb,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .map_err(std::io::Error::other)?;

    if let Some(matches) = matches.subcommand_matches("check_strategies") {
        let iterations = matches
            .get_one::<usize>("iterations")
            .copied()
            .unwrap_or(DEFAULT_ITERATIONS);
        check_strategies::check_strategies(iterations)?;
    }

    Ok(())
}
