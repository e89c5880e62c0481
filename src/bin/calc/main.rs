use biginteger::calculator::{CalculatorError, Inputs, Session};
use biginteger::BigInteger;
use clap::{arg, command, ArgAction, ArgMatches, Command};
use log::{debug, LevelFilter};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

fn cli() -> Command {
    command!() // requires `cargo` feature
        .about("Arithmetic on arbitrarily large integers")
        .allow_negative_numbers(true)
        .arg(arg!([LHS] "First number; prompted for when missing"))
        .arg(arg!([OP] "Operation, one of + - * / % ^; prompted for when missing"))
        .arg(arg!([RHS] "Second number; prompted for when missing"))
        .arg(arg!(--strict "Exit with a non-zero status when the calculation fails"))
        .arg(arg!(-q --quiet "Do not print the introductory banner"))
        .arg(arg!(-v --verbose "Increase logging verbosity").action(ArgAction::Count))
}

fn calculate<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    matches: &ArgMatches,
) -> Result<BigInteger, CalculatorError> {
    if !matches.get_flag("quiet") {
        session.write_banner()?;
    }

    let inputs = Inputs {
        lhs: matches.get_one::<String>("LHS").cloned(),
        op: matches.get_one::<String>("OP").cloned(),
        rhs: matches.get_one::<String>("RHS").cloned(),
    };
    session.run(inputs)
}

/// Write the one-line diagnostic for `err` and return the process status.
fn report<W: Write>(err: &CalculatorError, strict: bool, stderr: &mut W) -> u8 {
    debug!("calculation failed: {err:?}");
    // nothing left to report to if stderr itself is gone
    let _ = writeln!(stderr, "An error occurred: {err}");
    if strict {
        1
    } else {
        0
    }
}

fn main() -> ExitCode {
    let matches = cli().get_matches();

    let level = match matches.get_count("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout());

    match calculate(&mut session, &matches) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(report(&err, matches.get_flag("strict"), &mut io::stderr())),
    }
}
