//! Command-line driver.
//!
//! Usage:
//!   sprout                  - Interactive REPL on stdin/stdout
//!   sprout `<path>`         - Parse a file and print its canonical form or its errors

use std::{
    fs::read_to_string,
    io,
    process,
    time::Instant,
};

use clap::{Arg, ArgAction, ArgMatches, Command};
use sprout::{
    display_error, logging, parse,
    repl::{self, ReplConfig, PROMPT},
};

fn main() {
    let matches = Command::new("sprout")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parses sprout source and echoes its canonical form")
        .arg(
            Arg::new("path")
                .help("Source file to parse; starts the REPL when omitted")
                .index(1),
        )
        .arg(
            Arg::new("prompt")
                .long("prompt")
                .help("REPL prompt")
                .default_value(PROMPT),
        )
        .arg(
            Arg::new("point-errors")
                .long("point-errors")
                .help("Show the offending source under each REPL error")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log to stderr; repeat for more detail")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("timings")
                .long("timings")
                .help("Print how long parsing a file took")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if let Err(e) = logging::init(matches.get_count("verbose")) {
        eprintln!("Error: {}", e);
    }

    let result = match matches.get_one::<String>("path") {
        Some(path) => parse_file(path, matches.get_flag("timings")),
        None => run_repl(&matches),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_repl(matches: &ArgMatches) -> io::Result<()> {
    let config = ReplConfig {
        prompt: matches
            .get_one::<String>("prompt")
            .cloned()
            .unwrap_or_else(|| String::from(PROMPT)),
        point_errors: matches.get_flag("point-errors"),
    };

    println!("Welcome to the sprout REPL");
    let stdin = io::stdin();
    repl::start(stdin.lock(), io::stdout(), &config)
}

fn parse_file(path: &str, timings: bool) -> io::Result<()> {
    let source = read_to_string(path)?;

    let start = Instant::now();
    let (program, errors) = parse(&source);
    if timings {
        println!("Parsed in {:?}", start.elapsed());
    }

    if errors.is_empty() {
        println!("{}", program);
        return Ok(());
    }

    for error in &errors {
        print!("{}", display_error(error, &source, path));
    }
    process::exit(1);
}

