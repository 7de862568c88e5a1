//! bbvv CLI — validate and execute bbvv programs.
//!
//! Exit codes:
//! - 0: Success (`exit` reached, or the program validated)
//! - 1: Usage or file error
//! - 2: Validation failure
//! - 3: Runtime fault

mod commands;

use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::process;
use tracing::Level;

#[derive(Parser)]
#[command(name = "bbvv", version, about = "Run a bbvv register-machine program")]
struct Args {
    /// Program file to run
    file: PathBuf,

    /// Validate the program without running it
    #[arg(short, long)]
    check: bool,

    /// Print the decoded program in canonical form without running it
    #[arg(short, long, conflicts_with = "check")]
    emit: bool,

    /// Stop with an error after executing N instructions
    #[arg(long, value_name = "N")]
    max_steps: Option<u64>,

    /// Log decoding and execution to stderr (-v debug, -vv every step)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version are not errors.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    init_logging(args.verbose);

    let result = if args.check {
        commands::check(&args.file)
    } else if args.emit {
        commands::emit(&args.file)
    } else {
        commands::run(&args.file, args.max_steps)
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
