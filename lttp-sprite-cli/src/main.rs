//! `lttp-sprite`: swaps Link's sprite sheet in an A Link to the Past ROM.
//!
//! ```text
//! # Writes zelda_lttp.sfc to the current directory.
//! lttp-sprite --write --sprite zelda.spr --rom lttp.sfc
//!
//! # Same, with frame advance enabled for reviewing sprites in motion.
//! lttp-sprite --write --frame-advance --sprite zelda.spr --rom lttp.sfc
//!
//! # Pulls the sprite sheet back out of a patched ROM.
//! lttp-sprite --read --sprite extracted.spr --rom zelda_lttp.sfc
//! ```

mod args;
mod output;
mod run;

use clap::Parser;
use std::io::{self, BufRead, IsTerminal};
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::args::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let invocation = match cli.validate() {
        Ok(invocation) => invocation,
        Err(e) => {
            acknowledge(&format!(
                "{} Please run with -h to see help for further information.",
                e
            ));
            return ExitCode::FAILURE;
        }
    };

    init_logging(cli.loglevel.into());

    match run::execute(&invocation) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

/// Renders the whole context chain on one line. Goes to stderr regardless of the log filter.
fn failure_message(error: &anyhow::Error) -> String {
    format!("Error: {:#}", error)
}

/// Shows `message` and, when run interactively, waits for Enter so a double-clicked console
/// window stays open long enough to read it.
fn acknowledge(message: &str) {
    eprintln!("{}", message);
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("Press Enter to exit.");
        let mut line = String::new();
        let _ = stdin.lock().read_line(&mut line);
    }
}

fn init_logging(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .with_level(false)
        .init();
}
