//! Terminal front end for QuickNotes.
//!
//! # Responsibility
//! - Parse flags and environment into a command.
//! - Render notes and report failures on stderr with exit code 1.

mod cli;
mod run;

use clap::Parser;
use std::process::exit;

fn main() {
    let cli = cli::Cli::parse();
    let mut stdout = std::io::stdout().lock();

    if let Err(err) = run::run(cli, &mut stdout) {
        eprintln!("error: {err}");
        exit(1);
    }
}
