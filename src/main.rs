//! This is the main entry point for fix-tests.

use std::process::ExitCode;

use colored::Colorize;
use fix_tests::cli;

fn main() -> ExitCode {
    match cli::parse(None) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format!("fatal: {e}").red());
            ExitCode::FAILURE
        }
    }
}
