//! Binary entry point for the `makocode` command-line tool.

use std::process::ExitCode;

fn main() -> ExitCode {
    match makocode::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            makocode::cli::report_error(&e);
            ExitCode::FAILURE
        }
    }
}
