use colored::Colorize;
use std::process::ExitCode;

fn main() -> ExitCode {
    match authorship_cli::run() {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e);
            ExitCode::FAILURE
        }
    }
}
