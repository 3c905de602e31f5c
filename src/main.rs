use clap::Parser;
use std::process::ExitCode;
use tidykit::cli::{self, Cli};
use tidykit::output::OutputFormatter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            OutputFormatter::error(&message);
            ExitCode::FAILURE
        }
    }
}
