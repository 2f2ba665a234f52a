use std::process::ExitCode;

use clap::Parser;
use glossa::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();

    match glossa::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
