//! Command-line interface.

mod args;
mod commands;
mod context;
mod exit_status;
mod logging;
mod report;

use anyhow::Result;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use commands::{check::check, init::init, list::list, plural::plural, print::print};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(Arguments {
        command: Some(command),
    }) = args.with_command_or_help()
    else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Command::Print(cmd) => print(cmd),
        Command::Plural(cmd) => plural(cmd),
        Command::List(cmd) => list(cmd),
        Command::Check(cmd) => check(cmd),
        Command::Init => init(),
    }
}
