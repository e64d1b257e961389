//! Command-line interface.

use std::process::ExitCode;

use anyhow::Result;

mod args;
mod check;
mod exit_status;

pub use args::{Arguments, CheckArgs, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(command) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let status = match command {
        Command::Check(args) => check::check(args)?,
    };
    Ok(status.into())
}
