//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Run the `no-en` rule over JS/TS files

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Command> {
        if self.command.is_none() {
            Self::command().print_help().ok();
        }
        self.command
    }
}

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Files or directories to check
    #[arg(value_name = "PATH", default_value = ".")]
    pub paths: Vec<String>,

    /// Call to leave alone: a bare name (`logger`) or a dotted path (`Sentry.captureMessage`)
    /// Can be specified multiple times: --exclude t --exclude Sentry.captureMessage
    #[arg(
        long = "exclude",
        value_name = "CALL",
        env = "NO_EN_EXCLUDES",
        value_delimiter = ','
    )]
    pub excludes: Vec<String>,

    /// Rule options as a JSON object, e.g. '{"excludes": ["t"]}'
    #[arg(long, value_name = "JSON")]
    pub options: Option<String>,

    /// Glob pattern for paths to skip (can be specified multiple times)
    #[arg(long = "ignore", value_name = "GLOB")]
    pub ignores: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check JS/TS files for hardcoded English text in string literals
    Check(CheckArgs),
}
