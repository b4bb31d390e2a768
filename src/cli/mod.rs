//! Command-line host.
//!
//! Loads configuration and the translation table once per run, then renders
//! annotations for the requested files in the configured display mode.
//!
//! ## Module Structure
//!
//! - `args`: clap argument definitions
//! - `commands`: one handler per subcommand plus the shared run context
//! - `exit_status`: process exit codes
//! - `report`: terminal rendering of annotations
//! - `run`: command dispatch

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

use std::process::ExitCode;

use anyhow::Result;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let status = run::run(args)?;
    Ok(status.into())
}
