use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{annotate::annotate, hover::hover, init::init, lookup::lookup},
    exit_status::ExitStatus,
};

/// Dispatch to the handler of the parsed command.
pub fn run(Arguments { command, .. }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Annotate(cmd)) => annotate(cmd),
        Some(Command::Hover(cmd)) => hover(cmd),
        Some(Command::Lookup(cmd)) => lookup(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
