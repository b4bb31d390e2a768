use std::process::ExitCode;

use clap::Parser;
use keylens::cli::{Arguments, Command, ExitStatus};
use keylens::logger::init_logger;

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_logger(args.level_filter(), args.log_file.as_deref());

    if matches!(args.command, Some(Command::Serve)) {
        if let Err(err) = keylens::mcp::run_server() {
            eprintln!("Error: {}", err);
            return ExitStatus::Error.into();
        }
        return ExitStatus::Success.into();
    }

    match keylens::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
