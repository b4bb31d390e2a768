//! Diagnostic logging setup.
//!
//! Everything in the crate logs through the `log` facade. The binary installs
//! a `fern` dispatcher writing `[timestamp LEVEL target] message` lines to
//! stderr or to a log file. Stdout is left alone: it carries command output,
//! or the MCP protocol when serving.

use std::{fs::OpenOptions, path::Path};

use chrono::Local;
use clap::ValueEnum;
use fern::Dispatch;
use log::{LevelFilter, info};

const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
        }
    }
}

/// Install the global logger. Falls back to stderr when the log file cannot
/// be opened. Calling this twice keeps the first logger.
pub fn init_logger(level: LevelFilter, log_file: Option<&Path>) {
    let dispatch = base_dispatch(level);

    let dispatch = match log_file {
        Some(path) => match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => dispatch.chain(file),
            Err(e) => {
                eprintln!("Failed to open log file {}: {}", path.display(), e);
                dispatch.chain(std::io::stderr())
            }
        },
        None => dispatch.chain(std::io::stderr()),
    };

    if let Err(e) = dispatch.apply() {
        eprintln!("Failed to apply logger: {:?}", e);
        return;
    }

    info!("{} v{}", CRATE_NAME, CRATE_VERSION);
}

fn base_dispatch(level: LevelFilter) -> Dispatch {
    Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S %:z"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
}
