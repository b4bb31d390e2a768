//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `annotate`: Show translation values for key literals in files
//! - `hover`: Show the translation of the key literal at a position
//! - `lookup`: Resolve a single key
//! - `init`: Initialize keylens configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};
use log::LevelFilter;

use crate::{config::DisplayMode, logger::LogLevel};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Diagnostic log level (default: warn, or info with --verbose)
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Write diagnostics to this file instead of stderr
    #[arg(long, global = true, env = "KEYLENS_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Annotate(cmd)) => cmd.common.verbose,
            Some(Command::Hover(cmd)) => cmd.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        match self.log_level {
            Some(level) => level.into(),
            None if self.verbose() => LevelFilter::Info,
            None => LevelFilter::Warn,
        }
    }
}

/// Common arguments shared by the annotation commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Translation JSON file (overrides config file)
    #[arg(long, env = "KEYLENS_TRANSLATION_FILE")]
    pub translation_file: Option<PathBuf>,

    /// Display mode (overrides config file)
    #[arg(long, value_enum)]
    pub mode: Option<DisplayMode>,

    /// Require matching opening and closing quotes around keys
    #[arg(long)]
    pub strict_quotes: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct AnnotateCommand {
    /// Files or directories to annotate (default: configured includes)
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct HoverCommand {
    /// File containing the key literal
    pub file: PathBuf,

    /// 1-based line number
    pub line: usize,

    /// 1-based column number
    pub column: usize,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Dotted translation key, e.g. ERROR.NOT_FOUND
    pub key: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show translation values for translation keys in source files
    Annotate(AnnotateCommand),
    /// Show the translation of the key at a file position
    Hover(HoverCommand),
    /// Print the translation value of a single key
    Lookup(LookupCommand),
    /// Initialize a new .keylensrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
