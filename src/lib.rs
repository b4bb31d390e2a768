//! keylens - translation values next to translation keys
//!
//! keylens finds quoted uppercase translation keys such as `"ERROR.NOT_FOUND"`
//! in source code, resolves them against a nested JSON translation file and
//! shows the values inline, as hover text, or as lens lines above the code.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and rendering)
//! - `config`: Configuration file loading and parsing
//! - `core`: Translation table, key scanning and resolution
//! - `logger`: Diagnostic logging setup
//! - `mcp`: Model Context Protocol server implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod logger;
pub mod mcp;
