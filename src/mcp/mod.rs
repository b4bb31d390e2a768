//! Model Context Protocol (MCP) server implementation.
//!
//! This module provides an MCP server that exposes keylens to AI assistants.
//! Agents can resolve single keys or annotate text and files with the
//! translation values of the keys they contain.
//!
//! ## Module Structure
//!
//! - `helpers`: Helper functions for building tool results
//! - `server`: Main MCP server implementation
//! - `types`: MCP-specific parameter and result types

mod helpers;
mod server;
pub mod types;

pub use server::{KeylensMcpServer, run_server};
