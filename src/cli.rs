//! Command-line interface: clap definitions and per-command handlers.

pub mod commands;
pub mod parser;
