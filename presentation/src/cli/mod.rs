//! CLI argument parsing.

pub mod commands;

pub use commands::{Cli, ExclusivityArg, OutputFormat};
