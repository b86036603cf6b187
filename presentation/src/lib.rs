//! Presentation layer for plenum
//!
//! This crate contains CLI definitions and the console formatters
//! that render sitting minutes.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, ExclusivityArg, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::minutes::{AgendaEntry, BallotMinute, SittingMinutes, VoteLine};
