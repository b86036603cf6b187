//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use plenum_application::BallotExclusivity;

/// Output format for the sitting minutes
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted minutes with agenda and every vote line
    Full,
    /// Condensed per-ballot results
    Summary,
    /// JSON output
    Json,
}

/// Where the single-open-ballot rule applies.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExclusivityArg {
    /// One open ballot per session
    Session,
    /// One open ballot across the whole chamber
    Tenant,
}

impl ExclusivityArg {
    pub fn to_policy(self) -> BallotExclusivity {
        match self {
            ExclusivityArg::Session => BallotExclusivity::Session,
            ExclusivityArg::Tenant => BallotExclusivity::Tenant,
        }
    }
}

/// CLI arguments for plenum
#[derive(Parser, Debug)]
#[command(name = "plenum")]
#[command(author, version, about = "Session and voting core for multi-chamber deliberative bodies")]
#[command(long_about = r#"
Plenum runs a demonstration sitting of a municipal chamber against the
in-memory adapters: it seeds a tenant with seated members, schedules and
opens a session, builds the agenda, runs ballots with the single-open-ballot
rule enforced, and prints the resulting minutes.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./plenum.toml       Project-level config
3. ~/.config/plenum/config.toml   Global config

Example:
  plenum
  plenum --members 9 --journal minutes.jsonl
  plenum --exclusivity tenant -o json
"#)]
pub struct Cli {
    /// Number of seated members in the demo chamber
    #[arg(short, long, value_name = "N", default_value_t = 7)]
    pub members: usize,

    /// Append the sitting journal to this JSONL file
    #[arg(short, long, value_name = "PATH")]
    pub journal: Option<PathBuf>,

    /// Override the configured ballot exclusivity scope
    #[arg(long, value_enum, value_name = "SCOPE")]
    pub exclusivity: Option<ExclusivityArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the banner and color, printing only the minutes
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
