//! Configuration file loading for plenum
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./plenum.toml` or `./.plenum.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/plenum/config.toml`
//! 4. Fallback: `~/.config/plenum/config.toml`
//! 5. Default values

mod file_config;
mod loader;
mod validation;

pub use file_config::{
    FileConfig, FileExportConfig, FileOutputConfig, FilePolicyConfig, FilePresenceConfig,
};
pub use loader::ConfigLoader;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
