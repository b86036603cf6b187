//! Raw TOML configuration data types.
//!
//! These structs represent the exact structure of the TOML config file.
//! Free-text fields stay strings at this level; the lenient `parse_*` helpers
//! turn them into typed values and report unknown spellings as warnings
//! instead of failing the load.

use serde::{Deserialize, Serialize};

use plenum_application::BallotExclusivity;

use super::validation::{ConfigIssue, ConfigIssueCode, Severity};

const DEFAULT_SYNC_INTERVAL_SECS: u64 = 30;
const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Raw policy configuration from TOML (`[policy]` section)
///
/// # Example
///
/// ```toml
/// [policy]
/// ballot_exclusivity = "session"   # "session" or "tenant"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePolicyConfig {
    /// Scope of the single-open-ballot invariant: "session" or "tenant"
    pub ballot_exclusivity: String,
}

impl Default for FilePolicyConfig {
    fn default() -> Self {
        Self {
            ballot_exclusivity: "session".to_string(),
        }
    }
}

impl FilePolicyConfig {
    /// Parse ballot_exclusivity into the typed scope, warning on unknown
    /// values and falling back to session-wide.
    pub fn parse_ballot_exclusivity(&self) -> (BallotExclusivity, Vec<ConfigIssue>) {
        match self.ballot_exclusivity.to_lowercase().as_str() {
            "session" => (BallotExclusivity::Session, vec![]),
            "tenant" => (BallotExclusivity::Tenant, vec![]),
            _ => {
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "policy.ballot_exclusivity".to_string(),
                        value: self.ballot_exclusivity.clone(),
                        valid_values: vec!["session".to_string(), "tenant".to_string()],
                    },
                    message: format!(
                        "policy.ballot_exclusivity: unknown value '{}', falling back to 'session'",
                        self.ballot_exclusivity
                    ),
                };
                (BallotExclusivity::default(), vec![issue])
            }
        }
    }
}

/// Raw presence configuration from TOML (`[presence]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePresenceConfig {
    /// Seconds between periodic roster re-syncs
    pub sync_interval_secs: u64,
    /// Per-tenant broadcast buffer size
    pub channel_capacity: usize,
}

impl Default for FilePresenceConfig {
    fn default() -> Self {
        Self {
            sync_interval_secs: DEFAULT_SYNC_INTERVAL_SECS,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl FilePresenceConfig {
    /// Sync cadence with the zero value mapped back to the default; a zero
    /// interval would panic the tokio timer.
    pub fn parse_sync_interval_secs(&self) -> (u64, Vec<ConfigIssue>) {
        Self::nonzero(
            "presence.sync_interval_secs",
            self.sync_interval_secs,
            DEFAULT_SYNC_INTERVAL_SECS,
        )
    }

    /// Broadcast capacity with the zero value mapped back to the default; a
    /// zero-capacity broadcast channel would panic at construction.
    pub fn parse_channel_capacity(&self) -> (usize, Vec<ConfigIssue>) {
        let (value, issues) = Self::nonzero(
            "presence.channel_capacity",
            self.channel_capacity as u64,
            DEFAULT_CHANNEL_CAPACITY as u64,
        );
        (value as usize, issues)
    }

    fn nonzero(field: &str, value: u64, fallback: u64) -> (u64, Vec<ConfigIssue>) {
        if value > 0 {
            return (value, vec![]);
        }
        let issue = ConfigIssue {
            severity: Severity::Warning,
            code: ConfigIssueCode::InvalidValue {
                field: field.to_string(),
                value: "0".to_string(),
            },
            message: format!("{field}: 0 is not usable, falling back to {fallback}"),
        };
        (fallback, vec![issue])
    }
}

/// Raw output configuration from TOML (`[output]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Raw export configuration from TOML (`[export]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExportConfig {
    /// Directory for JSONL sitting journals; unset disables journaling
    pub minutes_dir: Option<String>,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Coordination policy settings
    pub policy: FilePolicyConfig,
    /// Presence channel settings
    pub presence: FilePresenceConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Journal export settings
    pub export: FileExportConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks enum
    /// spellings and numeric ranges; nothing here aborts the load, the typed
    /// accessors fall back to defaults for every reported issue.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.policy.parse_ballot_exclusivity().1);
        issues.extend(self.presence.parse_sync_interval_secs().1);
        issues.extend(self.presence.parse_channel_capacity().1);

        if let Some(dir) = &self.export.minutes_dir
            && dir.trim().is_empty()
        {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::InvalidValue {
                    field: "export.minutes_dir".to_string(),
                    value: dir.clone(),
                },
                message: "export.minutes_dir: empty path, journaling stays disabled".to_string(),
            });
        }

        issues
    }
}
