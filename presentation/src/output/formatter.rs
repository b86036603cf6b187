//! Output formatter trait

use crate::output::minutes::SittingMinutes;

/// Trait for rendering assembled sitting minutes
pub trait OutputFormatter {
    /// Format the complete minutes
    fn format(&self, minutes: &SittingMinutes) -> String;

    /// Format as JSON
    fn format_json(&self, minutes: &SittingMinutes) -> String;

    /// Format per-ballot results only (concise output)
    fn format_summary(&self, minutes: &SittingMinutes) -> String;
}
