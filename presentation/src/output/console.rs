//! Console output formatter for sitting minutes

use crate::output::formatter::OutputFormatter;
use crate::output::minutes::SittingMinutes;
use colored::Colorize;
use plenum_domain::{Tally, VoteValue};

/// Formats sitting minutes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete minutes
    pub fn format(minutes: &SittingMinutes) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&Self::header("Sitting Minutes"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Chamber:".cyan().bold(),
            minutes.tenant.name
        ));
        output.push_str(&format!(
            "{} {} ({})\n",
            "Session:".cyan().bold(),
            minutes.session.title,
            minutes.session.status
        ));
        if !minutes.attendance.is_empty() {
            output.push_str(&format!(
                "{} {}\n",
                "Present:".cyan().bold(),
                minutes.attendance.join(", ")
            ));
        }

        // Agenda
        output.push_str(&Self::section_header("Agenda"));
        if minutes.agenda.is_empty() {
            output.push_str("  (no items)\n");
        }
        for entry in &minutes.agenda {
            output.push_str(&format!("  {}. {}\n", entry.item.position, entry.title));
        }

        // Ballots
        for minute in &minutes.ballots {
            output.push_str(&Self::section_header(&format!(
                "Ballot {}: {}",
                minute.ballot.id, minute.matter.title
            )));
            for line in &minute.votes {
                output.push_str(&format!(
                    "  {:<24} {}\n",
                    line.member,
                    Self::vote_value(line.value)
                ));
            }
            output.push_str(&format!("\n  {} {}\n", "Tally:".bold(), minute.tally));
            output.push_str(&format!("  {}\n", Self::verdict(&minute.tally)));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(minutes: &SittingMinutes) -> String {
        serde_json::to_string_pretty(minutes).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format per-ballot results only (concise output)
    pub fn format_summary(minutes: &SittingMinutes) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            format!("=== {} ===", minutes.session.title).cyan().bold()
        ));

        for minute in &minutes.ballots {
            output.push_str(&format!(
                "{} {} ({})\n",
                Self::verdict(&minute.tally),
                minute.matter.title.bold(),
                minute.tally
            ));
        }
        if minutes.ballots.is_empty() {
            output.push_str("No ballots were held.\n");
        }

        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    fn vote_value(value: VoteValue) -> String {
        match value {
            VoteValue::Yes => "yes".green().bold().to_string(),
            VoteValue::No => "no".red().bold().to_string(),
            VoteValue::Abstain => "abstain".yellow().to_string(),
            VoteValue::Absent => "absent".dimmed().to_string(),
        }
    }

    fn verdict(tally: &Tally) -> String {
        if tally.carried() {
            "CARRIED".green().bold().to_string()
        } else {
            "REJECTED".red().bold().to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, minutes: &SittingMinutes) -> String {
        Self::format(minutes)
    }

    fn format_json(&self, minutes: &SittingMinutes) -> String {
        Self::format_json(minutes)
    }

    fn format_summary(&self, minutes: &SittingMinutes) -> String {
        Self::format_summary(minutes)
    }
}
