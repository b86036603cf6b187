//! CLI entrypoint for plenum
//!
//! This is the main binary that wires together all layers using
//! dependency injection and runs a demonstration sitting.

mod demo;

use anyhow::{Result, bail};
use clap::Parser;
use plenum_application::SittingJournal;
use plenum_infrastructure::{
    BroadcastPresenceChannel, ConfigIssue, ConfigLoader, FileConfig, JsonlSittingJournal,
    MemoryStore,
};
use plenum_presentation::{Cli, ConsoleFormatter, OutputFormat};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    if cli.quiet {
        colored::control::set_override(false);
    }

    info!("Starting plenum");

    // Load configuration
    let config = if cli.no_config {
        FileConfig::default()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };
    let issues = config.validate();
    for issue in &issues {
        warn!("config: {}", issue.message);
    }
    if ConfigIssue::has_errors(&issues) {
        bail!("configuration is invalid, aborting");
    }

    let exclusivity = match cli.exclusivity {
        Some(arg) => arg.to_policy(),
        None => config.policy.parse_ballot_exclusivity().0,
    };

    // === Dependency Injection ===
    let store = Arc::new(MemoryStore::with_exclusivity(exclusivity));
    let channel = Arc::new(BroadcastPresenceChannel::with_capacity(
        config.presence.parse_channel_capacity().0,
    ));
    let sync = channel.start_sync_task(Duration::from_secs(
        config.presence.parse_sync_interval_secs().0,
    ));

    let journal_path = cli.journal.clone().or_else(|| {
        config
            .export
            .minutes_dir
            .as_ref()
            .map(|dir| PathBuf::from(dir).join("sitting.jsonl"))
    });
    let journal: Option<Arc<dyn SittingJournal>> = journal_path.and_then(|path| {
        let journal = JsonlSittingJournal::new(&path)?;
        info!("Journaling sitting events to {}", path.display());
        Some(Arc::new(journal) as Arc<dyn SittingJournal>)
    });

    // Print header
    if !cli.quiet {
        println!();
        println!("+============================================================+");
        println!("|                  Plenum - Demo Sitting                     |");
        println!("+============================================================+");
        println!();
        println!("Members: {}", cli.members);
        println!("Exclusivity: one open ballot per {}", exclusivity);
        println!();
    }

    let minutes = demo::run(
        Arc::clone(&store),
        Arc::clone(&channel),
        journal,
        cli.members,
        !cli.quiet,
    )
    .await?;

    sync.abort();

    // Output results
    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&minutes),
        OutputFormat::Summary => ConsoleFormatter::format_summary(&minutes),
        OutputFormat::Json => ConsoleFormatter::format_json(&minutes),
    };

    println!("{}", output);

    Ok(())
}
