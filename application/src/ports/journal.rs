//! Port for the structured sitting journal.
//!
//! Defines the [`SittingJournal`] trait for recording what the chamber
//! decided (sessions opened, ballots closed, votes recorded) as structured
//! events.
//!
//! This is separate from `tracing`-based operation logs: tracing carries
//! human-readable diagnostics, while the journal is the auditable record a
//! minutes export is built from, in a machine-readable format (JSONL).

use serde_json::{Value, json};

use plenum_domain::{
    Actor, AgendaItem, Ballot, Matter, MatterId, Session, SessionId, Tally, Vote,
};

/// A structured sitting event for journaling.
pub struct JournalEvent {
    /// Event type identifier (e.g., "ballot_closed", "vote_recorded").
    pub event_type: &'static str,
    /// JSON payload with event-specific fields.
    pub payload: Value,
}

impl JournalEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    pub fn session_scheduled(actor: &Actor, session: &Session) -> Self {
        Self::new(
            "session_scheduled",
            json!({
                "actor": actor.account.as_str(),
                "tenant": session.tenant.get(),
                "session": session.id.get(),
                "title": session.title,
                "scheduled_for": session.scheduled_for,
            }),
        )
    }

    pub fn session_opened(actor: &Actor, session: &Session) -> Self {
        Self::new(
            "session_opened",
            json!({
                "actor": actor.account.as_str(),
                "session": session.id.get(),
                "opened_at": session.opened_at,
            }),
        )
    }

    pub fn session_closed(actor: &Actor, session: &Session) -> Self {
        Self::new(
            "session_closed",
            json!({
                "actor": actor.account.as_str(),
                "session": session.id.get(),
                "closed_at": session.closed_at,
            }),
        )
    }

    pub fn agenda_item_added(actor: &Actor, item: &AgendaItem) -> Self {
        Self::new(
            "agenda_item_added",
            json!({
                "actor": actor.account.as_str(),
                "session": item.session.get(),
                "matter": item.matter.get(),
                "position": item.position,
            }),
        )
    }

    pub fn agenda_item_removed(actor: &Actor, session: SessionId, matter: MatterId) -> Self {
        Self::new(
            "agenda_item_removed",
            json!({
                "actor": actor.account.as_str(),
                "session": session.get(),
                "matter": matter.get(),
            }),
        )
    }

    pub fn ballot_opened(actor: &Actor, ballot: &Ballot) -> Self {
        Self::new(
            "ballot_opened",
            json!({
                "actor": actor.account.as_str(),
                "ballot": ballot.id.get(),
                "session": ballot.session.get(),
                "matter": ballot.matter.get(),
                "opened_at": ballot.opened_at,
            }),
        )
    }

    pub fn vote_recorded(actor: &Actor, vote: &Vote) -> Self {
        Self::new(
            "vote_recorded",
            json!({
                "actor": actor.account.as_str(),
                "ballot": vote.ballot.get(),
                "member": vote.member.get(),
                "value": vote.value,
                "recorded_at": vote.recorded_at,
            }),
        )
    }

    pub fn ballot_closed(actor: &Actor, ballot: &Ballot, matter: &Matter, tally: &Tally) -> Self {
        Self::new(
            "ballot_closed",
            json!({
                "actor": actor.account.as_str(),
                "ballot": ballot.id.get(),
                "matter": matter.id.get(),
                "closed_at": ballot.closed_at,
                "tally": tally,
                "carried": tally.carried(),
            }),
        )
    }
}

/// Port for recording sitting events to a structured journal.
///
/// Implementations write each event as a single record (e.g., one JSONL
/// line). The `record` method is intentionally synchronous and non-fallible
/// so a journaling failure can never disturb a vote in flight.
pub trait SittingJournal: Send + Sync {
    fn record(&self, event: JournalEvent);
}

/// No-op implementation for tests and when journaling is disabled.
pub struct NoJournal;

impl SittingJournal for NoJournal {
    fn record(&self, _event: JournalEvent) {}
}
