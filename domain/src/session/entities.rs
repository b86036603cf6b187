//! Plenary sessions and their ordered agendas.

use serde::{Deserialize, Serialize};

use crate::core::{CoreError, EntityKind, MatterId, SessionId, TenantId, UnixMillis};

/// Lifecycle of a plenary session. `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Scheduled,
    Open,
    Closed,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Scheduled => "scheduled",
            SessionStatus::Open => "open",
            SessionStatus::Closed => "closed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::Closed)
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An ordered reference placing a matter on a session's agenda.
///
/// Positions are dense integers assigned at append time and never renumbered,
/// so removing an item leaves a gap rather than shifting its neighbours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgendaItem {
    pub session: SessionId,
    pub matter: MatterId,
    pub position: u32,
    pub added_at: UnixMillis,
}

impl AgendaItem {
    pub fn new(session: SessionId, matter: MatterId, position: u32, added_at: UnixMillis) -> Self {
        Self {
            session,
            matter,
            position,
            added_at,
        }
    }

    /// Position for the next appended item: one past the highest in use.
    pub fn next_position(existing: &[AgendaItem]) -> u32 {
        existing.iter().map(|item| item.position).max().unwrap_or(0) + 1
    }
}

/// A scheduled plenary meeting with its own agenda and lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub tenant: TenantId,
    pub title: String,
    pub scheduled_for: UnixMillis,
    pub opened_at: Option<UnixMillis>,
    pub closed_at: Option<UnixMillis>,
    pub status: SessionStatus,
}

impl Session {
    pub fn new(
        id: SessionId,
        tenant: TenantId,
        title: impl Into<String>,
        scheduled_for: UnixMillis,
    ) -> Self {
        Self {
            id,
            tenant,
            title: title.into(),
            scheduled_for,
            opened_at: None,
            closed_at: None,
            status: SessionStatus::Scheduled,
        }
    }

    /// Transition `scheduled -> open`, stamping the actual start time.
    pub fn open(&mut self, now: UnixMillis) -> Result<(), CoreError> {
        if self.status != SessionStatus::Scheduled {
            return Err(self.invalid_transition(format!("cannot open from {}", self.status)));
        }
        self.status = SessionStatus::Open;
        self.opened_at = Some(now);
        Ok(())
    }

    /// Transition `open -> closed`.
    ///
    /// The caller is responsible for first ensuring no ballot under this
    /// session is still open; the entity cannot see ballots.
    pub fn close(&mut self, now: UnixMillis) -> Result<(), CoreError> {
        if self.status != SessionStatus::Open {
            return Err(self.invalid_transition(format!("cannot close from {}", self.status)));
        }
        self.status = SessionStatus::Closed;
        self.closed_at = Some(now);
        Ok(())
    }

    /// Agenda edits are allowed while scheduled or open, never after close.
    pub fn guard_agenda_mutable(&self) -> Result<(), CoreError> {
        if self.status.is_terminal() {
            return Err(self.invalid_transition("agenda is frozen once the session closes".into()));
        }
        Ok(())
    }

    /// Ballots may only be opened while the session itself is open.
    pub fn guard_open(&self) -> Result<(), CoreError> {
        if self.status != SessionStatus::Open {
            return Err(self.invalid_transition(format!("session is {}, not open", self.status)));
        }
        Ok(())
    }

    /// Scheduled and open sessions both hold their agenda matters busy.
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }

    fn invalid_transition(&self, detail: String) -> CoreError {
        CoreError::InvalidTransition {
            entity: EntityKind::Session,
            id: self.id.get(),
            detail,
        }
    }
}
