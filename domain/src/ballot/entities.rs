//! Ballots: one voting round over one matter within one session.

use serde::{Deserialize, Serialize};

use crate::core::{BallotId, CoreError, EntityKind, MatterId, SessionId, TenantId, UnixMillis};

/// Lifecycle of a single voting round. `Closed` is terminal per instance;
/// a fresh ballot may be opened later for the same matter and session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BallotStatus {
    Open,
    Closed,
}

impl BallotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BallotStatus::Open => "open",
            BallotStatus::Closed => "closed",
        }
    }
}

impl std::fmt::Display for BallotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One voting round, opened against exactly one matter within one session.
///
/// A ballot is born open; there is no scheduled phase. The single-open-ballot
/// invariant (at most one open ballot per exclusivity scope) is not visible
/// from an individual ballot and is enforced by the store's conditional
/// insert instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ballot {
    pub id: BallotId,
    pub tenant: TenantId,
    pub session: SessionId,
    pub matter: MatterId,
    pub status: BallotStatus,
    pub opened_at: UnixMillis,
    pub closed_at: Option<UnixMillis>,
}

impl Ballot {
    pub fn new(
        id: BallotId,
        tenant: TenantId,
        session: SessionId,
        matter: MatterId,
        opened_at: UnixMillis,
    ) -> Self {
        Self {
            id,
            tenant,
            session,
            matter,
            status: BallotStatus::Open,
            opened_at,
            closed_at: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == BallotStatus::Open
    }

    /// Transition `open -> closed`, stamping the closure time.
    pub fn close(&mut self, now: UnixMillis) -> Result<(), CoreError> {
        if !self.is_open() {
            return Err(CoreError::InvalidTransition {
                entity: EntityKind::Ballot,
                id: self.id.get(),
                detail: "already closed".into(),
            });
        }
        self.status = BallotStatus::Closed;
        self.closed_at = Some(now);
        Ok(())
    }

    /// Votes are accepted while open; afterwards every cast is rejected.
    pub fn guard_accepts_votes(&self) -> Result<(), CoreError> {
        if self.is_open() {
            Ok(())
        } else {
            Err(CoreError::BallotClosed { ballot: self.id })
        }
    }
}
