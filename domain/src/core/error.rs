//! Error taxonomy shared by every chamber operation.

use thiserror::Error;

use crate::ability::{Action, Role, Subject};
use crate::core::{BallotId, MemberId};

/// Entity families referenced by [`CoreError::NotFound`] and
/// [`CoreError::InvalidTransition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Tenant,
    Member,
    Matter,
    Session,
    AgendaItem,
    Ballot,
    Vote,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Tenant => "tenant",
            EntityKind::Member => "member",
            EntityKind::Matter => "matter",
            EntityKind::Session => "session",
            EntityKind::AgendaItem => "agenda item",
            EntityKind::Ballot => "ballot",
            EntityKind::Vote => "vote",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a member may not vote on a ballot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IneligibilityReason {
    /// Executive seats (mayor, deputy mayor) sit in the chamber but do not vote.
    Executive,
    /// The member record is deactivated.
    Inactive,
}

impl std::fmt::Display for IneligibilityReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IneligibilityReason::Executive => write!(f, "holds an executive seat"),
            IneligibilityReason::Inactive => write!(f, "is inactive"),
        }
    }
}

/// Every failure the chamber core reports.
///
/// Callers branch on the variant, not the message: only
/// [`CoreError::StoreUnavailable`] is worth retrying, everything else is a
/// definitive verdict about the request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// The ability gate denied the action for this role.
    #[error("role {role} may not {action} {subject}")]
    Unauthorized {
        role: Role,
        action: Action,
        subject: Subject,
    },

    /// The entity exists but is in the wrong state for the request.
    #[error("invalid transition for {entity} {id}: {detail}")]
    InvalidTransition {
        entity: EntityKind,
        id: u64,
        detail: String,
    },

    /// Opening a second concurrent ballot in the same exclusivity scope.
    #[error("ballot {open_ballot} is already open in this scope")]
    BallotAlreadyOpen { open_ballot: BallotId },

    /// A vote arrived after the ballot closed.
    #[error("ballot {ballot} is closed")]
    BallotClosed { ballot: BallotId },

    /// The member may not vote on this ballot.
    #[error("member {member} {reason}")]
    MemberIneligible {
        member: MemberId,
        reason: IneligibilityReason,
    },

    /// No entity with this id, or it belongs to another tenant.
    #[error("{entity} {id} not found")]
    NotFound { entity: EntityKind, id: u64 },

    /// The backing store could not be reached.
    #[error("store unavailable: {reason}")]
    StoreUnavailable { reason: String },
}

impl CoreError {
    /// True when retrying the same request may succeed.
    ///
    /// Only infrastructure faults qualify; every other variant signals a
    /// deliberate rejection that a retry would merely repeat.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CoreError::StoreUnavailable { .. })
    }

    /// Shorthand for a [`CoreError::NotFound`] on a numbered entity.
    pub fn not_found(entity: EntityKind, id: u64) -> Self {
        CoreError::NotFound { entity, id }
    }

    /// Shorthand for a [`CoreError::StoreUnavailable`] with a reason.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        CoreError::StoreUnavailable {
            reason: reason.into(),
        }
    }
}
