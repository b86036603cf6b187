//! Domain layer for plenum
//!
//! This crate contains the chamber's business rules: entities, value objects,
//! and the pure decision functions the voting flow is built from. It has no
//! dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Sitting
//!
//! A chamber ("tenant") runs scheduled plenary sessions. Each session owns an
//! ordered agenda of matters and, at any instant, at most one open ballot:
//!
//! - **Session**: `scheduled -> open -> closed`, hosting the agenda
//! - **Ballot**: one voting round over one matter, `open -> closed`
//! - **Vote**: one standing choice per (ballot, member), re-castable until close
//!
//! ## Ability
//!
//! Every mutating operation passes a single capability gate keyed by the
//! caller's role (`admin`, `chair`, `member`, `public`). Denials are plain
//! values, never panics.
//!
//! ## Presence
//!
//! Who is connected right now, per tenant. Advisory only: quorum display
//! reads it, vote validity never does.

pub mod ability;
pub mod ballot;
pub mod chamber;
pub mod core;
pub mod matter;
pub mod presence;
pub mod session;

// Re-export commonly used types
pub use ability::{Action, Actor, Role, Subject, capable, require};
pub use ballot::{Ballot, BallotStatus, Tally, Vote, VoteValue};
pub use chamber::{Member, Tenant};
pub use core::{
    AccountId, BallotId, ConnectionId, CoreError, EntityKind, IneligibilityReason, MatterId,
    MemberId, SessionId, TenantId, UnixMillis, now_millis,
};
pub use matter::{Matter, MatterStatus};
pub use presence::{Attendee, ConnectionMeta, PresenceRoster, PresenceSignal};
pub use session::{AgendaItem, Session, SessionStatus};
