//! Application layer for plenum
//!
//! This crate contains use cases, port definitions, and the presence
//! tracker. It depends only on the domain layer.
//!
//! Concurrency stance: callers are many and unserialized, so correctness of
//! the voting flow comes from the store port's atomic conditional
//! operations, never from in-process locks held here. The use cases add gate
//! checks, bounded retry for transient faults, and the journal trail.

pub mod ports;
pub mod presence;
pub mod retry;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use ports::{
    journal::{JournalEvent, NoJournal, SittingJournal},
    presence_channel::{PresenceChannel, PresenceFeed},
    store::{BallotExclusivity, BallotScope, ChamberStore, MatterDraft, MemberDraft},
};
pub use presence::tracker::PresenceTracker;
pub use retry::RetryPolicy;
pub use use_cases::cast_vote::CastVoteUseCase;
pub use use_cases::manage_session::ManageSessionUseCase;
pub use use_cases::run_ballot::{BallotOutcome, BallotState, RunBallotUseCase};
