//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod journal;
pub mod presence_channel;
pub mod store;

pub use journal::{JournalEvent, NoJournal, SittingJournal};
pub use presence_channel::{PresenceChannel, PresenceFeed};
pub use store::{BallotExclusivity, BallotScope, ChamberStore, MatterDraft, MemberDraft};
