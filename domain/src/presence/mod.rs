//! Live presence: who is connected right now.
//!
//! - [`roster::PresenceRoster`]: per-tenant view of connected identities
//! - [`signal::PresenceSignal`]: sync/join/leave events from the channel

pub mod roster;
pub mod signal;

pub use roster::{Attendee, PresenceRoster};
pub use signal::{ConnectionMeta, PresenceSignal};
