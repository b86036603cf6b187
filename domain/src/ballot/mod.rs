//! Voting rounds and their derived tallies.
//!
//! - [`entities::Ballot`]: one round over one matter, `open -> closed`
//! - [`vote::Vote`]: one member's standing choice, keyed by (ballot, member)
//! - [`tally::Tally`]: counts derived from the vote rows, never stored

pub mod entities;
pub mod tally;
pub mod vote;

pub use entities::{Ballot, BallotStatus};
pub use tally::Tally;
pub use vote::{Vote, VoteValue};
