//! Core domain concepts shared across all subdomains.
//!
//! - [`ids`]: typed identifiers for tenants, members, matters, sessions, ballots
//! - [`time`]: epoch-millisecond timestamps
//! - [`error::CoreError`]: the error taxonomy every operation reports from

pub mod error;
pub mod ids;
pub mod time;

pub use error::{CoreError, EntityKind, IneligibilityReason};
pub use ids::{AccountId, BallotId, ConnectionId, MatterId, MemberId, SessionId, TenantId};
pub use time::{UnixMillis, now_millis};
