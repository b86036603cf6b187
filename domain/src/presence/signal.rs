//! Events carried by the realtime presence channel.

use serde::{Deserialize, Serialize};

use crate::core::{AccountId, ConnectionId, MemberId, UnixMillis};
use crate::presence::roster::PresenceRoster;

/// What a connection reports about itself when it joins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionMeta {
    /// Seat the connected account occupies, when it has one. Spectator
    /// connections carry `None` and show up in presence but not in quorum.
    pub member: Option<MemberId>,
    pub connected_at: UnixMillis,
}

impl ConnectionMeta {
    pub fn new(member: Option<MemberId>, connected_at: UnixMillis) -> Self {
        Self {
            member,
            connected_at,
        }
    }
}

/// One presence event on a tenant's channel.
///
/// `Sync` carries the full roster and replaces the local view wholesale.
/// Consumers rely on periodic syncs to recover from missed joins and leaves
/// instead of expecting precise delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PresenceSignal {
    Sync {
        roster: PresenceRoster,
    },
    Join {
        account: AccountId,
        connection: ConnectionId,
        meta: ConnectionMeta,
    },
    Leave {
        account: AccountId,
        /// `Some` drops a single connection (one tab closed); `None` drops
        /// the whole identity (sign-out, transport teardown).
        connection: Option<ConnectionId>,
    },
}
