//! Realtime presence channel port.
//!
//! Defines the interface to the tenant-scoped publish/subscribe collaborator
//! that carries sync/join/leave presence signals. Implementations live in the
//! infrastructure layer.
//!
//! Presence is fire-and-forget: none of these methods can fail, and nothing
//! in the voting flow ever waits on them. A channel that drops signals is
//! acceptable as long as it keeps answering [`PresenceChannel::snapshot`],
//! which is how consumers self-heal.

use async_trait::async_trait;
use tokio::sync::broadcast;

use plenum_domain::{AccountId, ConnectionId, MemberId, PresenceRoster, PresenceSignal, TenantId};

/// Subscription handle for one tenant's presence signals.
///
/// Wraps a `broadcast::Receiver<PresenceSignal>`. Consumers that fall behind
/// observe `RecvError::Lagged` and should resync from a snapshot instead of
/// trying to recover the missed signals.
pub struct PresenceFeed {
    pub receiver: broadcast::Receiver<PresenceSignal>,
}

impl PresenceFeed {
    pub fn new(receiver: broadcast::Receiver<PresenceSignal>) -> Self {
        Self { receiver }
    }

    /// Next signal from the channel.
    pub async fn next(&mut self) -> Result<PresenceSignal, broadcast::error::RecvError> {
        self.receiver.recv().await
    }
}

/// Tenant-scoped presence publish/subscribe.
#[async_trait]
pub trait PresenceChannel: Send + Sync {
    /// Announce a new connection for `account`, returning the channel-assigned
    /// connection id. `member` is the seat the account occupies, if any.
    async fn track(
        &self,
        tenant: TenantId,
        account: AccountId,
        member: Option<MemberId>,
    ) -> ConnectionId;

    /// Drop a single connection. Unknown ids are ignored, so disconnect
    /// handlers may fire more than once.
    async fn untrack(&self, tenant: TenantId, connection: ConnectionId);

    /// Drop every connection of an identity at once (sign-out, transport
    /// teardown).
    async fn untrack_identity(&self, tenant: TenantId, account: &AccountId);

    /// Subscribe to the tenant's signals. Consumers pair this with a
    /// [`PresenceChannel::snapshot`] for their initial state; replaying a
    /// buffered signal on top of the snapshot is harmless because joins and
    /// leaves are idempotent.
    async fn subscribe(&self, tenant: TenantId) -> PresenceFeed;

    /// The channel's current roster for the tenant.
    async fn snapshot(&self, tenant: TenantId) -> PresenceRoster;
}
