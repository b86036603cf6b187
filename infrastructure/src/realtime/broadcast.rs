//! Tokio broadcast presence channel.
//!
//! Each tenant gets its own connection group: a `broadcast::Sender` for the
//! signal fan-out plus the authoritative roster the channel maintains as
//! connections come and go. There is no process-wide singleton; callers hold
//! the channel behind an `Arc` and inject it where presence is needed.
//!
//! Delivery is best-effort. A subscriber that falls behind the broadcast
//! buffer loses signals and recovers from [`PresenceChannel::snapshot`] or
//! the periodic sync republication started by
//! [`BroadcastPresenceChannel::start_sync_task`].

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{Mutex, broadcast};
use tokio::task::JoinHandle;
use tracing::debug;

use plenum_application::ports::presence_channel::{PresenceChannel, PresenceFeed};
use plenum_domain::{
    AccountId, ConnectionId, ConnectionMeta, MemberId, PresenceRoster, PresenceSignal, TenantId,
    now_millis,
};

const DEFAULT_CAPACITY: usize = 256;

/// One tenant's broadcast sender plus the roster it has folded so far.
struct TenantGroup {
    sender: broadcast::Sender<PresenceSignal>,
    roster: PresenceRoster,
}

impl TenantGroup {
    fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            roster: PresenceRoster::new(),
        }
    }

    fn publish(&self, signal: PresenceSignal) {
        // A send error just means nobody is subscribed right now; the roster
        // already advanced and later subscribers start from a snapshot.
        let _ = self.sender.send(signal);
    }
}

/// In-process [`PresenceChannel`] adapter over tokio broadcast channels.
pub struct BroadcastPresenceChannel {
    capacity: usize,
    groups: Mutex<HashMap<u64, TenantGroup>>,
    next_connection: AtomicU64,
}

impl BroadcastPresenceChannel {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// `capacity` is the per-tenant broadcast buffer; subscribers further
    /// behind than this observe a lag and must resync.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            groups: Mutex::new(HashMap::new()),
            next_connection: AtomicU64::new(1),
        }
    }

    /// Spawn the periodic roster republication task.
    ///
    /// Every `interval` the current roster of every tenant goes out as a
    /// `Sync`, which is the self-heal path for subscribers that missed
    /// individual joins or leaves. The task runs until the handle is aborted.
    pub fn start_sync_task(self: &Arc<Self>, interval: Duration) -> JoinHandle<()> {
        let channel = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                channel.publish_syncs().await;
            }
        })
    }

    async fn publish_syncs(&self) {
        let groups = self.groups.lock().await;
        for group in groups.values() {
            group.publish(PresenceSignal::Sync {
                roster: group.roster.clone(),
            });
        }
    }
}

impl Default for BroadcastPresenceChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PresenceChannel for BroadcastPresenceChannel {
    async fn track(
        &self,
        tenant: TenantId,
        account: AccountId,
        member: Option<MemberId>,
    ) -> ConnectionId {
        let connection = ConnectionId::new(self.next_connection.fetch_add(1, Ordering::Relaxed));
        let meta = ConnectionMeta::new(member, now_millis());

        let mut groups = self.groups.lock().await;
        let group = groups
            .entry(tenant.get())
            .or_insert_with(|| TenantGroup::new(self.capacity));
        group.roster.join(account.clone(), connection, meta.clone());
        debug!(
            "Presence join on tenant {}: {} as connection {}",
            tenant, account, connection
        );
        group.publish(PresenceSignal::Join {
            account,
            connection,
            meta,
        });
        connection
    }

    async fn untrack(&self, tenant: TenantId, connection: ConnectionId) {
        let mut groups = self.groups.lock().await;
        let Some(group) = groups.get_mut(&tenant.get()) else {
            return;
        };
        // Unknown connections are ignored so double disconnects stay silent.
        let Some(account) = group.roster.account_of_connection(connection).cloned() else {
            return;
        };
        group.roster.leave(&account, Some(connection));
        debug!(
            "Presence leave on tenant {}: connection {} of {}",
            tenant, connection, account
        );
        group.publish(PresenceSignal::Leave {
            account,
            connection: Some(connection),
        });
    }

    async fn untrack_identity(&self, tenant: TenantId, account: &AccountId) {
        let mut groups = self.groups.lock().await;
        let Some(group) = groups.get_mut(&tenant.get()) else {
            return;
        };
        if !group.roster.contains(account) {
            return;
        }
        group.roster.leave(account, None);
        debug!("Presence sign-out on tenant {}: {}", tenant, account);
        group.publish(PresenceSignal::Leave {
            account: account.clone(),
            connection: None,
        });
    }

    async fn subscribe(&self, tenant: TenantId) -> PresenceFeed {
        let mut groups = self.groups.lock().await;
        let group = groups
            .entry(tenant.get())
            .or_insert_with(|| TenantGroup::new(self.capacity));
        PresenceFeed::new(group.sender.subscribe())
    }

    async fn snapshot(&self, tenant: TenantId) -> PresenceRoster {
        let groups = self.groups.lock().await;
        groups
            .get(&tenant.get())
            .map(|group| group.roster.clone())
            .unwrap_or_default()
    }
}
