//! Presence tracker: folds channel signals into a live roster.

use std::sync::Arc;

use tokio::sync::{broadcast::error::RecvError, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::ports::presence_channel::PresenceChannel;
use plenum_domain::{PresenceRoster, TenantId};

/// Tenant-scoped live view of who is connected.
///
/// Subscribes to the presence channel, folds sync/join/leave signals into a
/// [`PresenceRoster`], and republishes every change on a `watch` channel so
/// any number of consumers can observe the current roster without touching
/// the feed. The tracker is advisory by construction: it exposes reads only,
/// and nothing in the voting flow waits on it.
///
/// The view is eventually consistent. A tracker that falls behind the
/// channel does not try to replay what it missed; it reloads a snapshot and
/// moves on.
pub struct PresenceTracker {
    roster_rx: watch::Receiver<PresenceRoster>,
    task: JoinHandle<()>,
}

impl PresenceTracker {
    /// Subscribe to `tenant`'s presence and start folding signals.
    ///
    /// The roster starts from a channel snapshot, so a tracker joining late
    /// sees already-connected peers immediately. Signals that raced the
    /// snapshot get re-applied on top of it, which is harmless because joins
    /// and leaves are idempotent.
    pub fn start<C: PresenceChannel + 'static>(channel: Arc<C>, tenant: TenantId) -> Self {
        let (roster_tx, roster_rx) = watch::channel(PresenceRoster::new());

        let task = tokio::spawn(async move {
            let mut feed = channel.subscribe(tenant).await;
            let mut roster = channel.snapshot(tenant).await;
            let _ = roster_tx.send(roster.clone());

            loop {
                match feed.next().await {
                    Ok(signal) => {
                        roster.apply(signal);
                        if roster_tx.send(roster.clone()).is_err() {
                            break;
                        }
                    }
                    Err(RecvError::Lagged(missed)) => {
                        warn!(
                            "Presence feed for tenant {} lagged ({} signals missed), resyncing from snapshot",
                            tenant, missed
                        );
                        roster = channel.snapshot(tenant).await;
                        if roster_tx.send(roster.clone()).is_err() {
                            break;
                        }
                    }
                    Err(RecvError::Closed) => {
                        debug!("Presence channel for tenant {} closed", tenant);
                        break;
                    }
                }
            }
        });

        Self { roster_rx, task }
    }

    /// The current roster.
    pub fn roster(&self) -> PresenceRoster {
        self.roster_rx.borrow().clone()
    }

    /// Distinct seated members currently connected: the quorum figure.
    pub fn present_member_count(&self) -> usize {
        self.roster_rx.borrow().present_member_count()
    }

    /// A watch handle for consumers that want change notifications.
    pub fn watch(&self) -> watch::Receiver<PresenceRoster> {
        self.roster_rx.clone()
    }
}

impl Drop for PresenceTracker {
    fn drop(&mut self) {
        self.task.abort();
    }
}
