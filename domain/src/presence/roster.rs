//! The eventually-consistent view of who is connected.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::core::{AccountId, ConnectionId, MemberId};
use crate::presence::signal::{ConnectionMeta, PresenceSignal};

/// All live connections for one account. One person with three open tabs is
/// one attendee with three connections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attendee {
    pub connections: BTreeMap<ConnectionId, ConnectionMeta>,
}

impl Attendee {
    /// The seat this account occupies, if any connection reported one.
    pub fn member(&self) -> Option<MemberId> {
        self.connections.values().find_map(|meta| meta.member)
    }
}

/// Tenant-scoped mapping of connected identities to their live connections.
///
/// Advisory only: this backs the "who is present" indicator and the quorum
/// figure. Vote validity and ballot transitions never consult it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresenceRoster {
    attendees: BTreeMap<AccountId, Attendee>,
}

impl PresenceRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one channel signal into the view.
    pub fn apply(&mut self, signal: PresenceSignal) {
        match signal {
            PresenceSignal::Sync { roster } => *self = roster,
            PresenceSignal::Join {
                account,
                connection,
                meta,
            } => self.join(account, connection, meta),
            PresenceSignal::Leave {
                account,
                connection,
            } => self.leave(&account, connection),
        }
    }

    pub fn join(&mut self, account: AccountId, connection: ConnectionId, meta: ConnectionMeta) {
        self.attendees
            .entry(account)
            .or_default()
            .connections
            .insert(connection, meta);
    }

    /// Remove one connection, or the whole identity when `connection` is
    /// `None`. Unknown accounts and connections are silently ignored:
    /// signals can arrive out of order and the next sync reconciles the view.
    pub fn leave(&mut self, account: &AccountId, connection: Option<ConnectionId>) {
        match connection {
            Some(connection) => {
                if let Some(attendee) = self.attendees.get_mut(account) {
                    attendee.connections.remove(&connection);
                    if attendee.connections.is_empty() {
                        self.attendees.remove(account);
                    }
                }
            }
            None => {
                self.attendees.remove(account);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.attendees.is_empty()
    }

    pub fn contains(&self, account: &AccountId) -> bool {
        self.attendees.contains_key(account)
    }

    /// Distinct connected identities, spectators included.
    pub fn identity_count(&self) -> usize {
        self.attendees.len()
    }

    /// Total live connections across all identities.
    pub fn connection_count(&self) -> usize {
        self.attendees.values().map(|a| a.connections.len()).sum()
    }

    pub fn attendees(&self) -> impl Iterator<Item = (&AccountId, &Attendee)> {
        self.attendees.iter()
    }

    /// Distinct seated members currently connected: the quorum figure.
    /// A member on two devices counts once; spectators count zero.
    pub fn present_members(&self) -> Vec<MemberId> {
        let seats: BTreeSet<MemberId> = self
            .attendees
            .values()
            .filter_map(|attendee| attendee.member())
            .collect();
        seats.into_iter().collect()
    }

    pub fn present_member_count(&self) -> usize {
        self.present_members().len()
    }

    /// Which account owns a connection, if it is still live.
    pub fn account_of_connection(&self, connection: ConnectionId) -> Option<&AccountId> {
        self.attendees
            .iter()
            .find(|(_, attendee)| attendee.connections.contains_key(&connection))
            .map(|(account, _)| account)
    }
}
