//! Realtime infrastructure: presence pub/sub over tokio broadcast.
//!
//! Provides [`BroadcastPresenceChannel`], an in-process implementation of the
//! [`PresenceChannel`](plenum_application::PresenceChannel) port with one
//! broadcast channel and one authoritative roster per tenant.

mod broadcast;

pub use broadcast::BroadcastPresenceChannel;
