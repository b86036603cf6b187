//! Live presence consumption.

pub mod tracker;

pub use tracker::PresenceTracker;
