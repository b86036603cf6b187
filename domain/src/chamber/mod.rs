//! The chamber and its seated members.

pub mod entities;

pub use entities::{Member, Tenant};
