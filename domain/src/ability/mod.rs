//! Who may do what.
//!
//! - [`Actor`]: the caller as resolved by the authentication collaborator
//! - [`capable`] / [`require`]: the single capability decision point

pub mod gate;
pub mod role;

pub use gate::{capable, require};
pub use role::{Action, Actor, Role, Subject};
