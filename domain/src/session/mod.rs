//! Plenary session lifecycle.
//!
//! - [`entities::Session`]: a scheduled meeting moving `scheduled -> open -> closed`
//! - [`entities::AgendaItem`]: an ordered matter reference owned by one session

pub mod entities;

pub use entities::{AgendaItem, Session, SessionStatus};
