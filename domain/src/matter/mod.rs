//! Matters put before the chamber.

pub mod entities;

pub use entities::{Matter, MatterStatus};
