//! Rendering of sitting minutes.

pub mod console;
pub mod formatter;
pub mod minutes;
