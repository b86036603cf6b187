//! Journal infrastructure: structured sitting records.
//!
//! Provides [`JsonlSittingJournal`], a JSONL file writer that implements the
//! [`SittingJournal`](plenum_application::SittingJournal) port.

mod jsonl;

pub use jsonl::JsonlSittingJournal;
