//! Infrastructure layer for plenum
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod journal;
pub mod realtime;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigLoader, FileConfig, FileExportConfig, FileOutputConfig,
    FilePolicyConfig, FilePresenceConfig, Severity,
};
pub use journal::JsonlSittingJournal;
pub use realtime::BroadcastPresenceChannel;
pub use store::MemoryStore;
