//! Store infrastructure: the in-memory reference adapter.
//!
//! Provides [`MemoryStore`], a linearizable in-memory implementation of the
//! [`ChamberStore`](plenum_application::ChamberStore) port. It is the
//! executable statement of what a relational adapter must guarantee: every
//! conditional transition runs as one atomic step.

mod memory;

pub use memory::MemoryStore;
