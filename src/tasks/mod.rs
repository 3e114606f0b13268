//! Background Tasks Module
//!
//! Tasks owned by the server binary, never by the read-through core.
//!
//! # Tasks
//! - TTL Cleanup: reclaims expired in-memory cache entries at a fixed interval

mod cleanup;

pub use cleanup::spawn_cleanup_task;
