//! Background Tasks Module
//!
//! Long-running maintenance tasks spawned alongside the HTTP server.

mod cleanup;

pub use cleanup::spawn_cleanup_task;
