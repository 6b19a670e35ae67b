//! CFP Review - conference call-for-proposals backend
//!
//! Proposal intake with submission-window gating, peer-review voting and
//! feedback with cache-aside vote tallies.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
