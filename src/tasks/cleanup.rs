//! Counter Cache Cleanup Task
//!
//! Background task that periodically removes expired counter entries.
//! Expiry is a safety net on top of the explicit refresh-on-write path,
//! so a relaxed interval is fine.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::InMemoryCounterCache;

/// Spawns a background task that periodically purges expired counters.
///
/// # Arguments
/// * `counters` - Shared counter cache backend
/// * `cleanup_interval_secs` - Interval in seconds between cleanup runs
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_cleanup_task(
    counters: Arc<InMemoryCounterCache>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting counter cleanup task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = counters.purge_expired();

            if removed > 0 {
                info!("Counter cleanup: removed {} expired counters", removed);
            } else {
                debug!("Counter cleanup: no expired counters found");
            }
        }
    })
}
