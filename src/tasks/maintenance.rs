//! Maintenance Task
//!
//! Background task that expires cached avatars.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::AvatarCache;

/// Spawns a task that periodically runs one maintenance pass.
///
/// Abort the returned handle on shutdown.
pub fn spawn_maintenance_task(
    cache: Arc<RwLock<AvatarCache>>,
    interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting maintenance task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;
            run_maintenance(&cache).await;
        }
    })
}

/// One pass: drop expired avatars. Returns how many were removed.
pub async fn run_maintenance(cache: &RwLock<AvatarCache>) -> usize {
    let expired = cache.write().await.cleanup_expired();

    if expired > 0 {
        info!(expired, "Maintenance pass removed expired avatars");
    } else {
        debug!("Maintenance pass: nothing to remove");
    }

    expired
}
