//! Toggle Refresh Task
//!
//! Keeps the process-wide toggle snapshot current.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

use crate::flags::UnleashFlags;

/// Spawns a background task that re-polls the toggle service.
///
/// Failed polls are logged and disable every flag until the next success. The returned
/// handle is aborted at shutdown.
pub fn spawn_flag_refresh_task(flags: Arc<UnleashFlags>, refresh_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(refresh_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting toggle refresh task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;
            flags.refresh_or_warn().await;
        }
    })
}
