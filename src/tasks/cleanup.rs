//! Periodic Sweep Task
//!
//! Background task an owning process can spawn to reclaim expired entries
//! that are never read again.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::ExpiringStore;

/// Spawns a background task that sweeps the store at a fixed interval.
///
/// The task runs in an infinite loop, sleeping for `interval` between
/// sweeps. Must be called from within a tokio runtime.
///
/// # Returns
/// A JoinHandle for the spawned task; abort it to stop sweeping.
///
/// # Example
/// ```ignore
/// let store = Arc::new(ExpiringStore::<String>::new());
/// let sweeper = spawn_sweeper(store.clone(), Duration::from_secs(1));
/// // Later, during shutdown:
/// sweeper.abort();
/// ```
pub fn spawn_sweeper<V>(store: Arc<ExpiringStore<V>>, interval: Duration) -> JoinHandle<()>
where
    V: Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(?interval, "Starting sweeper task");

        loop {
            tokio::time::sleep(interval).await;

            let removed = store.sweep();

            if removed > 0 {
                info!("Sweep: removed {} expired entries", removed);
            } else {
                debug!("Sweep: no expired entries found");
            }
        }
    })
}
