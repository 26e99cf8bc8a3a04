//! Periodic Sweep Demo
//!
//! Shows the wiring an owning process is responsible for: building the store
//! once, sharing it across tasks, and deciding the sweep cadence.
//!
//! Run with `RUST_LOG=expiry_cache=debug` to see sweep activity.

use std::sync::Arc;
use std::time::Duration;

use expiry_cache::{spawn_sweeper, Config, ExpiringStore};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "expiry_cache=info,periodic_sweep=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: initial_capacity={}, sweep_interval={:?}",
        config.initial_capacity, config.sweep_interval
    );

    let store = Arc::new(ExpiringStore::from_config(&config));
    let sweeper = spawn_sweeper(Arc::clone(&store), config.sweep_interval);

    for i in 0..100u64 {
        // Half the sessions are short-lived and never read again.
        let lifespan = if i % 2 == 0 {
            Duration::from_millis(500)
        } else {
            Duration::from_secs(60)
        };
        store.store(format!("session:{}", i), i, lifespan);
    }
    info!("Stored {} sessions", store.count());

    tokio::time::sleep(config.sweep_interval + Duration::from_millis(600)).await;

    let stats = store.stats();
    info!(
        "After sweeping: entries={}, swept={}, hit_rate={:.2}",
        stats.total_entries,
        stats.swept,
        stats.hit_rate()
    );
    info!("Stats: {}", serde_json::to_string(&stats)?);

    sweeper.abort();
    Ok(())
}
