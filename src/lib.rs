//! Expiry Cache - A concurrent in-memory key-value store with per-entry TTL
//!
//! Entries are never returned once expired. They are removed lazily when a
//! load discovers them, or in bulk by [`ExpiringStore::sweep`], which the
//! owning process calls directly or through [`spawn_sweeper`].

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{CacheStats, ExpiringStore, Value};
pub use config::Config;
pub use error::ConfigError;
pub use tasks::spawn_sweeper;
