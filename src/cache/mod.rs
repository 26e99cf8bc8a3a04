//! Cache Module
//!
//! Provides the concurrent in-memory store with per-entry TTL expiration.

use std::time::Duration;

mod entry;
mod stats;
mod store;
mod value;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::ExpiringStore;
pub use value::{Value, WrongType};

// == Public Constants ==
/// Longest lifespan an entry can be given; longer lifespans are capped (~100 years)
pub const MAX_LIFESPAN: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);
