//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with an absolute expiration instant.

use std::time::{Duration, Instant};

use crate::cache::MAX_LIFESPAN;

// == Cache Entry ==
/// Represents a single cache entry with value and expiration.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Monotonic instant after which the entry is no longer live
    pub expires_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry that expires `lifespan` from now.
    ///
    /// A zero lifespan produces an entry that is already expired.
    /// Lifespans longer than [`MAX_LIFESPAN`] are capped.
    pub fn new(value: V, lifespan: Duration) -> Self {
        Self::until(value, expiration_from_now(lifespan))
    }

    /// Creates a new cache entry expiring at an absolute instant.
    pub fn until(value: V, expires_at: Instant) -> Self {
        Self { value, expires_at }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Checks if the entry is expired as of `now`.
    ///
    /// Boundary condition: an entry is live only while its expiration is
    /// strictly after `now`. At the exact expiration instant it is expired.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.expires_at <= now
    }

    // == Time To Live ==
    /// Returns the remaining lifespan, or `Duration::ZERO` once expired.
    pub fn ttl_remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}

// == Utility Functions ==
/// Returns the instant `lifespan` from now, capped at [`MAX_LIFESPAN`].
fn expiration_from_now(lifespan: Duration) -> Instant {
    Instant::now() + lifespan.min(MAX_LIFESPAN)
}
