//! Integration Tests for the Expiring Store
//!
//! Exercises the public API from several threads at once.

use expiry_cache::{spawn_sweeper, Config, ExpiringStore, Value};
use std::sync::Arc;
use std::thread::{self, sleep};
use std::time::Duration;

const LONG: Duration = Duration::from_secs(300);

// == Lazy Expiration and Sweep ==

#[test]
fn test_expired_entries_linger_until_loaded_or_swept() {
    let store = ExpiringStore::new();
    for i in 0..1000 {
        store.store(format!("key {}", i), format!("value {}", i), Duration::ZERO);
    }

    // Expired entries still count until something removes them.
    assert_eq!(store.count(), 1000);

    assert_eq!(store.load("key 1"), None);
    assert_eq!(store.count(), 999);

    assert_eq!(store.sweep(), 999);
    assert_eq!(store.count(), 0);
}

#[test]
fn test_sweep_with_mixed_lifespans() {
    let store = ExpiringStore::new();
    for i in 0..100u32 {
        let lifespan = if i % 3 == 0 { Duration::ZERO } else { LONG };
        store.store(format!("key{}", i), i, lifespan);
    }

    let removed = store.sweep();

    assert_eq!(removed, 34);
    assert_eq!(store.count(), 66);
    for i in (0..100u32).filter(|i| i % 3 != 0) {
        assert_eq!(store.load(&format!("key{}", i)), Some(i));
    }
}

#[test]
fn test_load_typed_on_dynamic_values() {
    let store = ExpiringStore::new();
    store.store("key", Value::from("Johnny Cache"), Duration::from_secs(60));
    store.store("flag", Value::from(true), Duration::from_secs(60));

    assert_eq!(store.load_as_string("key").as_deref(), Some("Johnny Cache"));
    assert_eq!(store.load_typed::<bool>("flag"), Some(true));
    assert_eq!(store.load_as_string("flag"), None);
}

// == Concurrency ==

#[test]
fn test_concurrent_disjoint_keys_expire() {
    let store = Arc::new(ExpiringStore::new());

    let handles: Vec<_> = (0..50u64)
        .map(|x| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let key = format!("key{}", x);
                let scratch = format!("scratch{}", x);
                let lifespan = Duration::from_millis(200 + x * 5);

                sleep(Duration::from_millis(x));
                store.store(key.clone(), x, lifespan);
                store.store(scratch.clone(), x, LONG);
                store.sweep();

                assert_eq!(store.load(&key), Some(x), "expected {} to be live", key);
                assert!(store.delete(&scratch));
                assert_eq!(store.load(&scratch), None);

                sleep(lifespan + Duration::from_millis(50));
                store.sweep();
                assert_eq!(store.load(&key), None, "{} should be expired by now", key);
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker thread panicked");
    }

    assert_eq!(store.count(), 0);
}

#[test]
fn test_refreshed_key_survives_concurrent_eviction() {
    let store = Arc::new(ExpiringStore::new());

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for i in 0..2000u32 {
                store.store("hot", i, Duration::ZERO);
                store.store("hot", i, LONG);
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..2000 {
                    store.load("hot");
                    store.sweep();
                }
            })
        })
        .collect();

    writer.join().expect("writer panicked");
    for reader in readers {
        reader.join().expect("reader panicked");
    }

    // The writer's last store is live; no stale eviction may have removed it.
    assert_eq!(store.load("hot"), Some(1999));
}

// == Sweeper Task ==

#[tokio::test]
async fn test_sweeper_driven_by_config() {
    let config = Config {
        initial_capacity: 16,
        sweep_interval: Duration::from_millis(50),
    };
    let store = Arc::new(ExpiringStore::from_config(&config));
    store.store("short", "a", Duration::from_millis(20));
    store.store("long", "b", LONG);

    let sweeper = spawn_sweeper(Arc::clone(&store), config.sweep_interval);
    tokio::time::sleep(Duration::from_millis(200)).await;
    sweeper.abort();

    assert_eq!(store.count(), 1);
    assert_eq!(store.load("long"), Some("b"));
    assert_eq!(store.stats().swept, 1);
}
