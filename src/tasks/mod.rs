//! Background Tasks Module
//!
//! Optional tasks an owning process can run alongside a store. The store
//! itself never spawns them.
//!
//! # Tasks
//! - Sweeper: removes expired entries at a fixed interval

mod cleanup;

pub use cleanup::spawn_sweeper;
