//! Real-time statistics of the engine.
//!
//! Atomic counters shared by the cache, the ledger and the engine, so every
//! subsystem can record activity without locking.
//!
//! # Statistics Categories
//!
//! - Cache: entries, hits, misses, flushed counters, flush failures
//! - Awards: granted, duplicate grants skipped, pending retries
//! - Events: processed, ignored, storage failures
//! - Deferred checks: scheduled, skipped, completed
//! - Thresholds: reloads and failed reloads
//!
//! # Example
//!
//! ```rust,ignore
//! use achievement_tracker::stats::enums::stats_event::StatsEvent;
//!
//! stats.update_stats(StatsEvent::AwardsGranted, 1);
//! let snapshot = stats.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters and snapshot).
pub mod structs;
