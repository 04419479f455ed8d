//! Write-back statistic cache.
//!
//! Counters are addressed by `(SubjectId, StatisticKey)` and kept in 256 shards selected
//! by the first byte of the subject UUID. Each shard maps keys to a slot guarded by its
//! own async mutex, so increments on different counters never contend and increments on
//! the same counter are applied one after another.
//!
//! # Loading
//!
//! The first access to a counter reads the stored value while holding the slot mutex.
//! Later accesses never touch storage.
//!
//! # Write-back
//!
//! Values are written to storage by [`flush`](structs::statistic_cache::StatisticCache::flush)
//! (periodically, from the persistence loop) and by
//! [`evict`](structs::statistic_cache::StatisticCache::evict) when a subject disconnects.
//! A crash between an increment and the next flush loses the unflushed delta only.
//!
//! # Example
//!
//! ```rust,ignore
//! let cache = StatisticCache::new(storage, stats);
//! let change = cache.increment(subject, &key, 4).await?;
//! assert_eq!(change.new, change.old + 4);
//! ```

/// Implementation blocks for the cache.
pub mod impls;

/// Cache data structures.
pub mod structs;

/// Slot and shard type aliases.
pub mod types;
