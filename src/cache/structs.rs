//! Cache data structures.

/// Old and new value observed by one increment.
pub mod counter_change;

/// Cached state of one counter.
pub mod counter_entry;

/// The sharded cache itself.
pub mod statistic_cache;
