//! Implementation blocks for the cache.

pub mod statistic_cache;
