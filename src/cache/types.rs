//! Type aliases used by the cache.

pub mod counter_slot;
