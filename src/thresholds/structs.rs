//! Threshold data structures.

/// One configured threshold and the award it unlocks.
pub mod threshold;

/// Immutable lookup table built from configuration.
pub mod threshold_table;

/// Atomically swappable holder of the current table.
pub mod threshold_registry;
