//! Implementation blocks for thresholds.

pub mod threshold_registry;
pub mod threshold_table;
