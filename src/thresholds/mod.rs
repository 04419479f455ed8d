//! Threshold resolution.
//!
//! A [`ThresholdTable`](structs::threshold_table::ThresholdTable) is built once from the
//! `[achievements]` configuration and never mutated afterwards. Reloads build a new
//! table and swap the pointer held by the
//! [`ThresholdRegistry`](structs::threshold_registry::ThresholdRegistry), so readers
//! always see either the old table or the new one.
//!
//! # Resolution
//!
//! For an increment taking a counter from `old` to `new`, every threshold `t` with
//! `old < t <= new` is returned in ascending order. Jumps over several thresholds
//! return all of them.

/// Table and registry structures.
pub mod structs;

/// Implementation blocks for building, resolving and reloading.
pub mod impls;
