//! Identifier and key structures.

/// Stable subject (player) identifier.
pub mod subject_id;

/// Composite statistic key (category + optional sub-key).
pub mod statistic_key;

/// Award identifier (configured achievement name).
pub mod award_id;
