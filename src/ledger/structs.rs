//! Ledger data structures.

/// Sharded per-subject ledger.
pub mod award_ledger;

/// Granted set of one subject.
pub mod ledger_entry;
