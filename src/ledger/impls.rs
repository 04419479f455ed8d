//! Implementation blocks for the ledger.

pub mod award_ledger;
