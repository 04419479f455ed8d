//! Statistic data model shared by the cache, the ledger and the engine.
//!
//! # Keys
//!
//! Every counter is addressed by a [`SubjectId`](structs::subject_id::SubjectId) and a
//! [`StatisticKey`](structs::statistic_key::StatisticKey). A key is made of a
//! [`Category`](enums::category::Category) and, for multiple categories, a sub-key
//! naming the configured group (for example `Places.stone|granite`).
//!
//! # Awards
//!
//! An [`AwardId`](structs::award_id::AwardId) is the configured achievement name and is
//! unique across a configuration.

/// Category enumerations (normal, multiple, combined).
pub mod enums;

/// Identifier and key structures.
pub mod structs;

/// Implementation blocks for the data model types.
pub mod impls;

#[cfg(test)]
mod tests;
