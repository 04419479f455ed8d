//! Granted achievements per subject.
//!
//! The ledger is the only gate in front of award notifications. A grant is recorded in
//! storage before [`try_grant`](structs::award_ledger::AwardLedger::try_grant) returns
//! `true`, and the check and the write happen under the subject's mutex, so two
//! concurrent resolutions of the same threshold grant it once.
//!
//! The in-memory set mirrors storage and is loaded on first use of a subject.

pub mod impls;
pub mod structs;
