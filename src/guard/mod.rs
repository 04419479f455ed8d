//! Once-per-session guard for deferred checks.
//!
//! A subject moves from idle to completed when a deferred check claims it with
//! [`try_begin_once`](structs::deferred_task_guard::DeferredTaskGuard::try_begin_once),
//! and back to idle on disconnect ([`clear`](structs::deferred_task_guard::DeferredTaskGuard::clear))
//! or when the claimed check fails ([`abandon`](structs::deferred_task_guard::DeferredTaskGuard::abandon)).
//! Scheduling alone never blocks another trigger.

pub mod impls;
pub mod structs;
