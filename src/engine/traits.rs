//! Engine collaborator traits.

pub mod award_notifier;
pub mod session_provider;
