//! Implementation blocks for configuration types.

/// Loading, saving, defaults and validation of [`Configuration`](crate::config::structs::configuration::Configuration).
pub mod configuration;
