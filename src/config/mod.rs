//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the configuration from a
//! TOML file.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains sections for:
//! - **engine**: Deferred check timing
//! - **database**: Storage driver, DSN and write-back interval
//! - **database_structure**: Table and column names for counters, awards and connections
//! - **achievements**: Disabled categories and the threshold definitions per category
//! - **sentry_config**: Error reporting configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use achievement_tracker::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_file("config.toml")?;
//! config.validate()?;
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

#[cfg(test)]
mod tests;
