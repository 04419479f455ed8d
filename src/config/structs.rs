//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Engine settings (deferred check delay).
pub mod engine_config;

/// Database connection configuration.
pub mod database_config;

/// Database schema customization settings.
pub mod database_structure_config;

/// Statistics table/column name customization.
pub mod database_structure_config_statistics;

/// Achievements table/column name customization.
pub mod database_structure_config_achievements;

/// Connections table/column name customization.
pub mod database_structure_config_connections;

/// Threshold definitions per category.
pub mod achievements_config;

/// A single achievement definition (name, messages, reward).
pub mod achievement_config;

/// Reward handed to the reward collaborator.
pub mod reward_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
