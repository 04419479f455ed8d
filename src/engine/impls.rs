//! Implementation blocks for the engine.

pub mod achievement_engine;
pub mod achievement_engine_connections;
pub mod achievement_engine_persistence;
pub mod achievement_engine_sessions;
pub mod channel_notifier;
pub mod logging_notifier;
pub mod online_sessions;
