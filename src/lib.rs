//! # Achievement Tracker
//!
//! A per-player statistic cache and one-time threshold award engine.
//!
//! ## Overview
//!
//! Hosts report statistic increases (blocks placed, connections, kills, ...) for a subject.
//! The engine keeps the current value of every counter in a sharded write-back cache,
//! resolves which configured thresholds the increase crossed and grants each award at
//! most once, persisting it before the host is notified.
//!
//! ## Features
//!
//! - **Sharded Cache**: 256 shards with per-counter locks, flushed periodically and on disconnect
//! - **Threshold Table**: validated, sorted thresholds with atomic hot reload
//! - **Award Ledger**: exactly-once grants under concurrent increments
//! - **Deferred Connections**: one counted connection per subject per day, after a delay
//! - **Database Agnostic**: SQLite, MySQL and PostgreSQL with customizable schemas
//! - **Monitoring**: console statistics, deadlock detection and Sentry integration
//!
//! ## Modules
//!
//! - [`statistics`]: subject, category, statistic key and award identifiers
//! - [`thresholds`]: threshold table and its reloadable registry
//! - [`cache`]: the statistic cache
//! - [`ledger`]: the award ledger
//! - [`guard`]: once-per-session guard for deferred tasks
//! - [`engine`]: the achievement engine and its host-facing traits
//! - [`database`]: storage backends
//! - [`replay`]: JSON lines event replay
//! - [`config`]: configuration loading and validation
//! - [`stats`]: runtime counters

/// Statistic cache with write-back persistence.
pub mod cache;

/// Shared helpers and error types.
pub mod common;

/// Configuration structures and loading.
pub mod config;

/// Storage backends (SQLite, MySQL, PostgreSQL, memory).
pub mod database;

/// The achievement engine.
pub mod engine;

/// Deferred task guard.
pub mod guard;

/// Award ledger.
pub mod ledger;

/// Logger setup.
pub mod logging;

/// Event replay from JSON lines files.
pub mod replay;

/// Statistic and award identifiers.
pub mod statistics;

/// Runtime statistics.
pub mod stats;

/// Command line arguments.
pub mod structs;

/// Threshold table and registry.
pub mod thresholds;

/// Sentry tracing helpers.
pub mod utils;
