use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use achievement_tracker::config::structs::configuration::Configuration;
use achievement_tracker::database::structs::database_connector::DatabaseConnector;
use achievement_tracker::database::structs::memory_storage::MemoryStorage;
use achievement_tracker::database::traits::storage_backend::StorageBackend;
use achievement_tracker::engine::structs::achievement_engine::AchievementEngine;
use achievement_tracker::engine::structs::logging_notifier::LoggingNotifier;
use achievement_tracker::engine::structs::online_sessions::OnlineSessions;
use achievement_tracker::logging::setup_logging;
use achievement_tracker::replay::replay::replay_file;
use achievement_tracker::structs::Cli;
use clap::Parser;
use log::{error, info};
use parking_lot::deadlock;
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("{e}");
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        }));
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let storage: Arc<dyn StorageBackend> = if config.database.persistent || args.create_database {
                match DatabaseConnector::new(config.clone()).await {
                    Ok(connector) => Arc::new(connector),
                    Err(e) => {
                        error!("[BOOT] Unable to connect to the database: {e}");
                        exit(1);
                    }
                }
            } else {
                info!("[BOOT] Persistence disabled, statistics are kept in memory only");
                Arc::new(MemoryStorage::new())
            };

            if args.create_database {
                match storage.create_tables().await {
                    Ok(_) => {
                        info!("[BOOT] Database tables created");
                        exit(0);
                    }
                    Err(e) => {
                        error!("[BOOT] Unable to create the database tables: {e}");
                        exit(1);
                    }
                }
            }

            let engine = match AchievementEngine::new(config.clone(), storage, Arc::new(LoggingNotifier)) {
                Ok(engine) => Arc::new(engine),
                Err(e) => {
                    error!("[BOOT] Unable to start the engine: {e}");
                    exit(1);
                }
            };
            let sessions = Arc::new(OnlineSessions::new());

            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(e) => {
                    error!("[BOOT] Unable to register the shutdown handler: {e}");
                    exit(1);
                }
            };

            let deadlocks_handler = tokio_shutdown.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                        sentry::capture_message(&format!("{:#?}", t.backtrace()), sentry::Level::Error);
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let console_interval = config.log_console_interval;
            if console_interval > 0 {
                let stats_engine = engine.clone();
                let stats_handler = tokio_shutdown.clone();
                tokio::spawn(async move {
                    info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
                    let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                    loop {
                        tokio::select! {
                            _ = interval.tick() => {
                                let stats = stats_engine.get_stats();
                                info!(
                                    "[STATS] Cache: {} entries - Hits: {} - Misses: {} - Flushed: {} - Flush failures: {} | Ledger: {} subjects",
                                    stats.cache_entries, stats.cache_hits, stats.cache_misses, stats.counters_flushed, stats.flush_failures, stats.ledger_subjects
                                );
                                info!(
                                    "[STATS AWARDS] Granted: {} - Duplicates: {} - Pending: {} | Events: {} - Ignored: {} - Storage failures: {}",
                                    stats.awards_granted, stats.awards_duplicate, stats.awards_pending, stats.events_processed, stats.events_ignored, stats.storage_failures
                                );
                                info!(
                                    "[STATS DEFERRED] Scheduled: {} - Skipped: {} - Completed: {} | Reloads: {} - Failed: {}",
                                    stats.deferred_scheduled, stats.deferred_skipped, stats.deferred_completed, stats.threshold_reloads, stats.reload_failures
                                );
                            }
                            _ = stats_handler.handle() => {
                                info!("[BOOT] Shutting down thread for console updates...");
                                return;
                            }
                        }
                    }
                });
            }

            if config.database.persistent {
                let _ = engine.spawn_persistence(tokio_shutdown.clone());
            }

            match &args.replay {
                Some(path) => {
                    if let Err(e) = replay_file(engine.clone(), sessions.clone(), path).await {
                        error!("[REPLAY] {e}");
                    }
                }
                None => {
                    info!("[BOOT] Engine ready, waiting for shutdown signal...");
                    tokio_shutdown.handle().await;
                    info!("[BOOT] Shutdown request received, shutting down...");
                }
            }

            if config.database.persistent {
                match engine.flush().await {
                    Ok(amount) => info!("[BOOT] Flushed {amount} counters before exit"),
                    Err(e) => error!("[BOOT] Final flush failed: {e}"),
                }
            }

            info!("[BOOT] Shutdown complete");
            Ok(())
        })
}
