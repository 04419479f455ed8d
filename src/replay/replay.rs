use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;
use crate::engine::structs::achievement_engine::AchievementEngine;
use crate::engine::structs::online_sessions::OnlineSessions;
use crate::replay::enums::replay_event::ReplayEvent;
use crate::statistics::enums::category::Category;
use crate::statistics::structs::statistic_key::StatisticKey;
use futures_util::future::join_all;
use log::{error, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;

const LOG_PREFIX: &str = "[REPLAY]";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    pub events: usize,
    pub skipped: usize,
    pub awards: usize,
}

pub async fn replay_file(engine: Arc<AchievementEngine>, sessions: Arc<OnlineSessions>, path: &str) -> Result<ReplaySummary, CustomError>
{
    let file = tokio::fs::File::open(path)
        .await
        .map_err(|e| CustomError::new(&format!("unable to open {path}: {e}")))?;
    info!("{} Replaying events from {}", LOG_PREFIX, path);
    replay_events(engine, sessions, BufReader::new(file)).await
}

/// Applies every event of `reader` in order, then waits for the deferred checks it
/// scheduled.
pub async fn replay_events<R: AsyncBufRead + Unpin>(engine: Arc<AchievementEngine>, sessions: Arc<OnlineSessions>, reader: R) -> Result<ReplaySummary, CustomError>
{
    let mut summary = ReplaySummary::default();
    let mut deferred: Vec<JoinHandle<()>> = Vec::new();
    let mut lines = reader.lines();
    let mut number = 0usize;

    while let Some(line) = lines.next_line().await? {
        number += 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match serde_json::from_str::<ReplayEvent>(line) {
            Ok(event) => {
                summary.events += 1;
                summary.awards += apply_event(&engine, &sessions, event, &mut deferred).await;
            }
            Err(e) => {
                summary.skipped += 1;
                warn!("{} Line {}: {}", LOG_PREFIX, number, e);
            }
        }
    }

    for result in join_all(deferred).await {
        if let Err(e) = result {
            error!("{} Deferred check panicked: {}", LOG_PREFIX, e);
        }
    }
    info!("{} {} events applied, {} skipped, {} awards granted inline", LOG_PREFIX, summary.events, summary.skipped, summary.awards);
    Ok(summary)
}

async fn apply_event(engine: &Arc<AchievementEngine>, sessions: &Arc<OnlineSessions>, event: ReplayEvent, deferred: &mut Vec<JoinHandle<()>>) -> usize
{
    match event {
        ReplayEvent::Statistic { subject, category, names, delta } => match category {
            Category::Normal(category) => engine.record_event(subject, &StatisticKey::normal(category), delta).await.len(),
            Category::Multiple(category) => {
                let names: Vec<&str> = names.iter().map(String::as_str).collect();
                engine.record_named_event(subject, category, &names, delta).await.len()
            }
        },
        ReplayEvent::Join { subject } => {
            sessions.join(subject);
            deferred.extend(engine.on_join(subject, sessions.clone()));
            0
        }
        ReplayEvent::WorldChanged { subject } => {
            deferred.extend(engine.on_world_changed(subject, sessions.clone()));
            0
        }
        ReplayEvent::GameModeChanged { subject } => {
            deferred.extend(engine.on_game_mode_changed(subject, sessions.clone()));
            0
        }
        ReplayEvent::Disconnect { subject } => {
            sessions.leave(subject);
            if let Err(e) = engine.on_disconnect(subject).await {
                error!("{} Disconnect of {} failed: {}", LOG_PREFIX, subject, e);
            }
            0
        }
        ReplayEvent::Reload { path } => {
            match Configuration::load_file(&path) {
                Ok(config) => {
                    if let Err(e) = engine.reload(&config.achievements) {
                        error!("{} Reload from {} rejected: {}", LOG_PREFIX, path, e);
                    }
                }
                Err(e) => error!("{} Unable to read {}: {}", LOG_PREFIX, path, e),
            }
            0
        }
        ReplayEvent::Wait { millis } => {
            tokio::time::sleep(Duration::from_millis(millis)).await;
            0
        }
    }
}
