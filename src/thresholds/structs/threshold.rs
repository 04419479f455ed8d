use crate::config::structs::achievement_config::AchievementConfig;
use crate::statistics::structs::award_id::AwardId;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Threshold {
    pub value: u64,
    pub award: AwardId,
    pub definition: Arc<AchievementConfig>,
}
