use crate::config::structs::achievement_config::AchievementConfig;
use crate::statistics::structs::award_id::AwardId;
use crate::statistics::structs::statistic_key::StatisticKey;
use crate::statistics::structs::subject_id::SubjectId;
use std::sync::Arc;

/// Everything the reward side needs to congratulate the subject and apply rewards.
#[derive(Debug, Clone)]
pub struct AwardNotification {
    pub subject: SubjectId,
    pub key: StatisticKey,
    pub threshold: u64,
    pub award: AwardId,
    pub definition: Arc<AchievementConfig>,
}
