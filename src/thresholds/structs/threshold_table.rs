use crate::config::structs::achievement_config::AchievementConfig;
use crate::statistics::enums::category::Category;
use crate::statistics::enums::multiple_category::MultipleCategory;
use crate::statistics::structs::award_id::AwardId;
use crate::statistics::structs::statistic_key::StatisticKey;
use crate::thresholds::structs::threshold::Threshold;
use ahash::{AHashMap, AHashSet};
use std::sync::Arc;

/// Thresholds per statistic key, sorted ascending and unique.
///
/// Multiple categories additionally keep the list of configured sub-key groups, so an
/// event naming `stone` can be routed to the `stone|granite` counter.
#[derive(Debug, Default)]
pub struct ThresholdTable {
    pub(crate) groups: AHashMap<StatisticKey, Vec<Threshold>>,
    pub(crate) sub_keys: AHashMap<MultipleCategory, Vec<String>>,
    pub(crate) disabled: AHashSet<Category>,
    pub(crate) definitions: AHashMap<AwardId, Arc<AchievementConfig>>,
}
