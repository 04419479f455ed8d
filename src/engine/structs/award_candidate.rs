use crate::statistics::structs::statistic_key::StatisticKey;
use crate::thresholds::structs::threshold::Threshold;

#[derive(Debug, Clone)]
pub struct AwardCandidate {
    pub key: StatisticKey,
    pub threshold: Threshold,
}
