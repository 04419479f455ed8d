use crate::config::structs::achievement_config::AchievementConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Threshold definitions as written in the configuration file.
///
/// Category names and threshold keys are kept as strings here and parsed when the
/// threshold table is built, so an unknown category or a non-numeric threshold fails
/// the load (or the reload) instead of surfacing at lookup time.
///
/// ```toml
/// [achievements.normal.Connections.1]
/// name = "First Login"
/// message = "Welcome!"
///
/// [achievements.multiple.Places."stone|granite".10]
/// name = "Mason"
/// message = "Placed 10 stone blocks"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct AchievementsConfig {
    #[serde(default)]
    pub disabled_categories: Vec<String>,
    /// Category -> threshold -> definition.
    #[serde(default)]
    pub normal: BTreeMap<String, BTreeMap<String, AchievementConfig>>,
    /// Category -> sub-key group -> threshold -> definition.
    #[serde(default)]
    pub multiple: BTreeMap<String, BTreeMap<String, BTreeMap<String, AchievementConfig>>>,
}
