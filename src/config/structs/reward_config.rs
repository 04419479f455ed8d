use serde::{Deserialize, Serialize};

/// Opaque reward description, applied by the reward collaborator.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RewardConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub money: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub increase_max_health: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub increase_max_oxygen: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_message: Option<String>,
}
