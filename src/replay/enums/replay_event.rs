use crate::statistics::enums::category::Category;
use crate::statistics::structs::subject_id::SubjectId;
use serde::{Deserialize, Serialize};

fn default_delta() -> u64 {
    1
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ReplayEvent {
    Statistic {
        subject: SubjectId,
        category: Category,
        /// Sub-key names for multiple categories, e.g. `["stone:1", "stone"]`.
        #[serde(default)]
        names: Vec<String>,
        #[serde(default = "default_delta")]
        delta: u64,
    },
    Join {
        subject: SubjectId,
    },
    WorldChanged {
        subject: SubjectId,
    },
    GameModeChanged {
        subject: SubjectId,
    },
    Disconnect {
        subject: SubjectId,
    },
    /// Reloads the `[achievements]` section of a configuration file.
    Reload {
        path: String,
    },
    Wait {
        millis: u64,
    },
}
