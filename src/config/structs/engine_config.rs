use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EngineConfig {
    /// Delay in milliseconds between a connection trigger and the deferred check.
    pub connection_check_delay: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            connection_check_delay: 5000,
        }
    }
}
