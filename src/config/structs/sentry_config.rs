use serde::{Deserialize, Serialize};

/// Error and performance reporting. Flush and connection checks are traced as
/// transactions when enabled.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SentryConfig {
    pub enabled: bool,
    pub dsn: String,
    pub debug: bool,
    pub sample_rate: f32,
    pub max_breadcrumbs: usize,
    pub attach_stacktrace: bool,
    pub send_default_pii: bool,
    pub traces_sample_rate: f32,
}

impl Default for SentryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dsn: String::new(),
            debug: false,
            sample_rate: 1.0,
            max_breadcrumbs: 100,
            attach_stacktrace: true,
            send_default_pii: false,
            traces_sample_rate: 1.0,
        }
    }
}
