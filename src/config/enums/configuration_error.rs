use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Invalid value for {0}: {1}")]
    ValidationError(String, String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid threshold '{threshold}' in {key}")]
    InvalidThreshold { key: String, threshold: String },

    #[error("Duplicate threshold {threshold} in {key}")]
    DuplicateThreshold { key: String, threshold: u64 },

    #[error("Missing achievement name for {0}")]
    MissingAwardName(String),

    #[error("Duplicate achievement name: {0}")]
    DuplicateAward(String),
}
