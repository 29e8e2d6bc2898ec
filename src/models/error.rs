use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("XP must be non-negative, got {0}")]
    NegativeXp(i64),

    #[error("Difficulty must be between 1 and 5, got {0}")]
    InvalidDifficulty(u8),

    #[error("Malformed date: {0}")]
    InvalidDate(String),

    #[error("Invalid rank table: {0}")]
    InvalidRankTable(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
