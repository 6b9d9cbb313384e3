use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollatzError {
    #[error("Invalid input: starting value must be a positive integer, got {value}")]
    InvalidInput { value: u64 },

    #[error("Invalid bound: search range must be at least 1, got {bound}")]
    InvalidBound { bound: u64 },

    #[error("Overflow: 3n+1 exceeds the u64 range at n = {value}")]
    Overflow { value: u64 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Worker task failed: {0}")]
    JoinError(#[from] tokio::task::JoinError),

    #[error("Configuration error: {field} = {value}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, CollatzError>;
