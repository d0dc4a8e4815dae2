use thiserror::Error;

/// Result type for chunking operations
pub type Result<T> = std::result::Result<T, ChunkerError>;

/// Errors that can occur during chunking
#[derive(Error, Debug)]
pub enum ChunkerError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The caller cancelled the operation mid-run
    #[error("Chunking cancelled by caller")]
    Cancelled,
}

impl ChunkerError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
