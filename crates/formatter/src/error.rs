use thiserror::Error;

/// Result type for formatter operations
pub type Result<T> = std::result::Result<T, FormatterError>;

/// Errors that can occur while formatting
#[derive(Error, Debug)]
pub enum FormatterError {
    /// Unrecognized output format name
    #[error("Unknown output format: {0}")]
    InvalidFormat(String),
}
