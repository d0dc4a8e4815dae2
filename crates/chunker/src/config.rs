use serde::{Deserialize, Serialize};

/// Configuration for chunking behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Maximum chunk size in bytes (hard limit, save for indivisible runs)
    pub max_chunk_size: usize,

    /// Keep fenced code blocks intact when they fit within the limit
    pub preserve_code_blocks: bool,

    /// Carry trailing context from a flushed chunk into the next one
    pub smart_chunking: bool,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: 10_000,
            preserve_code_blocks: true,
            smart_chunking: true,
        }
    }
}

impl ChunkerConfig {
    /// Create config with only the size limit changed
    pub fn with_max_size(max_chunk_size: usize) -> Self {
        Self {
            max_chunk_size,
            ..Default::default()
        }
    }

    /// Create config for plain size-based chunking (no context, no fences)
    pub fn plain(max_chunk_size: usize) -> Self {
        Self {
            max_chunk_size,
            preserve_code_blocks: false,
            smart_chunking: false,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_chunk_size == 0 {
            return Err("max_chunk_size must be > 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = ChunkerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_chunk_size, 10_000);
        assert!(config.preserve_code_blocks);
        assert!(config.smart_chunking);
    }

    #[test]
    fn test_zero_max_size_rejected() {
        let config = ChunkerConfig::with_max_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_plain_preset() {
        let config = ChunkerConfig::plain(500);
        assert!(config.validate().is_ok());
        assert!(!config.preserve_code_blocks);
        assert!(!config.smart_chunking);
    }
}
