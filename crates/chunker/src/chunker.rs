use crate::config::ChunkerConfig;
use crate::error::{ChunkerError, Result};
use crate::partition::{partition, split_code_block};
use crate::progress::{NoProgress, ProgressSink};
use crate::segmenter;
use crate::types::{ChunkingStats, Segment, CHUNK_BOUNDARY, SMART_CHUNK_BOUNDARY};

/// Main chunker interface for processing text
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    /// Create a new chunker with configuration
    pub fn new(config: ChunkerConfig) -> Result<Self> {
        config.validate().map_err(ChunkerError::InvalidConfig)?;
        Ok(Self { config })
    }

    /// Chunk text into pieces no larger than the configured limit.
    ///
    /// Empty or whitespace-only input yields an empty sequence.
    #[must_use]
    pub fn chunk(&self, text: &str) -> Vec<String> {
        // NoProgress never cancels, so the error arm is unreachable.
        self.chunk_with_progress(text, &NoProgress).unwrap_or_default()
    }

    /// Chunk text, reporting status to `progress` and honoring cancellation
    /// at whole-chunk granularity.
    pub fn chunk_with_progress(
        &self,
        text: &str,
        progress: &dyn ProgressSink,
    ) -> Result<Vec<String>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let max = self.config.max_chunk_size;
        let segments = if self.config.preserve_code_blocks && text.contains("```") {
            partition(text)
        } else {
            vec![Segment::Prose(text.to_string())]
        };

        progress.report("Analyzing content...");

        let mut chunks = Vec::new();
        for segment in segments {
            if progress.is_cancelled() {
                return Err(ChunkerError::Cancelled);
            }

            match segment {
                Segment::Code(block) => {
                    if block.len() > max {
                        chunks.extend(split_code_block(&block, max));
                    } else {
                        chunks.push(block);
                    }
                }
                Segment::Prose(body) => {
                    let pieces = if self.config.smart_chunking {
                        segmenter::smart_segment(&body, max)
                    } else {
                        segmenter::segment(&body, max)
                    };
                    chunks.extend(pieces);
                }
            }
        }

        log::debug!("chunked {} bytes into {} chunks", text.len(), chunks.len());
        progress.report(&format!("Created {} chunks", chunks.len()));
        Ok(chunks)
    }

    /// Join chunks back into a single string with a visible boundary marker
    /// between them.
    #[must_use]
    pub fn join(&self, chunks: &[String]) -> String {
        if self.config.smart_chunking {
            chunks.join(SMART_CHUNK_BOUNDARY)
        } else {
            chunks.join(CHUNK_BOUNDARY)
        }
    }

    /// Get configuration
    #[must_use]
    pub const fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Get statistics about a chunking result
    #[must_use]
    pub fn stats(chunks: &[String]) -> ChunkingStats {
        ChunkingStats::from_chunks(chunks)
    }
}
