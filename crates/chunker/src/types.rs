use serde::{Deserialize, Serialize};

/// Marker inserted between chunks when a plain chunking result is joined
/// back into a single caller-visible string.
pub const CHUNK_BOUNDARY: &str = "\n\n--- CHUNK BOUNDARY ---\n\n";

/// Marker used when the chunks were produced by smart chunking.
pub const SMART_CHUNK_BOUNDARY: &str = "\n\n--- SMART CHUNK BOUNDARY ---\n\n";

/// A contiguous region of input, classified by the code-fence partitioner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    /// A fenced code block, fence markers included
    Code(String),
    /// Prose between code blocks
    Prose(String),
}

impl Segment {
    /// Raw text of this segment
    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            Segment::Code(s) | Segment::Prose(s) => s,
        }
    }

    /// Whether this segment is a fenced code block
    #[must_use]
    pub const fn is_code(&self) -> bool {
        matches!(self, Segment::Code(_))
    }
}

/// Statistics about a chunking result
#[derive(Debug, Clone)]
pub struct ChunkingStats {
    pub total_chunks: usize,
    pub total_bytes: usize,
    pub avg_chunk_bytes: usize,
    pub min_chunk_bytes: usize,
    pub max_chunk_bytes: usize,
}

impl ChunkingStats {
    /// Compute statistics over a chunk sequence
    #[must_use]
    pub fn from_chunks(chunks: &[String]) -> Self {
        let total_bytes: usize = chunks.iter().map(String::len).sum();
        Self {
            total_chunks: chunks.len(),
            total_bytes,
            avg_chunk_bytes: if chunks.is_empty() {
                0
            } else {
                total_bytes / chunks.len()
            },
            min_chunk_bytes: chunks.iter().map(String::len).min().unwrap_or(0),
            max_chunk_bytes: chunks.iter().map(String::len).max().unwrap_or(0),
        }
    }
}

impl std::fmt::Display for ChunkingStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunks: {} | Bytes: {} | Avg: {} | Range: {}-{}",
            self.total_chunks,
            self.total_bytes,
            self.avg_chunk_bytes,
            self.min_chunk_bytes,
            self.max_chunk_bytes
        )
    }
}
