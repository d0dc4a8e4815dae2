//! # Prompt Chunker
//!
//! Boundary-aware splitting of large, loosely formatted text (prose mixed
//! with fenced code blocks) into bounded-size chunks for size-constrained
//! downstream consumers.
//!
//! ## Philosophy
//!
//! The chunker produces pieces that stay meaningful on their own:
//! - Split at paragraph boundaries first, sentences and lines as fallbacks
//! - Never break a fenced code block that fits within the size limit
//! - Optionally carry trailing context across chunk boundaries
//!
//! ## Architecture
//!
//! ```text
//! Input Text
//!     │
//!     ├──> Code-Fence Partition (code vs. prose segments)
//!     │
//!     ├──> Segmentation
//!     │    ├─> Paragraph-greedy accumulation
//!     │    ├─> Context injection (smart mode)
//!     │    └─> Forced split: sentence → line → hard cut
//!     │
//!     └──> Chunk sequence (each ≤ max_chunk_size)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use prompt_chunker::{Chunker, ChunkerConfig};
//!
//! let config = ChunkerConfig::default();
//! let chunker = Chunker::new(config).unwrap();
//!
//! let chunks = chunker.chunk("Some long text...");
//! for chunk in &chunks {
//!     assert!(chunk.len() <= chunker.config().max_chunk_size);
//! }
//! ```

mod chunker;
mod config;
mod error;
mod partition;
mod progress;
mod segmenter;
mod types;

pub use chunker::Chunker;
pub use config::ChunkerConfig;
pub use error::{ChunkerError, Result};
pub use partition::{partition, split_code_block};
pub use progress::{NoProgress, ProgressSink};
pub use segmenter::{segment, smart_segment, CONTEXT_HEADER, CONTINUATION_HEADER};
pub use types::{ChunkingStats, Segment, CHUNK_BOUNDARY, SMART_CHUNK_BOUNDARY};
