//! # Prompt Formatter
//!
//! Output normalization for assistant-produced text: code-fence language
//! backfill, pseudo-XML tag canonicalization, optional HTML rendering with
//! syntax highlighting, plus advisory size and complexity checks.
//!
//! ## Architecture
//!
//! ```text
//! Raw Output Text
//!     │
//!     ├──> Normalizer (per output format)
//!     │    ├─> Fence re-tagging (heuristic language detection)
//!     │    ├─> <function_results> → collapsible details block
//!     │    ├─> <augment_code_snippet> attribute canonicalization
//!     │    └─> HTML: markdown render + syntect highlighting (fail-soft)
//!     │
//!     ├──> Input optimizers (whitespace, quoting, fence cleanup)
//!     │
//!     └──> Size / complexity policy (advisory only)
//! ```
//!
//! All transforms are pure string-to-string functions; nothing here performs
//! I/O or alters control flow on its own.

mod error;
mod language;
mod normalize;
mod optimize;
mod policy;

pub use error::{FormatterError, Result};
pub use language::Language;
pub use normalize::{normalize, OutputFormat};
pub use optimize::{fix_double_quotes, optimize_code_blocks, optimize_input};
pub use policy::{check_complexity, check_size, check_size_with_limit, SizeCheck, DEFAULT_SIZE_LIMIT};
