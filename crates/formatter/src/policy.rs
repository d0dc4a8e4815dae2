use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Conservative size ceiling before downstream "too large input" failures.
pub const DEFAULT_SIZE_LIMIT: usize = 8000;

/// Below this length a prompt is never flagged as complex.
const COMPLEXITY_LENGTH_FLOOR: usize = 2000;

/// Broad-task phrasings that tend to produce oversized responses.
static COMPLEXITY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        "write.*documentation",
        "create.*complete",
        "implement.*entire",
        "build.*full",
        "generate.*all",
    ]
    .iter()
    .map(|p| Regex::new(&format!("(?i){p}")).expect("valid regex"))
    .collect()
});

/// Fixed recommendation returned for complex prompts. Advisory only.
pub const BREAKDOWN_ADVICE: &str = "This looks like a complex task. Consider breaking it down:\n\
1. Start with the main structure\n\
2. Ask for specific sections one by one\n\
3. Use 'continue from where you left off' for incomplete responses\n\
This prevents 'too large input' errors.";

/// Outcome of a size check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeCheck {
    pub is_over_threshold: bool,
    pub advisory: Option<String>,
}

/// Check text against the default size limit.
#[must_use]
pub fn check_size(text: &str) -> SizeCheck {
    check_size_with_limit(text, DEFAULT_SIZE_LIMIT)
}

/// Check text against an explicit size limit. The advisory embeds both the
/// literal length and the limit; it never blocks the caller.
#[must_use]
pub fn check_size_with_limit(text: &str, limit: usize) -> SizeCheck {
    if text.len() > limit {
        SizeCheck {
            is_over_threshold: true,
            advisory: Some(format!(
                "Input is {} characters (recommended max: {}). Consider breaking this \
                 into smaller tasks to avoid \"too large input\" errors.",
                text.len(),
                limit
            )),
        }
    } else {
        SizeCheck {
            is_over_threshold: false,
            advisory: None,
        }
    }
}

/// Flag prompts that are both long and broadly phrased.
///
/// Returns the fixed breakdown recommendation, or `None` when the prompt
/// looks fine for direct use.
#[must_use]
pub fn check_complexity(text: &str) -> Option<&'static str> {
    if text.len() > COMPLEXITY_LENGTH_FLOOR
        && COMPLEXITY_PATTERNS.iter().any(|p| p.is_match(text))
    {
        Some(BREAKDOWN_ADVICE)
    } else {
        None
    }
}
