use once_cell::sync::Lazy;
use regex::Regex;

/// One or more whitespace-only lines, i.e. a paragraph boundary.
static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

/// Header line prepended to carried-over context in smart mode.
pub const CONTEXT_HEADER: &str = "--- CONTEXT FROM PREVIOUS CHUNK ---";

/// Header line marking where the new content resumes after carried context.
pub const CONTINUATION_HEADER: &str = "--- CONTINUATION ---";

/// Upper bound on how much trailing context a flush may carry forward.
const MAX_CONTEXT_BYTES: usize = 200;

/// Split text into chunks no larger than `max_size` bytes.
///
/// Paragraphs are accumulated greedily; anything still oversized after that
/// is force-split at sentence ends, line breaks, or as a last resort a hard
/// cut at the size limit.
#[must_use]
pub fn segment(text: &str, max_size: usize) -> Vec<String> {
    let coarse = accumulate_paragraphs(text, max_size, false);
    force_split_oversized(coarse, max_size)
}

/// Like [`segment`], but carries trailing context across chunk boundaries.
///
/// When a flush happens, up to `min(200, len / 4)` trailing bytes of the
/// flushed chunk are replayed at the top of the next chunk between the
/// [`CONTEXT_HEADER`] and [`CONTINUATION_HEADER`] marker lines.
#[must_use]
pub fn smart_segment(text: &str, max_size: usize) -> Vec<String> {
    let coarse = accumulate_paragraphs(text, max_size, true);
    force_split_oversized(coarse, max_size)
}

/// Greedy paragraph accumulation shared by both segmenter variants.
fn accumulate_paragraphs(text: &str, max_size: usize, carry_context: bool) -> Vec<String> {
    let mut chunks: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut context = String::new();

    // Leading or trailing blank lines produce empty paragraphs; skip them
    // so they cannot trigger a flush or consume pending context.
    for paragraph in PARAGRAPH_BREAK.split(text).filter(|p| !p.trim().is_empty()) {
        if !current.is_empty() && current.len() + paragraph.len() > max_size {
            if carry_context {
                let context_size = MAX_CONTEXT_BYTES.min(current.len() / 4);
                let start = floor_char_boundary(&current, current.len() - context_size);
                context = current[start..].to_string();
            }
            chunks.push(std::mem::take(&mut current));

            // Context is consumed by exactly one freshly started chunk.
            if carry_context && !context.is_empty() {
                current = format!(
                    "{CONTEXT_HEADER}\n{context}\n\n{CONTINUATION_HEADER}\n\n{paragraph}"
                );
                context.clear();
            } else {
                current = paragraph.to_string();
            }
        } else if !current.is_empty() {
            current.push_str("\n\n");
            current.push_str(paragraph);
        } else {
            current = paragraph.to_string();
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Force-split any chunk still larger than `max_size`.
fn force_split_oversized(chunks: Vec<String>, max_size: usize) -> Vec<String> {
    let mut out = Vec::with_capacity(chunks.len());

    for chunk in chunks {
        if chunk.len() <= max_size {
            out.push(chunk);
            continue;
        }

        let mut remaining = chunk.as_str();
        while remaining.len() > max_size {
            let break_point = find_break_point(remaining, max_size);
            out.push(remaining[..break_point].to_string());
            remaining = remaining[break_point..].trim_start();
        }
        if !remaining.is_empty() {
            out.push(remaining.to_string());
        }
    }

    out
}

/// Find the best break position at or before `max_size`.
///
/// Sentence ends are preferred over line breaks; either must land past the
/// halfway mark to be worth using. Failing both, cut at the limit itself
/// (backed off to a UTF-8 char boundary).
fn find_break_point(text: &str, max_size: usize) -> usize {
    let window_end = floor_char_boundary(text, max_size);
    let window = &text[..window_end];

    for terminator in ['.', '\n'] {
        if let Some(idx) = window.rfind(terminator) {
            if idx >= max_size / 2 {
                // Include the terminator in the emitted piece.
                return idx + terminator.len_utf8();
            }
        }
    }

    if window_end > 0 {
        window_end
    } else {
        // max_size is smaller than the first character; emit it whole.
        text.chars().next().map_or(text.len(), char::len_utf8)
    }
}

/// Largest index `<= index` that lies on a char boundary.
fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}
