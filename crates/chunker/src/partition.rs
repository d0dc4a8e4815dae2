use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Segment;

/// A fenced code block: opening fence (with optional language word) through
/// the nearest closing fence. Non-greedy, no nesting.
static CODE_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```.*?```").expect("valid regex"));

/// Split text into an ordered sequence of code and prose segments.
///
/// Fence markers stay inside their code segment. An unterminated fence has
/// no match and its tail is treated as ordinary prose. Prose that is blank
/// after trimming is dropped.
#[must_use]
pub fn partition(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for m in CODE_FENCE.find_iter(text) {
        push_prose(&mut segments, &text[cursor..m.start()]);
        segments.push(Segment::Code(m.as_str().to_string()));
        cursor = m.end();
    }
    push_prose(&mut segments, &text[cursor..]);

    segments
}

fn push_prose(segments: &mut Vec<Segment>, text: &str) {
    if !text.trim().is_empty() {
        segments.push(Segment::Prose(text.to_string()));
    }
}

/// Split an oversized code block strictly on line boundaries.
///
/// Lines are accumulated until adding the next one would exceed `max_size`;
/// a single line longer than the limit is emitted as its own oversized
/// chunk rather than cut mid-line.
#[must_use]
pub fn split_code_block(block: &str, max_size: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for line in block.lines() {
        if !current.is_empty() && current.len() + line.len() + 1 > max_size {
            chunks.push(std::mem::take(&mut current));
            current.push_str(line);
        } else if current.is_empty() {
            current.push_str(line);
        } else {
            current.push('\n');
            current.push_str(line);
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partition_interleaved() {
        let text = "Intro prose.\n\n```rust\nfn main() {}\n```\n\nClosing prose.";
        let segments = partition(text);

        assert_eq!(segments.len(), 3);
        assert!(!segments[0].is_code());
        assert!(segments[1].is_code());
        assert_eq!(segments[1].content(), "```rust\nfn main() {}\n```");
        assert!(!segments[2].is_code());
    }

    #[test]
    fn test_partition_no_fences() {
        let segments = partition("Just some prose here.");
        assert_eq!(segments.len(), 1);
        assert!(!segments[0].is_code());
    }

    #[test]
    fn test_partition_unterminated_fence_is_prose() {
        let text = "Before.\n\n```rust\nfn broken(";
        let segments = partition(text);

        assert_eq!(segments.len(), 1);
        assert!(!segments[0].is_code());
        assert_eq!(segments[0].content(), text);
    }

    #[test]
    fn test_partition_drops_blank_prose() {
        let text = "```\na\n```\n\n\n```\nb\n```";
        let segments = partition(text);

        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(Segment::is_code));
    }

    #[test]
    fn test_partition_adjacent_fences_close_non_greedily() {
        let text = "```\nfirst\n```\nmiddle\n```\nsecond\n```";
        let segments = partition(text);

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].content(), "```\nfirst\n```");
        assert_eq!(segments[1].content(), "\nmiddle\n");
        assert_eq!(segments[2].content(), "```\nsecond\n```");
    }

    #[test]
    fn test_split_code_block_line_aligned() {
        // 50 lines of 30 bytes: groups must stay line-aligned and within
        // the limit.
        let line = "x".repeat(29);
        let block = vec![line.clone(); 50].join("\n");
        let chunks = split_code_block(&block, 500);

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.len() <= 500);
            for l in chunk.lines() {
                assert_eq!(l.len(), 29, "no line may be cut");
            }
        }

        let rejoined = chunks.join("\n");
        assert_eq!(rejoined, block);
    }

    #[test]
    fn test_split_code_block_single_long_line() {
        let block = "y".repeat(700);
        let chunks = split_code_block(&block, 500);

        // One indivisible line: emitted whole rather than cut mid-line.
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].len(), 700);
    }

    #[test]
    fn test_split_code_block_empty() {
        assert!(split_code_block("", 100).is_empty());
    }
}
