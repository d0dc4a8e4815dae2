use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::language::Language;
use crate::normalize::CODE_FENCE;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static LEADING_INDENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]+").expect("valid regex"));
static EXCESS_BLANK_LINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

/// Tighten a prompt before it is sent downstream.
///
/// Whitespace runs collapse to single spaces, a polite lead-in is added when
/// one is missing, and the prompt gains a closing period if it has no
/// terminal punctuation.
#[must_use]
pub fn optimize_input(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text, " ");
    let mut optimized = collapsed.trim().to_string();
    if optimized.is_empty() {
        return optimized;
    }

    let lower = optimized.to_lowercase();
    if !lower.contains("please") && !lower.contains("could you") {
        let mut chars = optimized.chars();
        if let Some(first) = chars.next() {
            optimized = format!("Please {}{}", first.to_lowercase(), chars.as_str());
        }
    }

    if !optimized.ends_with(['.', '?', '!']) {
        optimized.push('.');
    }

    optimized
}

/// Escape every double quote not already preceded by a backslash.
///
/// The regex crate has no lookbehind, so this is a straight scan.
#[must_use]
pub fn fix_double_quotes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_backslash = false;

    for c in text.chars() {
        if c == '"' && !prev_backslash {
            out.push('\\');
        }
        out.push(c);
        prev_backslash = c == '\\';
    }

    out
}

/// Clean up fenced code blocks: backfill missing language tags, convert
/// leading tab runs to spaces, and collapse runs of three or more newlines.
#[must_use]
pub fn optimize_code_blocks(text: &str) -> String {
    CODE_FENCE
        .replace_all(text, |caps: &Captures| {
            let code = caps[2].trim();
            let language = match caps.get(1) {
                Some(tag) => tag.as_str().to_string(),
                None => Language::detect(code).fence_tag().to_string(),
            };

            let code = LEADING_INDENT.replace_all(code, |indent: &Captures| {
                " ".repeat(indent[0].chars().count())
            });
            let code = EXCESS_BLANK_LINES.replace_all(&code, "\n\n");

            format!("```{language}\n{code}\n```")
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_optimize_input_collapses_whitespace() {
        let out = optimize_input("please   fix\n\n   this    bug");
        assert_eq!(out, "please fix this bug.");
    }

    #[test]
    fn test_optimize_input_adds_polite_prefix() {
        let out = optimize_input("Fix the build");
        assert_eq!(out, "Please fix the build.");
    }

    #[test]
    fn test_optimize_input_keeps_existing_punctuation() {
        assert_eq!(optimize_input("Could you fix this?"), "Could you fix this?");
    }

    #[test]
    fn test_optimize_input_empty() {
        assert_eq!(optimize_input(""), "");
        assert_eq!(optimize_input("   \n "), "");
    }

    #[test]
    fn test_fix_double_quotes() {
        assert_eq!(fix_double_quotes(r#"say "hi""#), r#"say \"hi\""#);
    }

    #[test]
    fn test_fix_double_quotes_skips_escaped() {
        assert_eq!(fix_double_quotes(r#"say \"hi\""#), r#"say \"hi\""#);
    }

    #[test]
    fn test_fix_double_quotes_no_quotes() {
        assert_eq!(fix_double_quotes("nothing here"), "nothing here");
    }

    #[test]
    fn test_optimize_code_blocks_tabs_and_blank_lines() {
        let text = "```\ndef f():\n\tpass\n\n\n\ndef g():\n\tpass\n```";
        let out = optimize_code_blocks(text);

        assert_eq!(
            out,
            "```python\ndef f():\n pass\n\ndef g():\n pass\n```"
        );
    }

    #[test]
    fn test_optimize_code_blocks_leaves_prose_alone() {
        let text = "Some\t\tprose\n\n\n\nwith gaps";
        assert_eq!(optimize_code_blocks(text), text);
    }
}
