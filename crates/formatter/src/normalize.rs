use std::str::FromStr;

use once_cell::sync::Lazy;
use pulldown_cmark::{html, Options, Parser};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::error::FormatterError;
use crate::language::Language;

/// A fenced code block with an optional language word after the opening
/// fence. Non-greedy body, matching the narrow grammar the normalizer
/// supports (no nesting).
pub(crate) static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(\w+)?\s*(.*?)```").expect("valid regex"));

/// A paired function-results pseudo-tag region.
static FUNCTION_RESULTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<function_results>(.*?)</function_results>").expect("valid regex"));

/// A paired code-snippet pseudo-tag, attributes captured raw.
static CODE_SNIPPET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<augment_code_snippet([^>]*)>(.*?)</augment_code_snippet>")
        .expect("valid regex")
});

static PATH_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)path="([^"]*)""#).expect("valid regex"));
static MODE_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)mode="([^"]*)""#).expect("valid regex"));

/// A rendered code block in pulldown-cmark's HTML output.
static HTML_CODE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<pre><code class="language-(\w+)">(.*?)</code></pre>"#)
        .expect("valid regex")
});

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);

/// Target representation for normalized output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Leave text untouched
    Default,
    /// Canonicalize fences and pseudo-tags
    Markdown,
    /// Same passes as markdown; the richer shell-facing default
    #[default]
    Enhanced,
    /// Markdown passes, then render to HTML with syntax highlighting
    Html,
}

impl FromStr for OutputFormat {
    type Err = FormatterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "markdown" => Ok(Self::Markdown),
            "enhanced" => Ok(Self::Enhanced),
            "html" => Ok(Self::Html),
            other => Err(FormatterError::InvalidFormat(other.to_string())),
        }
    }
}

/// Normalize output text according to the requested format.
///
/// Every pass is a pure string-to-string transform; malformed regions
/// (unterminated fences or tags) simply fail to match and pass through
/// unchanged.
#[must_use]
pub fn normalize(text: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Default => text.to_string(),
        OutputFormat::Markdown | OutputFormat::Enhanced => apply_markdown_passes(text),
        OutputFormat::Html => render_html(&apply_markdown_passes(text)),
    }
}

fn apply_markdown_passes(text: &str) -> String {
    let text = retag_fences(text);
    let text = rewrap_function_results(&text);
    canonicalize_code_snippets(&text)
}

/// Backfill missing fence language tags via heuristic detection and trim
/// the inner content.
fn retag_fences(text: &str) -> String {
    CODE_FENCE
        .replace_all(text, |caps: &Captures| {
            let code = caps[2].trim();
            let language = match caps.get(1) {
                Some(tag) => tag.as_str(),
                None => Language::detect(code).fence_tag(),
            };
            format!("```{language}\n{code}\n```")
        })
        .into_owned()
}

/// Rewrap function-result regions in a collapsible details block with the
/// content re-fenced as plain code.
fn rewrap_function_results(text: &str) -> String {
    FUNCTION_RESULTS
        .replace_all(text, |caps: &Captures| {
            let content = caps[1].trim();
            format!("<details>\n<summary>Function Results</summary>\n\n```\n{content}\n```\n</details>\n")
        })
        .into_owned()
}

/// Re-emit code-snippet tags with exactly a `path` and a `mode` attribute,
/// dropping everything else found in the source tag.
fn canonicalize_code_snippets(text: &str) -> String {
    CODE_SNIPPET
        .replace_all(text, |caps: &Captures| {
            let attrs = &caps[1];
            let content = caps[2].trim();
            let path = PATH_ATTR
                .captures(attrs)
                .map_or("unknown", |c| c.get(1).map_or("unknown", |m| m.as_str()));
            let mode = MODE_ATTR
                .captures(attrs)
                .map_or("EXCERPT", |c| c.get(1).map_or("EXCERPT", |m| m.as_str()));
            format!("<augment_code_snippet path=\"{path}\" mode=\"{mode}\">\n{content}\n</augment_code_snippet>")
        })
        .into_owned()
}

/// Render markdown to HTML, then highlight each rendered code block.
fn render_html(markdown: &str) -> String {
    let mut rendered = String::new();
    let parser = Parser::new_ext(markdown, Options::empty());
    html::push_html(&mut rendered, parser);

    HTML_CODE_BLOCK
        .replace_all(&rendered, |caps: &Captures| {
            let language = &caps[1];
            let code = unescape_html(&caps[2]);
            match highlight(&code, language) {
                Some(highlighted) => format!(
                    "<pre><code class=\"language-{language} highlighted\">{highlighted}</code></pre>"
                ),
                None => {
                    // Unsupported grammar: keep the unhighlighted block.
                    log::warn!("no highlighting grammar for language '{language}'");
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
}

/// Class-based syntect highlighting; `None` when the language has no
/// grammar or highlighting fails for any reason.
fn highlight(code: &str, language: &str) -> Option<String> {
    let syntax = SYNTAX_SET.find_syntax_by_token(language)?;
    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAX_SET, ClassStyle::Spaced);
    for line in LinesWithEndings::from(code) {
        generator
            .parse_html_for_line_which_includes_newline(line)
            .ok()?;
    }
    Some(generator.finalize())
}

/// Undo the entity escaping pulldown-cmark applies inside code blocks.
fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
