use serde::{Deserialize, Serialize};

/// Language tag inferred from a code snippet's textual patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    TypeScript,
    JavaScript,
    Python,
    Java,
    Html,
    Go,
    C,
    Cpp,
    Unknown,
}

impl Language {
    /// Heuristic language detection over raw snippet text.
    ///
    /// Checks run in a fixed order and the first match wins. TypeScript's
    /// three-way match is stricter than the JavaScript check and must run
    /// first, or TS snippets would classify as JS. Pure and deterministic;
    /// snippets matching nothing stay [`Language::Unknown`].
    #[must_use]
    pub fn detect(code: &str) -> Self {
        if code.contains("import") && code.contains("from") && code.contains("const") {
            return Language::TypeScript;
        }
        if code.contains("function") && (code.contains('{') || code.contains("=>")) {
            return Language::JavaScript;
        }
        if code.contains("def ") && code.contains(':') {
            return Language::Python;
        }
        if code.contains("class") && code.contains('{') && code.contains("public") {
            return Language::Java;
        }
        if code.contains("<html") || code.contains("<!DOCTYPE") {
            return Language::Html;
        }
        if code.contains("package ") && code.contains("import ") && code.contains("func ") {
            return Language::Go;
        }
        if code.contains("#include") && (code.contains("<stdio.h>") || code.contains("<iostream>"))
        {
            return if code.contains("cout") {
                Language::Cpp
            } else {
                Language::C
            };
        }

        Language::Unknown
    }

    /// Get language name as string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Language::TypeScript => "typescript",
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Java => "java",
            Language::Html => "html",
            Language::Go => "go",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Unknown => "unknown",
        }
    }

    /// Tag written after a code fence; undetected snippets stay untagged
    #[must_use]
    pub const fn fence_tag(self) -> &'static str {
        match self {
            Language::Unknown => "",
            other => other.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_detect_typescript_before_javascript() {
        // Matches both the TS triple-check and the looser JS check; the
        // stricter rule must win.
        let code = "import { thing } from './thing';\nconst f = function () { return 1; };";
        assert_eq!(Language::detect(code), Language::TypeScript);
    }

    #[test]
    fn test_detect_javascript() {
        assert_eq!(
            Language::detect("function add(a, b) { return a + b; }"),
            Language::JavaScript
        );
        assert_eq!(
            Language::detect("const add = function (a, b) => a + b"),
            Language::JavaScript
        );
    }

    #[test]
    fn test_detect_python() {
        assert_eq!(
            Language::detect("def main():\n    print('hi')"),
            Language::Python
        );
    }

    #[test]
    fn test_detect_java() {
        assert_eq!(
            Language::detect("public class Main {\n    public static void main() {}\n}"),
            Language::Java
        );
    }

    #[test]
    fn test_detect_html() {
        assert_eq!(Language::detect("<!DOCTYPE html><body/>"), Language::Html);
        assert_eq!(Language::detect("<html><head></head></html>"), Language::Html);
    }

    #[test]
    fn test_detect_go() {
        let code = "package main\n\nimport \"fmt\"\n\nfunc main() { fmt.Println(1) }";
        assert_eq!(Language::detect(code), Language::Go);
    }

    #[test]
    fn test_detect_c_and_cpp() {
        assert_eq!(
            Language::detect("#include <stdio.h>\nint main(void) { return 0; }"),
            Language::C
        );
        assert_eq!(
            Language::detect("#include <iostream>\nint main() { std::cout << 1; }"),
            Language::Cpp
        );
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(Language::detect("plain prose, nothing special"), Language::Unknown);
        assert_eq!(Language::Unknown.fence_tag(), "");
    }

    #[test]
    fn test_detect_deterministic() {
        let code = "def f():\n    return 1";
        assert_eq!(Language::detect(code), Language::detect(code));
    }
}
