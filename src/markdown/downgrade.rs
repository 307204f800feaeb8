use regex::Regex;
use std::sync::LazyLock;

use crate::text::normalize_whitespace;

static IMAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[[^\]]*\]\([^)]+\)").unwrap());
static LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());
static FENCE_BLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());
static FENCE_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"```[^\n]*\n?").unwrap());
static INLINE_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());
// Markers are line-anchored with horizontal indent only, so a blank line
// before a list is never swallowed and interior hyphens or numbers like
// 3.14 are untouched.
static HEADING_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}\s+").unwrap());
static BULLET_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[-*+]\s+").unwrap());
static ORDERED_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\d+\.\s+").unwrap());

/// Strip markdown syntax down to plain text.
///
/// Image syntax disappears entirely, links keep their label, fenced code
/// blocks keep their inner lines verbatim, and heading/bullet/ordered
/// markers are removed at line starts only.
pub fn markdown_to_text(markdown: &str) -> String {
    let text = IMAGE_REGEX.replace_all(markdown, "");
    let text = LINK_REGEX.replace_all(&text, "$1");
    let text = FENCE_BLOCK_REGEX.replace_all(&text, |caps: &regex::Captures| {
        FENCE_LINE_REGEX
            .replace_all(&caps[0], "")
            .replace("```", "")
    });
    let text = INLINE_CODE_REGEX.replace_all(&text, "$1");
    let text = HEADING_MARKER_REGEX.replace_all(&text, "");
    let text = BULLET_MARKER_REGEX.replace_all(&text, "");
    let text = ORDERED_MARKER_REGEX.replace_all(&text, "");
    normalize_whitespace(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::render::html_to_markdown;

    #[test]
    fn strips_headings_and_bullets() {
        assert_eq!(
            markdown_to_text("## Title\n\n- item one\n- item two"),
            "Title\n\nitem one\nitem two"
        );
    }

    #[test]
    fn removes_images_entirely() {
        assert_eq!(
            markdown_to_text("before ![alt text](https://x.test/a.png) after"),
            "before after"
        );
    }

    #[test]
    fn links_keep_their_label() {
        assert_eq!(
            markdown_to_text("see [the docs](https://docs.example) now"),
            "see the docs now"
        );
    }

    #[test]
    fn fenced_code_keeps_inner_lines() {
        assert_eq!(
            markdown_to_text("```rust\nlet x = 1;\nlet y = 2;\n```"),
            "let x = 1;\nlet y = 2;"
        );
    }

    #[test]
    fn inline_code_keeps_content() {
        assert_eq!(markdown_to_text("run `cargo test` locally"), "run cargo test locally");
    }

    #[test]
    fn ordered_markers_are_removed() {
        assert_eq!(markdown_to_text("1. first\n12. twelfth"), "first\ntwelfth");
    }

    #[test]
    fn interior_punctuation_survives() {
        assert_eq!(markdown_to_text("pi is 3.14 - roughly"), "pi is 3.14 - roughly");
        assert_eq!(markdown_to_text("3.14 starts this line"), "3.14 starts this line");
        assert_eq!(markdown_to_text("a - b - c"), "a - b - c");
    }

    #[test]
    fn markers_must_start_the_line() {
        assert_eq!(markdown_to_text("not ## a heading"), "not ## a heading");
    }

    #[test]
    fn round_trip_keeps_visible_words() {
        let html = "<title>Doc</title><h1>Head</h1><p>Body with <a href='/l'>anchor</a></p>\
                    <ul><li>one</li><li>two</li></ul>";
        let rendered = html_to_markdown(html);
        let plain = markdown_to_text(&rendered.text);

        for word in ["Doc", "Head", "Body", "anchor", "one", "two"] {
            assert!(plain.contains(word), "missing {word:?} in {plain:?}");
        }
        assert!(!plain.contains('#'));
        assert!(!plain.contains("]("));
        assert!(!plain.contains("- "));
    }
}
