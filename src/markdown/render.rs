use regex::Regex;
use std::sync::LazyLock;

use crate::text::{normalize_whitespace, strip_tags};

static TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap());
static SCRIPT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script.*?</script>").unwrap());
static STYLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style.*?</style>").unwrap());
static NOSCRIPT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<noscript.*?</noscript>").unwrap());
static ANCHOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<a\s+[^>]*href=["']([^"']+)["'][^>]*>(.*?)</a>"#).unwrap()
});
// One pattern per level so a closing tag only pairs with its own level;
// mismatched pairs fall through to the generic strip.
static HEADING_REGEXES: LazyLock<[Regex; 6]> = LazyLock::new(|| {
    std::array::from_fn(|idx| {
        let level = idx + 1;
        Regex::new(&format!(r"(?is)<h{level}[^>]*>(.*?)</h{level}>")).unwrap()
    })
});
static LIST_ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<li[^>]*>(.*?)</li>").unwrap());
static LINE_BREAK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(?:br|hr)\s*/?>").unwrap());
static BLOCK_CLOSE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</(?:p|div|section|article|header|footer|table|tr|ul|ol)>").unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub title: Option<String>,
}

/// Convert an HTML fragment into a markdown-flavored text.
///
/// The rewrite order is a correctness requirement: links, headings and list
/// items must be converted before the generic tag strip or their structure
/// is lost, and block-closing tags must become line breaks before stripping
/// so paragraphs don't run together.
pub fn html_to_markdown(html: &str) -> Rendered {
    let title = TITLE_REGEX
        .captures(html)
        .map(|caps| normalize_whitespace(&strip_tags(&caps[1])))
        .filter(|title| !title.is_empty());

    let text = SCRIPT_REGEX.replace_all(html, "");
    let text = STYLE_REGEX.replace_all(&text, "");
    let text = NOSCRIPT_REGEX.replace_all(&text, "");

    let mut text = ANCHOR_REGEX
        .replace_all(&text, |caps: &regex::Captures| {
            let href = &caps[1];
            let label = normalize_whitespace(&strip_tags(&caps[2]));
            if label.is_empty() {
                href.to_string()
            } else {
                format!("[{label}]({href})")
            }
        })
        .into_owned();

    for (idx, heading) in HEADING_REGEXES.iter().enumerate() {
        let prefix = heading_prefix(idx + 1);
        text = heading
            .replace_all(&text, |caps: &regex::Captures| {
                let label = normalize_whitespace(&strip_tags(&caps[1]));
                format!("\n{prefix} {label}\n")
            })
            .into_owned();
    }

    let text = LIST_ITEM_REGEX.replace_all(&text, |caps: &regex::Captures| {
        let label = normalize_whitespace(&strip_tags(&caps[1]));
        if label.is_empty() {
            String::new()
        } else {
            format!("\n- {label}")
        }
    });

    let text = LINE_BREAK_REGEX.replace_all(&text, "\n");
    let text = BLOCK_CLOSE_REGEX.replace_all(&text, "\n");
    let text = normalize_whitespace(&strip_tags(&text));

    Rendered { text, title }
}

fn heading_prefix(level: usize) -> String {
    "#".repeat(level.clamp(1, 6))
}
