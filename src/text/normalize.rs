use regex::Regex;
use std::sync::LazyLock;

static TRAILING_BLANKS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+\n").unwrap());
static NEWLINE_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());
static SPACE_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]{2,}").unwrap());

/// Canonicalize whitespace over the full string.
///
/// Step order matters: trailing spaces must be removed before newline runs
/// are collapsed, otherwise they would survive as mid-line space runs.
pub fn normalize_whitespace(value: &str) -> String {
    let text = value.replace('\r', "");
    let text = TRAILING_BLANKS_REGEX.replace_all(&text, "\n");
    let text = NEWLINE_RUN_REGEX.replace_all(&text, "\n\n");
    let text = SPACE_RUN_REGEX.replace_all(&text, " ");
    text.trim().to_string()
}
