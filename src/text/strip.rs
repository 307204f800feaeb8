use regex::Regex;
use std::sync::LazyLock;

use crate::text::entities::decode_entities;

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Remove every `<...>` delimiter pair and decode entities in the remainder.
///
/// This is a generic markup strip, not a sanitizer: it makes no distinction
/// between tag types, so non-content elements (scripts, styles) must be
/// removed by the caller beforehand if their bodies should not survive.
pub fn strip_tags(value: &str) -> String {
    decode_entities(&TAG_REGEX.replace_all(value, ""))
}
