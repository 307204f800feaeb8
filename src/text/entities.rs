use regex::Regex;
use std::sync::LazyLock;

static ENTITY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)&nbsp;|&amp;|&quot;|&#39;|&lt;|&gt;|&#x[0-9a-f]+;|&#[0-9]+;").unwrap()
});

/// Decode the fixed set of HTML character references this pipeline cares
/// about. Named references match case-insensitively; numeric references are
/// decoded through their literal code point. Anything unrecognized or
/// malformed is left as-is.
///
/// Single pass: the output of one replacement is never rescanned, so
/// `&amp;lt;` decodes to the literal `&lt;`.
pub fn decode_entities(value: &str) -> String {
    ENTITY_REGEX
        .replace_all(value, |caps: &regex::Captures| {
            let entity = &caps[0];
            match entity.to_ascii_lowercase().as_str() {
                "&nbsp;" => " ".to_string(),
                "&amp;" => "&".to_string(),
                "&quot;" => "\"".to_string(),
                "&#39;" => "'".to_string(),
                "&lt;" => "<".to_string(),
                "&gt;" => ">".to_string(),
                _ => decode_numeric(entity).unwrap_or_else(|| entity.to_string()),
            }
        })
        .into_owned()
}

// Code points that are not valid Unicode scalar values (surrogates, out of
// range, digit overflow) stay unconverted, same as any malformed reference.
fn decode_numeric(entity: &str) -> Option<String> {
    let body = entity.strip_prefix("&#")?.strip_suffix(';')?;
    let code = if let Some(hex) = body.strip_prefix(['x', 'X']) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        body.parse::<u32>().ok()?
    };
    char::from_u32(code).map(|c| c.to_string())
}
