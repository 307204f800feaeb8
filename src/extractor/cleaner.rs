use regex::{Captures, Regex};
use std::sync::LazyLock;
use url::Url;

static HREF_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href=["']([^"']+)["']"#).unwrap());
static SRC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"src=["']([^"']+)["']"#).unwrap());

/// Resolve relative `href` and `src` attributes against the page base URL.
/// Attributes that fail to join are left untouched.
pub fn resolve_links(html: &str, base_url: &Url) -> String {
    let html = HREF_REGEX.replace_all(html, |caps: &Captures| {
        resolve_attr("href", &caps[0], &caps[1], base_url)
    });
    SRC_REGEX
        .replace_all(&html, |caps: &Captures| {
            resolve_attr("src", &caps[0], &caps[1], base_url)
        })
        .into_owned()
}

fn resolve_attr(name: &str, original: &str, value: &str, base_url: &Url) -> String {
    match base_url.join(value) {
        Ok(absolute) => format!(r#"{name}="{absolute}""#),
        Err(_) => original.to_string(),
    }
}
