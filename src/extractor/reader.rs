use readability::extractor;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::extractor::errors::ExtractError;
use crate::extractor::model::{ExtractOptions, ReadabilityResult};

// Stand-in base when the request URL does not parse; relative links then
// resolve against a meaningless host instead of aborting extraction.
static FALLBACK_BASE: LazyLock<Url> = LazyLock::new(|| Url::parse("http://localhost/").unwrap());

const CANDIDATE_SELECTORS: [&str; 9] = [
    "article",
    "main",
    "[role='main']",
    ".content",
    ".post",
    ".article",
    "#content",
    "#main",
    ".entry-content",
];

/// Locate the main content region of a document.
///
/// Readability runs first; if it errors out or yields a region below the
/// threshold, a heuristic scraper pass over common content containers takes
/// over, with `<body>` as the last resort.
pub fn extract(
    html: &str,
    base_url: Option<&Url>,
    options: ExtractOptions,
) -> Result<ReadabilityResult, ExtractError> {
    let url = base_url.unwrap_or(&FALLBACK_BASE);

    if let Ok(article) = extractor::extract(&mut html.as_bytes(), url)
        && has_enough_text(&article.text, options.char_threshold)
    {
        return Ok(ReadabilityResult {
            title: article.title,
            text: article.text,
            html: article.content,
        });
    }

    fallback_extract(html, options).ok_or(ExtractError::NoContent)
}

fn has_enough_text(text: &str, char_threshold: usize) -> bool {
    let len = text.trim().chars().count();
    len > 0 && len >= char_threshold
}

fn fallback_extract(html: &str, options: ExtractOptions) -> Option<ReadabilityResult> {
    let document = Html::parse_document(html);

    let (text, html_content) = extract_main_content(&document, options.char_threshold);
    if !has_enough_text(&text, options.char_threshold) {
        return None;
    }

    let title = extract_title(&document).unwrap_or_default();

    Some(ReadabilityResult {
        title,
        text,
        html: html_content,
    })
}

fn extract_title(document: &Html) -> Option<String> {
    if let Ok(selector) = Selector::parse("meta[property='og:title']") {
        for element in document.select(&selector) {
            if let Some(content) = element.value().attr("content")
                && !content.trim().is_empty()
            {
                return Some(content.trim().to_string());
            }
        }
    }

    for tag in ["title", "h1"] {
        if let Ok(selector) = Selector::parse(tag)
            && let Some(element) = document.select(&selector).next()
        {
            let title = element.text().collect::<String>().trim().to_string();
            if !title.is_empty() {
                return Some(title);
            }
        }
    }

    None
}

fn extract_main_content(document: &Html, char_threshold: usize) -> (String, String) {
    for selector_str in CANDIDATE_SELECTORS {
        if let Ok(selector) = Selector::parse(selector_str) {
            for element in document.select(&selector) {
                let text = element.text().collect::<String>();
                if has_enough_text(&text, char_threshold) {
                    let html = element.html();
                    return (text, html);
                }
            }
        }
    }

    // Last resort: the whole body, threshold checked by the caller.
    if let Ok(body_selector) = Selector::parse("body")
        && let Some(body) = document.select(&body_selector).next()
    {
        return (body.text().collect::<String>(), body.html());
    }

    (String::new(), String::new())
}
