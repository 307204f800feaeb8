use std::fs;

use crate::extractor::{
    ExtractMode, ExtractOptions, ExtractRequest, extract, extract_with_options,
};

fn request(html: impl Into<String>, url: &str, mode: ExtractMode) -> ExtractRequest {
    ExtractRequest {
        html: html.into(),
        url: url.to_string(),
        mode,
    }
}

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("failed to read test fixture")
}

#[tokio::test]
async fn markdown_mode_extracts_article() {
    let html = fixture("article.html");
    let result = extract(&request(html, "https://example.com/article", ExtractMode::Markdown)).await;

    let extraction = result.expect("article should extract");
    let title = extraction.title.expect("article should carry a title");
    assert!(title.contains("Sample Article"));

    assert!(extraction.text.contains("first paragraph"));
    assert!(extraction.text.contains("related article"));
    // No markup survives the render.
    assert!(!extraction.text.contains("<p>"));
    assert!(!extraction.text.contains("</"));
}

#[tokio::test]
async fn text_mode_is_normalized() {
    let html = fixture("article.html");
    let result = extract(&request(html, "https://example.com/article", ExtractMode::Text)).await;

    let extraction = result.expect("article should extract");
    assert!(extraction.text.contains("first paragraph"));

    assert!(!extraction.text.contains('\r'));
    assert!(!extraction.text.contains("\n\n\n"));
    assert!(!extraction.text.contains("  "));
    assert_eq!(extraction.text, extraction.text.trim());
}

#[tokio::test]
async fn empty_page_yields_absent() {
    let html = fixture("empty.html");
    let result = extract(&request(html, "https://example.com/empty", ExtractMode::Markdown)).await;
    assert!(result.is_none());
}

#[tokio::test]
async fn unparseable_url_degrades_but_extracts() {
    let html = fixture("article.html");
    let result = extract(&request(html, "not a url at all", ExtractMode::Markdown)).await;

    let extraction = result.expect("bad base url must not abort extraction");
    assert!(extraction.text.contains("first paragraph"));
}

#[tokio::test]
async fn char_threshold_can_reject_everything() {
    let html = fixture("article.html");
    let options = ExtractOptions {
        char_threshold: 1_000_000,
    };
    let result = extract_with_options(
        &request(html, "https://example.com/article", ExtractMode::Markdown),
        options,
    )
    .await;
    assert!(result.is_none());
}

#[tokio::test]
async fn malformed_html_is_handled_gracefully() {
    let html = "<html><head><title>Broken</title><body><p>Unclosed tags<div>More content";
    let result = extract(&request(html, "https://example.com/broken", ExtractMode::Text)).await;

    // Best effort: extraction may or may not find content, but never panics.
    if let Some(extraction) = result {
        assert!(extraction.text.contains("Unclosed tags"));
    }
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    use crate::markdown::{html_to_markdown, markdown_to_text};
    use crate::text::{normalize_whitespace, truncate_text};

    proptest! {
        #[test]
        fn extract_never_panics(
            html in ".*",
            url in "https://[a-z]+\\.com/.*"
        ) {
            let rt = tokio::runtime::Runtime::new().unwrap();
            let _ = rt.block_on(extract(&request(html, &url, ExtractMode::Markdown)));
        }

        #[test]
        fn conversion_never_panics(html in ".*") {
            let rendered = html_to_markdown(&html);
            let _ = markdown_to_text(&rendered.text);
        }

        #[test]
        fn normalizer_is_idempotent(input in ".*") {
            let once = normalize_whitespace(&input);
            prop_assert_eq!(normalize_whitespace(&once), once);
        }

        #[test]
        fn truncation_respects_budget(input in ".*", max in 0usize..64) {
            let result = truncate_text(&input, max);
            prop_assert!(result.text.chars().count() <= max);
            prop_assert_eq!(result.truncated, input.chars().count() > max);
        }
    }
}
