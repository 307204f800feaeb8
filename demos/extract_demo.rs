use anyhow::Result;
use gist::extractor::{self, ExtractMode, ExtractRequest};
use gist::markdown::markdown_to_text;
use gist::text::truncate_text;

/// Demo program that walks an inline document through the whole pipeline:
/// extraction, markdown rendering, plain-text downgrade and truncation.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let html = r#"<!DOCTYPE html>
<html>
<head><title>Pipelines in Practice - Example Blog</title></head>
<body>
  <nav><a href="/">Home</a></nav>
  <article>
    <h1>Pipelines in Practice</h1>
    <p>Readable-content extraction is a chain of small, ordered rewrites.
    Each stage consumes the output of the previous one, which keeps the
    whole transform deterministic and easy to reason about.</p>
    <h2>Why ordering matters</h2>
    <p>Links and headings must be converted before generic tag stripping,
    otherwise their structure is lost. Details in the
    <a href="/docs/pipeline">pipeline notes</a>.</p>
  </article>
</body>
</html>"#;

    let request = ExtractRequest {
        html: html.to_string(),
        url: "https://blog.example.com/pipelines".to_string(),
        mode: ExtractMode::Markdown,
    };

    let Some(extraction) = extractor::extract(&request).await else {
        anyhow::bail!("no readable content extracted");
    };

    println!("title: {:?}", extraction.title);
    println!("--- markdown ---\n{}\n", extraction.text);

    let plain = markdown_to_text(&extraction.text);
    println!("--- plain text ---\n{plain}\n");

    let bounded = truncate_text(&plain, 280);
    println!(
        "--- first 280 chars (truncated: {}) ---\n{}",
        bounded.truncated, bounded.text
    );

    Ok(())
}
