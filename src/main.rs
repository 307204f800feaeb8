use std::env;
use std::fs;
use std::io::{self, Read};

use anyhow::Result;
use gist::config::Config;
use gist::extractor::{self, ExtractRequest};
use gist::text::truncate_text;

/// Extract readable content from an HTML file (or stdin) and print it as
/// JSON. Mode, character budget and content threshold come from the
/// environment; see `config` for the variable names.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;

    let mut args = env::args().skip(1);
    let (Some(path), Some(url)) = (args.next(), args.next()) else {
        anyhow::bail!("usage: gist <html-file|-> <url>");
    };

    let html = if path == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(&path)?
    };

    let request = ExtractRequest {
        html,
        url,
        mode: config.extract_mode(),
    };

    let Some(extraction) =
        extractor::extract_with_options(&request, config.extract_options()).await
    else {
        anyhow::bail!("no readable content extracted");
    };

    let bounded = truncate_text(&extraction.text, config.max_chars());
    let output = serde_json::json!({
        "title": extraction.title,
        "text": bounded.text,
        "truncated": bounded.truncated,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
