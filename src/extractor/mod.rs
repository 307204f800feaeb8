pub mod cleaner;
pub mod errors;
pub mod model;
pub mod reader;

#[cfg(test)]
mod tests;

pub use errors::ExtractError;
pub use model::{ExtractMode, ExtractOptions, ExtractRequest, Extraction};

use tokio::task;
use tracing::{debug, instrument};
use url::Url;

use crate::markdown::render;
use crate::text::normalize_whitespace;

/// Extract readable content from a fetched document.
///
/// Best effort: any failure along the way (unparseable document, no main
/// content, a panicking collaborator) collapses to `None`. This never
/// panics outward and never returns partial results.
#[instrument(skip(request), fields(url = %request.url, mode = ?request.mode))]
pub async fn extract(request: &ExtractRequest) -> Option<Extraction> {
    extract_with_options(request, ExtractOptions::default()).await
}

pub async fn extract_with_options(
    request: &ExtractRequest,
    options: ExtractOptions,
) -> Option<Extraction> {
    match try_extract(request, options).await {
        Ok(extraction) => Some(extraction),
        Err(err) => {
            debug!(url = %request.url, "extraction failed: {err}");
            None
        }
    }
}

async fn try_extract(
    request: &ExtractRequest,
    options: ExtractOptions,
) -> Result<Extraction, ExtractError> {
    // Base URL is best effort: without one, relative links stay relative.
    let base_url = Url::parse(&request.url).ok();

    // Parsing and content extraction are synchronous and CPU-bound; run them
    // off the async runtime. A panic in the collaborator surfaces as a join
    // error, not a crash.
    let html = request.html.clone();
    let reader_base = base_url.clone();
    let result = task::spawn_blocking(move || reader::extract(&html, reader_base.as_ref(), options))
        .await
        .map_err(|err| ExtractError::Task(err.to_string()))??;

    let title = non_empty(normalize_whitespace(&result.title));

    match request.mode {
        ExtractMode::Text => Ok(Extraction {
            text: normalize_whitespace(&result.text),
            title,
        }),
        ExtractMode::Markdown => {
            let fragment = match &base_url {
                Some(base) => cleaner::resolve_links(&result.html, base),
                None => result.html,
            };
            let rendered = render::html_to_markdown(&fragment);
            Ok(Extraction {
                text: rendered.text,
                title: title.or(rendered.title),
            })
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
