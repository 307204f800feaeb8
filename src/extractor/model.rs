use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractMode {
    Markdown,
    Text,
}

impl std::str::FromStr for ExtractMode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" => Ok(Self::Markdown),
            "text" => Ok(Self::Text),
            other => Err(UnknownModeError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown extract mode {0:?}, expected \"markdown\" or \"text\"")]
pub struct UnknownModeError(String);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractRequest {
    pub html: String,
    pub url: String,
    pub mode: ExtractMode,
}

/// Successful extraction. Total failure is `None` at the orchestrator
/// boundary; there are no partial results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Knobs forwarded to the content-extraction collaborator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// Minimum character count for a region to qualify as main content.
    /// Zero means no threshold.
    pub char_threshold: usize,
}

/// Raw product of the content-extraction collaborator, consumed once.
#[derive(Debug)]
pub struct ReadabilityResult {
    pub title: String,
    pub text: String,
    pub html: String,
}
