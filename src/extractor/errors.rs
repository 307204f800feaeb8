use thiserror::Error;

/// Internal failure taxonomy. The orchestrator collapses every variant to
/// `None`; callers never see these as thrown errors.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("no readable content found")]
    NoContent,

    #[error("extraction task failed: {0}")]
    Task(String),
}
