//! Error types for the page behavior core.
//!
//! None of these reach a page visitor. Flows in [`crate::page`] log and
//! swallow them so visual feedback is never interrupted.

/// Failure writing text to the system clipboard.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard api unavailable")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
    #[error("legacy copy command failed: {0}")]
    FallbackFailed(String),
}

/// Failure parsing or validating a [`crate::config::PageConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
