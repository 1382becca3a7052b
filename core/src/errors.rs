// Error types surfaced by the preview controller

use crate::validation::ValidationError;

/// Message shown when the cloud service fails. The cloud collaborator gives
/// no structured detail, so syntax errors, outages and network failures all
/// look the same.
pub const CLOUD_FAILURE_MESSAGE: &str =
    "Cloud service could not generate the diagram. Please check syntax or network connection.";

/// Failures reported by a rendering collaborator
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// Local server answered with a non-success status.
    /// The message is already user-facing (server `error` field or status line).
    #[error("{0}")]
    Server(String),

    /// Local server could not be reached
    #[error("Generation failed: {0}")]
    Network(String),

    #[error("{}", CLOUD_FAILURE_MESSAGE)]
    CloudUnavailable,
}

/// Errors returned by controller actions.
///
/// `Display` is the exact text the view shows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreviewError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Please generate a diagram first")]
    NoArtifact,
}
