// Render client errors

use plantuml_preview_core::RenderError;

/// Render client error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server could not be reached or the body could not be read
    NetworkError(String),
    /// Server answered with a non-success status; the message is user-facing
    ServerError(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NetworkError(msg) => write!(f, "network error: {}", msg),
            ApiError::ServerError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for RenderError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::NetworkError(msg) => RenderError::Network(msg),
            ApiError::ServerError(msg) => RenderError::Server(msg),
        }
    }
}
