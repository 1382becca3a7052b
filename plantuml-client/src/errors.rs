// Client errors

/// Client errors
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("PlantUML server returned HTTP {0}")]
    ServerError(u16),

    #[error("encoding error: {0}")]
    EncodingError(String),
}
