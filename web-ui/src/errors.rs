// Web UI error types

/// Web UI specific errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// Browser API needed for the download is missing or failed
    DownloadError(String),
}

impl std::fmt::Display for UiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UiError::DownloadError(msg) => write!(f, "Download failed: {}", msg),
        }
    }
}

impl std::error::Error for UiError {}
