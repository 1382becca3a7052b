// Core data models for PlantUML Preview

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rendering backend selected by the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// User-configured rendering server (POST JSON, image bytes back)
    #[default]
    Local,

    /// Public PlantUML service (GET with the encoded source in the path)
    Cloud,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Local => "local",
            Mode::Cloud => "cloud",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode: {0}")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Mode::Local),
            "cloud" => Ok(Mode::Cloud),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Image format for diagram output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Svg,
    Png,
}

impl OutputFormat {
    /// Path segment and file extension
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
        }
    }

    pub fn extension(&self) -> &'static str {
        self.as_str()
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "image/svg+xml",
            OutputFormat::Png => "image/png",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported output format: {0}")]
pub struct ParseFormatError(pub String);

impl FromStr for OutputFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "png" => Ok(OutputFormat::Png),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

/// Most recently rendered diagram, held for preview and download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    /// Format the diagram was requested in
    pub format: OutputFormat,

    /// Binary image data
    pub data: Vec<u8>,

    /// Generation timestamp (Unix timestamp)
    pub generated_at: i64,

    display_url: String,
}

impl RenderedArtifact {
    pub fn new(format: OutputFormat, data: Vec<u8>) -> Self {
        let display_url = to_data_url(format, &data);
        Self {
            format,
            data,
            generated_at: chrono::Utc::now().timestamp(),
            display_url,
        }
    }

    /// Data URL for the preview `<img src>`.
    ///
    /// The URL lives inside the artifact, so replacing or clearing the
    /// artifact releases it; nothing has to be revoked.
    pub fn display_url(&self) -> &str {
        &self.display_url
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

fn to_data_url(format: OutputFormat, data: &[u8]) -> String {
    use base64::Engine;
    let base64_data = base64::engine::general_purpose::STANDARD.encode(data);
    format!("data:{};base64,{}", format.mime_type(), base64_data)
}

/// File handed to the view when the user downloads the artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl DownloadFile {
    pub const BASE_NAME: &'static str = "plantuml-diagram";

    /// Name the file after the format currently selected in the UI,
    /// which may differ from the format the artifact was rendered in.
    pub fn for_artifact(artifact: &RenderedArtifact, selected: OutputFormat) -> Self {
        Self {
            file_name: format!("{}.{}", Self::BASE_NAME, selected.extension()),
            mime_type: selected.mime_type(),
            bytes: artifact.data.clone(),
        }
    }
}

/// Request body: POST <local server URL>
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderRequest {
    /// PlantUML source text
    pub code: String,

    /// Output image format
    pub format: OutputFormat,
}

/// Failure body returned by the local rendering server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Message shown to the user as-is
    pub error: String,

    /// Optional details (stderr and similar, for debugging)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
