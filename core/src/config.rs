// Preview configuration

use crate::models::{Mode, OutputFormat};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CLOUD_BASE_URL: &str = "https://www.plantuml.com/plantuml";
pub const DEFAULT_LOCAL_SERVER_URL: &str = "http://localhost:5000/render";

/// Startup settings for the preview widget.
///
/// Every field has a default, so a partial JSON object is enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Base of the cloud service; `{format}/{encoded}` is appended
    pub cloud_base_url: String,

    /// Pre-filled value of the server URL field in local mode
    pub local_server_url: String,

    pub mode: Mode,

    pub format: OutputFormat,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            cloud_base_url: DEFAULT_CLOUD_BASE_URL.to_string(),
            local_server_url: DEFAULT_LOCAL_SERVER_URL.to_string(),
            mode: Mode::default(),
            format: OutputFormat::default(),
        }
    }
}

impl PreviewConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
