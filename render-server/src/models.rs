// Request/response bodies of the render server

use plantuml_preview_core::OutputFormat;
use serde::{Deserialize, Serialize};

/// Body of POST /render.
///
/// Looser than `RenderRequest`: `format` is optional and unknown values are
/// rendered as PNG instead of being rejected.
#[derive(Debug, Deserialize)]
pub struct RenderPayload {
    pub code: Option<String>,
    pub format: Option<String>,
}

impl RenderPayload {
    pub fn output_format(&self) -> OutputFormat {
        output_format(self.format.as_deref())
    }
}

/// Missing format means SVG; anything that is not "svg" means PNG
pub fn output_format(format: Option<&str>) -> OutputFormat {
    match format {
        None => OutputFormat::Svg,
        Some(value) if value.trim().eq_ignore_ascii_case("svg") => OutputFormat::Svg,
        Some(_) => OutputFormat::Png,
    }
}

/// Result of POST /test-simple
#[derive(Debug, Serialize, Deserialize)]
pub struct SimpleTestReport {
    pub success: bool,
    pub return_code: Option<i32>,
    pub stderr: String,
}

/// Result of GET /test
#[derive(Debug, Serialize, Deserialize)]
pub struct Diagnostics {
    pub status: String,
    pub java_available: bool,
    pub java_version: String,
    pub plantuml_jar_exists: bool,
    pub plantuml_version: String,
    pub plantuml_jar_path: String,
}
