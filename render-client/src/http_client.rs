// HTTP client for a local PlantUML rendering server

use crate::errors::ApiError;
use plantuml_preview_core::{OutputFormat, RenderRequest};

/// Used when the error body is JSON but carries no usable `error` field
const DEFAULT_SERVER_ERROR: &str = "Server error";

/// Render PlantUML text through the local rendering server
///
/// # Arguments
/// * `server_url` - Full endpoint URL typed by the user (e.g. "http://localhost:5000/render")
/// * `code` - PlantUML source code
/// * `format` - Output image format (SVG or PNG)
///
/// # Returns
/// Raw image bytes on success
pub async fn render_diagram(
    server_url: &str,
    code: String,
    format: OutputFormat,
) -> Result<Vec<u8>, ApiError> {
    let request = RenderRequest { code, format };

    let client = reqwest::Client::new();
    let response = client
        .post(server_url)
        .json(&request)
        .send()
        .await
        .map_err(|e| ApiError::NetworkError(e.to_string()))?;

    if !response.status().is_success() {
        let message = error_message(response).await;
        tracing::warn!("render server rejected request: {}", message);
        return Err(ApiError::ServerError(message));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::NetworkError(e.to_string()))?;

    Ok(bytes.to_vec())
}

/// Message for a non-success response.
///
/// A JSON body yields its `error` field; a `null` or unparsable body falls
/// back to the status line.
async fn error_message(response: reqwest::Response) -> String {
    let status = response.status();
    // reqwest does not surface the reason phrase sent on the wire, so a
    // custom phrase such as "500 Render Failed" reads as the canonical one
    let status_line = format!(
        "HTTP {}: {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown Status")
    );

    let body = match response.bytes().await {
        Ok(body) => body,
        Err(_) => return status_line,
    };

    match serde_json::from_slice::<serde_json::Value>(&body) {
        Ok(serde_json::Value::Null) | Err(_) => status_line,
        Ok(json) => json
            .get("error")
            .and_then(serde_json::Value::as_str)
            .filter(|msg| !msg.is_empty())
            .unwrap_or(DEFAULT_SERVER_ERROR)
            .to_string(),
    }
}
