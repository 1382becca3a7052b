// PlantUML HTTP client

use crate::errors::ClientError;
use plantuml_encoding::encode_plantuml_deflate;
use plantuml_preview_core::OutputFormat;

/// Build `{base_url}/{format}/{encoded}` for a diagram.
///
/// The text is deflated and written in PlantUML's base64 alphabet, the
/// same encoding the PlantUML server expects in its URL path.
pub fn diagram_url(
    base_url: &str,
    plantuml_text: &str,
    format: OutputFormat,
) -> Result<String, ClientError> {
    let encoded = encode_plantuml_deflate(plantuml_text)
        .map_err(|e| ClientError::EncodingError(format!("{:?}", e)))?;

    Ok(format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        format.as_str(),
        encoded
    ))
}

/// PlantUML client for converting text to diagrams
#[derive(Debug, Clone)]
pub struct PlantUmlClient {
    client: reqwest::Client,
    base_url: String,
}

impl PlantUmlClient {
    /// Create a new PlantUML client
    ///
    /// # Arguments
    /// * `base_url` - PlantUML server URL (e.g., "https://www.plantuml.com/plantuml")
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let builder = reqwest::Client::builder();

        // Browser fetch has no client-level timeout or proxy settings
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .timeout(std::time::Duration::from_secs(30))
            .no_proxy();

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL the server renders `plantuml_text` at
    pub fn diagram_url(
        &self,
        plantuml_text: &str,
        format: OutputFormat,
    ) -> Result<String, ClientError> {
        diagram_url(&self.base_url, plantuml_text, format)
    }

    /// Fetch the rendered image bytes
    ///
    /// Note: the PlantUML server answers syntax errors with HTTP 400 and an
    /// error image; any non-success status is reported as `ServerError`.
    pub async fn render(
        &self,
        plantuml_text: &str,
        format: OutputFormat,
    ) -> Result<Vec<u8>, ClientError> {
        let url = self.diagram_url(plantuml_text, format)?;
        tracing::debug!(%url, "requesting diagram");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::ServerError(status.as_u16()));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PlantUmlClient::new("https://www.plantuml.com/plantuml");
        assert!(client.is_ok());
    }

    #[test]
    fn test_diagram_url_shape() {
        let url = diagram_url(
            "https://www.plantuml.com/plantuml/",
            "@startuml\nAlice -> Bob: Hello\n@enduml",
            OutputFormat::Svg,
        )
        .unwrap();

        let encoded = url
            .strip_prefix("https://www.plantuml.com/plantuml/svg/")
            .expect("unexpected prefix");
        assert!(!encoded.is_empty());
        assert!(!encoded.contains('/'));
        assert!(encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_diagram_url_is_deterministic() {
        let text = "@startuml\nA -> B\n@enduml";
        let png = diagram_url("http://localhost:8080", text, OutputFormat::Png).unwrap();
        let again = diagram_url("http://localhost:8080", text, OutputFormat::Png).unwrap();

        assert_eq!(png, again);
        assert!(png.starts_with("http://localhost:8080/png/"));
    }
}
