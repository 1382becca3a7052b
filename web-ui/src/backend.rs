// HTTP collaborators behind the controller

use plantuml_client::{ClientError, PlantUmlClient};
use plantuml_preview_core::{DiagramBackend, OutputFormat, RenderError};
use plantuml_preview_render_client::render_diagram;

/// Cloud service through `plantuml-client`, local server through
/// `plantuml-preview-render-client`
#[derive(Debug, Clone)]
pub struct HttpBackend {
    cloud_base_url: String,
}

impl HttpBackend {
    pub fn new(cloud_base_url: impl Into<String>) -> Self {
        Self {
            cloud_base_url: cloud_base_url.into(),
        }
    }
}

impl DiagramBackend for HttpBackend {
    async fn fetch_cloud(
        &self,
        source: &str,
        format: OutputFormat,
    ) -> Result<Vec<u8>, RenderError> {
        let client = PlantUmlClient::new(self.cloud_base_url.clone()).map_err(cloud_failure)?;
        client.render(source, format).await.map_err(cloud_failure)
    }

    async fn post_local(
        &self,
        server_url: &str,
        source: &str,
        format: OutputFormat,
    ) -> Result<Vec<u8>, RenderError> {
        render_diagram(server_url, source.to_string(), format)
            .await
            .map_err(RenderError::from)
    }
}

// The cloud service gives no usable detail; keep it in the log only
fn cloud_failure(error: ClientError) -> RenderError {
    tracing::warn!("cloud render failed: {}", error);
    RenderError::CloudUnavailable
}
