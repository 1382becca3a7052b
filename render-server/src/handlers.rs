// API handlers

use axum::{
    body::Bytes,
    extract::{Json, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use plantuml_preview_core::{ErrorResponse, OutputFormat};
use serde_json::json;

use crate::app::AppState;
use crate::jar::RenderFailure;
use crate::models::{Diagnostics, RenderPayload, SimpleTestReport};

const SIMPLE_DIAGRAM: &str = "@startuml\nA -> B: Hello\nB -> A: Hi\n@enduml";

/// GET /health - Health check endpoint
pub async fn health() -> Response {
    let health_status = json!({
        "status": "healthy",
        "service": "plantuml-preview-render-server",
        "version": env!("CARGO_PKG_VERSION"),
    });

    (StatusCode::OK, Json(health_status)).into_response()
}

/// POST /render - Render PlantUML text to image bytes
#[tracing::instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn render(State(state): State<AppState>, body: Bytes) -> Response {
    let payload = match serde_json::from_slice::<RenderPayload>(&body) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!("Unreadable render request: {}", e);
            return missing_code();
        }
    };

    let Some(code) = payload.code.as_deref() else {
        tracing::warn!("Render request without code");
        return missing_code();
    };

    let format = payload.output_format();
    tracing::debug!(%format, chars = code.len(), "rendering");

    match state.jar.render(code, format).await {
        Ok(output) => {
            tracing::info!(
                "PlantUML render successful: {} bytes (exit code {:?})",
                output.bytes.len(),
                output.exit_code
            );
            image_response(format, output.bytes)
        }
        Err(e) => {
            tracing::error!("PlantUML render failed: {}", e);
            failure_response(e)
        }
    }
}

/// POST /test-simple - Render a fixed diagram to check the toolchain
pub async fn test_simple(State(state): State<AppState>) -> Response {
    let report = match state.jar.render(SIMPLE_DIAGRAM, OutputFormat::Svg).await {
        Ok(output) => SimpleTestReport {
            success: true,
            return_code: output.exit_code,
            stderr: output.stderr,
        },
        Err(RenderFailure::NoOutput { exit_code, stderr }) => SimpleTestReport {
            success: false,
            return_code: exit_code,
            stderr,
        },
        Err(e) => {
            tracing::error!("Simple render test failed: {}", e);
            return failure_response(e);
        }
    };

    (StatusCode::OK, Json(report)).into_response()
}

/// GET /test - Report java and plantuml.jar availability
pub async fn diagnostics(State(state): State<AppState>) -> Response {
    let java = state.jar.java_version().await;
    let java_available = java.as_ref().is_some_and(|out| out.success);
    let java_version = match &java {
        Some(out) if out.success => out.stderr.clone(),
        _ => "Not available".to_string(),
    };

    let plantuml_jar_exists = state.jar.jar_exists();
    let plantuml_version = if plantuml_jar_exists {
        match state.jar.plantuml_version().await {
            Some(out) if out.success => out.stdout,
            _ => "Unknown".to_string(),
        }
    } else {
        "Unknown".to_string()
    };

    let report = Diagnostics {
        status: "ok".to_string(),
        java_available,
        java_version,
        plantuml_jar_exists,
        plantuml_version,
        plantuml_jar_path: state.jar.absolute_jar_path().display().to_string(),
    };

    (StatusCode::OK, Json(report)).into_response()
}

fn missing_code() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new("Missing 'code' in request")),
    )
        .into_response()
}

fn image_response(format: OutputFormat, bytes: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, format.mime_type())],
        bytes,
    )
        .into_response()
}

fn failure_response(failure: RenderFailure) -> Response {
    let body = match failure {
        RenderFailure::NoOutput { exit_code, stderr } => {
            ErrorResponse::new("Unable to generate output file").with_details(format!(
                "exit code {}: {}",
                exit_code.map_or_else(|| "none".to_string(), |code| code.to_string()),
                stderr.trim()
            ))
        }
        other => ErrorResponse::new(format!("Server error: {}", other)),
    };

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
