// Router and shared state

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use crate::handlers;
use crate::jar::PlantUmlJar;

#[derive(Clone)]
pub struct AppState {
    pub jar: Arc<PlantUmlJar>,
}

impl AppState {
    pub fn new(jar: PlantUmlJar) -> Self {
        Self { jar: Arc::new(jar) }
    }
}

pub fn router(state: AppState) -> Router {
    // The preview page is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/render", post(handlers::render))
        .route("/test", get(handlers::diagnostics))
        .route("/test-simple", post(handlers::test_simple))
        .layer(RequestBodyLimitLayer::new(1024 * 1024)) // 1MB limit
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
