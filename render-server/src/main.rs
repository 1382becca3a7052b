// Local PlantUML rendering server
//
// Accepts `{code, format}` JSON on POST /render and answers with the image
// produced by plantuml.jar. The preview page uses it in local mode.

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod config;
mod handlers;
mod jar;
mod models;

use app::AppState;
use config::ServerConfig;
use jar::PlantUmlJar;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;
    let _log_guard = init_tracing(&config);

    let jar = PlantUmlJar::new(config.java_bin.clone(), config.jar_path.clone());
    if !jar.jar_exists() {
        tracing::warn!(
            "plantuml.jar not found at {}; /render will fail until it is installed",
            jar.jar_path().display()
        );
    }

    let app = app::router(AppState::new(jar));

    tracing::info!("Starting render server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

/// Console logging, plus daily rolling files when a log directory is set.
/// The returned guard flushes the file writer on drop.
fn init_tracing(config: &ServerConfig) -> Option<WorkerGuard> {
    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "render-server.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,render_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .init();

    guard
}
