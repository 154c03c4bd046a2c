//! HTTP server for ai-readiness

use super::routes;
use super::state::AppState;
use axum::Router;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Listener and asset settings
#[derive(Debug, Clone)]
pub struct ServerOptions {
    pub bind_address: String,
    pub static_dir: PathBuf,
}

/// Build the router: API routes, `/` → `index.html`, `/static/*` → assets
pub fn router(state: AppState, static_dir: impl Into<PathBuf>) -> Router {
    let static_dir = static_dir.into();
    let state = Arc::new(state);

    Router::new()
        .merge(routes::survey_routes())
        .merge(routes::health_routes())
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(&static_dir))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until Ctrl-C
pub async fn serve(state: AppState, options: ServerOptions) -> io::Result<()> {
    if !options.static_dir.is_dir() {
        warn!(
            "Static directory {} not found; only the API will be served",
            options.static_dir.display()
        );
    }

    let app = router(state, options.static_dir);

    let listener = tokio::net::TcpListener::bind(&options.bind_address).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Cannot listen for Ctrl-C ({}); running until killed", e);
            std::future::pending::<()>().await;
        }
    }
}
