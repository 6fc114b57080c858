//! # HTTP Surface
//!
//! Exposes a [`TemplateProvider`] over HTTP:
//!
//! - `GET /api/templates` - the stored document as-is, or `400 {"message": ...}` on any failure
//! - `GET /health`        - liveness
//! - `GET /imagesList/*`  - static image assets, when a public directory is configured
//!
//! The provider is asked on every request; nothing is cached. The document is
//! validated before it is sent but never re-encoded, so unknown fields and
//! number spellings reach the client untouched.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;

use crate::catalog::{ASSET_ROOT, CatalogError, TemplateProvider, parse_collection};
use crate::catalog::providers::http::TEMPLATES_PATH;

/// Body text for a failed templates load. The cause is only logged.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading templates";

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn TemplateProvider>,
    /// Root of the static asset tree (`<dir>/thumbnails`, `<dir>/large`, icons).
    pub public_dir: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// The stored document, once it has been checked to be a templates collection.
async fn load_document(provider: &dyn TemplateProvider) -> Result<String, CatalogError> {
    let document = provider.get_document().await?;
    let templates = parse_collection(&document)?;
    debug!("Serving {} templates", templates.len());
    Ok(document)
}

pub async fn get_templates(State(state): State<AppState>) -> Response {
    match load_document(state.provider.as_ref()).await {
        Ok(document) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            document,
        )
            .into_response(),
        Err(e) => {
            warn!("GET {} failed ({}): {}", TEMPLATES_PATH, state.provider.name(), e);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    message: LOAD_ERROR_MESSAGE.to_string(),
                }),
            )
                .into_response()
        }
    }
}

pub fn router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(health))
        .route(TEMPLATES_PATH, get(get_templates));

    // Serve image assets from public_dir if configured
    if let Some(ref public_dir) = state.public_dir {
        info!("Serving {} from: {}", ASSET_ROOT, public_dir.display());
        router = router.nest_service(ASSET_ROOT, ServeDir::new(public_dir));
    }

    router.with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(state: AppState, addr: std::net::SocketAddr) -> std::io::Result<()> {
    let has_assets = state.public_dir.is_some();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", listener.local_addr()?);
    info!("Endpoints:");
    info!("  GET  /health            - Health check");
    info!("  GET  {}     - Template collection", TEMPLATES_PATH);
    if has_assets {
        info!("  GET  {}/*        - Static image assets", ASSET_ROOT);
    }

    axum::serve(listener, router(state)).await
}
