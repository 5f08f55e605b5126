//! HTTP surface: router and the export handler.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;

use mdx_export::ExportOptions;

use crate::error::{ApiError, ErrorResponse};
use crate::settings::Settings;

pub fn router(settings: Settings) -> axum::Router {
    axum::Router::new()
        .route("/api/export", get(export_handler))
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(settings))
}

/// GET /api/export — walk the content tree and return it as one text body.
async fn export_handler(
    State(settings): State<Arc<Settings>>,
) -> Result<impl IntoResponse, ApiError> {
    let roots = settings.content_roots.clone();
    // The walk is synchronous std::fs; keep it off the async workers.
    let stream = tokio::task::spawn_blocking(move || {
        mdx_export::export(&roots, &ExportOptions::default())
    })
    .await
    .map_err(|err| ApiError::from(anyhow::Error::from(err)))??;

    let body = if stream.is_empty() {
        "No content found".to_owned()
    } else {
        stream
    };
    Ok(body)
}

async fn method_not_allowed() -> impl IntoResponse {
    let body = ErrorResponse {
        message: "Method not allowed".to_owned(),
        error: None,
    };
    (StatusCode::METHOD_NOT_ALLOWED, Json(body))
}
