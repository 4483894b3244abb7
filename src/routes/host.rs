use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use iconpick_catalog::AssetFetcher;

use crate::state::AppState;

pub fn routes<F: AssetFetcher + 'static>() -> Router<AppState<F>> {
    Router::new()
        .route("/api/resize", post(resize::<F>))
        .route("/api/document", get(get_document::<F>))
}

#[derive(Debug, Deserialize)]
pub struct ResizeRequest {
    pub width: f64,
    pub height: f64,
}

/// POST /api/resize - Ask the host to resize the panel.
pub async fn resize<F: AssetFetcher + 'static>(
    State(state): State<AppState<F>>,
    Json(req): Json<ResizeRequest>,
) -> Response {
    match state.controller.resize(req.width, req.height).await {
        Ok(()) => StatusCode::ACCEPTED.into_response(),
        Err(e) => {
            tracing::error!("Failed to forward resize: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, e.to_string()).into_response()
        }
    }
}

/// GET /api/document - Snapshot of the headless host document.
pub async fn get_document<F: AssetFetcher + 'static>(
    State(state): State<AppState<F>>,
) -> Response {
    Json(state.document.snapshot()).into_response()
}
