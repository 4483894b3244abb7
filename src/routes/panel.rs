use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use iconpick_catalog::AssetFetcher;
use iconpick_core::{MaterialStyle, PickerError, SourceFilter, StyleOptions};

use crate::error::PanelError;
use crate::state::AppState;

pub fn routes<F: AssetFetcher + 'static>() -> Router<AppState<F>> {
    Router::new()
        .route("/api/view", get(get_view::<F>))
        .route("/api/search", post(search::<F>))
        .route("/api/tab", post(select_tab::<F>))
        .route("/api/style", post(set_style::<F>))
        .route("/api/sentinel", post(sentinel::<F>))
        .route("/api/cells/{position}/visible", post(cell_visible::<F>))
        .route("/api/cells/{position}/select", post(select_cell::<F>))
        .route("/api/cells/{position}/activate", post(activate_cell::<F>))
        .route("/api/insert", post(insert::<F>))
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct TabRequest {
    pub source: SourceFilter,
}

#[derive(Debug, Deserialize)]
pub struct StyleRequest {
    #[serde(default)]
    pub style: MaterialStyle,
    #[serde(default)]
    pub filled: bool,
}

/// Map a panel failure onto an HTTP status.
fn error_response(e: PanelError) -> Response {
    let status = match &e {
        PanelError::Picker(PickerError::UnknownCell(_)) => StatusCode::NOT_FOUND,
        PanelError::Picker(PickerError::NoSelection) => StatusCode::CONFLICT,
        PanelError::Asset(_) => StatusCode::BAD_GATEWAY,
        PanelError::HostUnavailable => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status, e.to_string()).into_response()
}

/// GET /api/view - Current panel snapshot.
pub async fn get_view<F: AssetFetcher + 'static>(State(state): State<AppState<F>>) -> Response {
    Json(state.controller.view().await).into_response()
}

/// POST /api/search - A keystroke in the search box.
///
/// The filter is applied once typing pauses, so this only acknowledges.
pub async fn search<F: AssetFetcher + 'static>(
    State(state): State<AppState<F>>,
    Json(req): Json<SearchRequest>,
) -> Response {
    state.controller.search_input(req.query).await;
    StatusCode::ACCEPTED.into_response()
}

/// POST /api/tab - Source tab click.
pub async fn select_tab<F: AssetFetcher + 'static>(
    State(state): State<AppState<F>>,
    Json(req): Json<TabRequest>,
) -> Response {
    Json(state.controller.select_tab(req.source).await).into_response()
}

/// POST /api/style - Style or fill toggle.
pub async fn set_style<F: AssetFetcher + 'static>(
    State(state): State<AppState<F>>,
    Json(req): Json<StyleRequest>,
) -> Response {
    let style = StyleOptions::new(req.style, req.filled);
    Json(state.controller.set_style(style).await).into_response()
}

/// POST /api/sentinel - The end of the grid scrolled into view.
pub async fn sentinel<F: AssetFetcher + 'static>(State(state): State<AppState<F>>) -> Response {
    let added = state.controller.sentinel_visible().await;
    tracing::debug!("Sentinel visible, {} cells added", added);
    Json(state.controller.view().await).into_response()
}

/// POST /api/cells/{position}/visible - A cell came near the viewport.
pub async fn cell_visible<F: AssetFetcher + 'static>(
    State(state): State<AppState<F>>,
    Path(position): Path<usize>,
) -> Response {
    match state.controller.cell_visible(position).await {
        Ok(loaded) => Json(serde_json::json!({ "loaded": loaded })).into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /api/cells/{position}/select - Single click on a cell.
pub async fn select_cell<F: AssetFetcher + 'static>(
    State(state): State<AppState<F>>,
    Path(position): Path<usize>,
) -> Response {
    match state.controller.select(position).await {
        Ok(selection) => Json(selection).into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /api/cells/{position}/activate - Double click: select and insert.
pub async fn activate_cell<F: AssetFetcher + 'static>(
    State(state): State<AppState<F>>,
    Path(position): Path<usize>,
) -> Response {
    match state.controller.activate(position).await {
        Ok(()) => StatusCode::ACCEPTED.into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /api/insert - Insert button in the action bar.
pub async fn insert<F: AssetFetcher + 'static>(State(state): State<AppState<F>>) -> Response {
    match state.controller.insert_selected().await {
        Ok(()) => StatusCode::ACCEPTED.into_response(),
        Err(e) => error_response(e),
    }
}
