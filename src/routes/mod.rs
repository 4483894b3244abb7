pub mod health;
pub mod host;
pub mod panel;

use axum::Router;
use tower_http::cors::CorsLayer;

use iconpick_catalog::AssetFetcher;

use crate::state::AppState;

pub fn create_router<F: AssetFetcher + 'static>(state: AppState<F>) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(panel::routes())
        .merge(host::routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
