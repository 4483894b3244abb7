use axum::{routing::get, Router};

use iconpick_catalog::AssetFetcher;

use crate::state::AppState;

pub fn routes<F: AssetFetcher + 'static>() -> Router<AppState<F>> {
    Router::new().route("/health", get(health))
}

async fn health() -> &'static str {
    "OK"
}
