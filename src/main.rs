use std::sync::Arc;

use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use iconpick::{create_router, AppState, Config, PickerController};
use iconpick_catalog::{
    AssetLoader, CatalogLoader, HttpAssetFetcher, HttpClient, MaterialRegistrySource,
    PulsManifestSource,
};
use iconpick_core::PickerState;
use iconpick_host::{HeadlessDocument, HostBridge};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Optional: ICONPICK_LISTEN_ADDR (default: 127.0.0.1:3000)");
            eprintln!("Optional: ICONPICK_PAGE_SIZE (default: 60)");
            eprintln!("Optional: ICONPICK_SEARCH_DEBOUNCE_MS (default: 200)");
            eprintln!("Optional: ICONPICK_FETCH_TIMEOUT_SECS (default: 15, 0 disables)");
            std::process::exit(1);
        }
    };

    tracing::info!("Starting iconpick panel");
    tracing::info!("Listen address: {}", config.listen_addr);
    tracing::info!("Material metadata: {}", config.material_metadata_url);
    tracing::info!("Puls manifest: {}", config.puls_manifest_url);

    let http = match HttpClient::new(config.fetch_timeout) {
        Ok(http) => http,
        Err(e) => {
            eprintln!("HTTP client error: {}", e);
            std::process::exit(1);
        }
    };

    // Host side
    let document = Arc::new(HeadlessDocument::new());
    let (tx, rx) = mpsc::channel(32);
    tokio::spawn(HostBridge::new(Arc::clone(&document)).run(rx));

    // Picker side
    let controller = Arc::new(PickerController::new(
        PickerState::new(config.asset_urls(), config.page_size),
        AssetLoader::new(HttpAssetFetcher::new(http.clone())),
        tx,
        config.search_debounce,
    ));

    let loader = CatalogLoader::new(
        MaterialRegistrySource::new(http.clone(), &config.material_metadata_url),
        PulsManifestSource::new(http, &config.puls_manifest_url),
    );
    let catalog_controller = Arc::clone(&controller);
    tokio::spawn(async move {
        let stats = catalog_controller.load_catalog(&loader).await;
        tracing::info!(
            "Catalog loaded: {} Material, {} Puls, {} source(s) failed",
            stats.material_icons,
            stats.puls_icons,
            stats.sources_failed
        );
    });

    let app = create_router(AppState::new(controller, document));

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server running at http://{}", config.listen_addr);

    axum::serve(listener, app).await.expect("Server error");
}
