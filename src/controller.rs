use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use iconpick_catalog::{AssetFetcher, AssetLoader, CatalogLoader, CatalogSource, LoadStats};
use iconpick_core::{Debouncer, IconMeta, PickerState, PluginMessage, SourceFilter, StyleOptions};

use crate::error::PanelError;
use crate::view::{PanelView, SelectionView};

/// Pending search input and the timer that will flush it.
struct SearchInput {
    debouncer: Debouncer<String>,
    timer: Option<JoinHandle<()>>,
}

/// Drives `PickerState` from UI events: performs fetches, debounces search
/// input and sends insert requests to the host bridge.
pub struct PickerController<F: AssetFetcher> {
    state: Mutex<PickerState>,
    assets: AssetLoader<F>,
    outbox: mpsc::Sender<PluginMessage>,
    search: Mutex<SearchInput>,
}

impl<F: AssetFetcher + 'static> PickerController<F> {
    pub fn new(
        state: PickerState,
        assets: AssetLoader<F>,
        outbox: mpsc::Sender<PluginMessage>,
        search_debounce: Duration,
    ) -> Self {
        Self {
            state: Mutex::new(state),
            assets,
            outbox,
            search: Mutex::new(SearchInput {
                debouncer: Debouncer::new(search_debounce),
                timer: None,
            }),
        }
    }

    pub fn assets(&self) -> &AssetLoader<F> {
        &self.assets
    }

    /// Fetch both catalogs and install the result.
    pub async fn load_catalog<M, P>(&self, loader: &CatalogLoader<M, P>) -> LoadStats
    where
        M: CatalogSource,
        P: CatalogSource,
    {
        let loaded = loader.load().await;
        self.install_catalog(loaded.icons).await;
        loaded.stats
    }

    pub async fn install_catalog(&self, icons: Vec<IconMeta>) {
        self.state.lock().await.install_catalog(icons);
    }

    pub async fn view(&self) -> PanelView {
        PanelView::from(&*self.state.lock().await)
    }

    /// A keystroke in the search box. The filter is recomputed once input
    /// has been quiet for the debounce window.
    pub async fn search_input(self: &Arc<Self>, raw: impl Into<String>) {
        let mut search = self.search.lock().await;
        search.debouncer.push(raw.into(), Instant::now().into_std());

        if let Some(timer) = search.timer.take() {
            timer.abort();
        }

        let window = search.debouncer.window();
        let controller = Arc::clone(self);
        search.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            controller.flush_search().await;
        }));
    }

    /// Apply pending search input if its quiet period has passed.
    /// Returns true if the filter was recomputed.
    pub async fn flush_search(&self) -> bool {
        let query = {
            let mut search = self.search.lock().await;
            search.debouncer.take_due(Instant::now().into_std())
        };

        match query {
            Some(query) => {
                tracing::debug!("Search query: {:?}", query);
                self.state.lock().await.set_query(&query);
                true
            }
            None => false,
        }
    }

    pub async fn select_tab(&self, source: SourceFilter) -> PanelView {
        let mut state = self.state.lock().await;
        state.set_source(source);
        PanelView::from(&*state)
    }

    pub async fn set_style(&self, style: StyleOptions) -> PanelView {
        let mut state = self.state.lock().await;
        state.set_style(style);
        PanelView::from(&*state)
    }

    /// The scroll sentinel became visible. Returns the number of cells added.
    pub async fn sentinel_visible(&self) -> usize {
        self.state.lock().await.sentinel_visible()
    }

    /// A cell came near the viewport. Loads its preview the first time only.
    /// Returns true if a preview was filled in.
    pub async fn cell_visible(&self, position: usize) -> Result<bool, PanelError> {
        let request = self.state.lock().await.cell_visible(position)?;
        let Some(request) = request else {
            return Ok(false);
        };

        match self.assets.load(&request.url).await {
            Ok(svg) => Ok(self.state.lock().await.fill_preview(&request, svg)),
            Err(e) => {
                tracing::debug!("Preview {} failed: {}", request.url, e);
                Ok(false)
            }
        }
    }

    pub async fn select(&self, position: usize) -> Result<SelectionView, PanelError> {
        let mut state = self.state.lock().await;
        let icon = state.select(position)?;
        Ok(SelectionView::new(position, icon))
    }

    /// Send the selected icon to the host.
    pub async fn insert_selected(&self) -> Result<(), PanelError> {
        let (icon, url) = self.state.lock().await.selected_asset()?;
        self.insert(icon, &url).await
    }

    /// Double-click: select, then insert.
    pub async fn activate(&self, position: usize) -> Result<(), PanelError> {
        let (icon, url) = {
            let mut state = self.state.lock().await;
            let icon = state.select(position)?.clone();
            let url = state.asset_url(&icon);
            (icon, url)
        };
        self.insert(icon, &url).await
    }

    async fn insert(&self, icon: IconMeta, url: &str) -> Result<(), PanelError> {
        let svg = self.assets.load(url).await.map_err(|e| {
            tracing::error!("Failed to fetch SVG for {}: {}", icon.name, e);
            PanelError::Asset(e)
        })?;

        self.send(PluginMessage::insert_icon(&*svg, icon.name)).await
    }

    pub async fn resize(&self, width: f64, height: f64) -> Result<(), PanelError> {
        self.send(PluginMessage::Resize { width, height }).await
    }

    async fn send(&self, msg: PluginMessage) -> Result<(), PanelError> {
        self.outbox
            .send(msg)
            .await
            .map_err(|_| PanelError::HostUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iconpick_catalog::{FailingSource, FetchError, MockAssetFetcher, StaticSource};
    use iconpick_core::{AssetUrls, IconSource, MaterialStyle, PickerError};

    use crate::view::PanelStatus;

    const HOME_URL: &str = "https://m.test/outlined/home.svg";
    const LOGO_URL: &str = "https://p.test/logo.svg";

    fn controller(
        fetcher: MockAssetFetcher,
    ) -> (
        Arc<PickerController<MockAssetFetcher>>,
        mpsc::Receiver<PluginMessage>,
    ) {
        let (tx, rx) = mpsc::channel(8);
        let state = PickerState::new(AssetUrls::new("https://m.test/", "https://p.test/"), 60);
        let controller = PickerController::new(
            state,
            AssetLoader::new(fetcher),
            tx,
            Duration::from_millis(200),
        );
        (Arc::new(controller), rx)
    }

    async fn loaded(
        fetcher: MockAssetFetcher,
    ) -> (
        Arc<PickerController<MockAssetFetcher>>,
        mpsc::Receiver<PluginMessage>,
    ) {
        let (controller, rx) = controller(fetcher);
        controller
            .install_catalog(vec![
                IconMeta::material("home"),
                IconMeta::material("home_filled"),
                IconMeta::material("search"),
                IconMeta::puls("logo", vec!["brand".to_string()], "logo.svg"),
            ])
            .await;
        (controller, rx)
    }

    #[tokio::test]
    async fn test_load_catalog_isolates_failures() {
        let (controller, _rx) = controller(MockAssetFetcher::new());
        let loader = CatalogLoader::new(
            FailingSource::new(
                IconSource::Material,
                FetchError::Transport("timed out".to_string()),
            ),
            StaticSource::new(
                IconSource::Puls,
                vec![
                    IconMeta::puls("logo", vec![], "logo.svg"),
                    IconMeta::puls("bed", vec![], "bed.svg"),
                ],
            ),
        );

        assert_eq!(controller.view().await.status, PanelStatus::Loading);
        let stats = controller.load_catalog(&loader).await;

        assert_eq!(stats.sources_failed, 1);
        let view = controller.view().await;
        assert_eq!(view.status, PanelStatus::Ready);
        assert_eq!(view.total, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_is_debounced() {
        let (controller, _rx) = loaded(MockAssetFetcher::new()).await;

        controller.search_input("h").await;
        tokio::time::sleep(Duration::from_millis(100)).await;
        controller.search_input("ho").await;
        tokio::time::sleep(Duration::from_millis(100)).await;
        controller.search_input("home").await;

        // Nothing applied while typing continues.
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(controller.view().await.filtered, 4);

        tokio::time::sleep(Duration::from_millis(100)).await;
        let view = controller.view().await;
        assert_eq!(view.query, "home");
        assert_eq!(view.filtered, 2);
    }

    #[tokio::test]
    async fn test_flush_before_window_is_a_no_op() {
        let (controller, _rx) = loaded(MockAssetFetcher::new()).await;

        controller.search_input("brand").await;

        assert!(!controller.flush_search().await);
        assert_eq!(controller.view().await.filtered, 4);
    }

    #[tokio::test]
    async fn test_cell_preview_fetched_once() {
        let (controller, _rx) =
            loaded(MockAssetFetcher::new().with(HOME_URL, "<svg>home</svg>")).await;

        assert!(controller.cell_visible(0).await.unwrap());
        assert!(!controller.cell_visible(0).await.unwrap());

        let view = controller.view().await;
        assert_eq!(view.cells[0].preview.as_deref(), Some("<svg>home</svg>"));
        assert_eq!(controller.assets().fetcher().fetch_count(HOME_URL), 1);
    }

    #[tokio::test]
    async fn test_failed_preview_stays_empty_and_is_not_retried() {
        let (controller, _rx) = loaded(MockAssetFetcher::new()).await;

        assert!(!controller.cell_visible(0).await.unwrap());
        assert!(!controller.cell_visible(0).await.unwrap());

        let view = controller.view().await;
        assert!(view.cells[0].preview.is_none());
        assert!(view.cells[0].preview_requested);
        assert_eq!(controller.assets().fetcher().fetch_count(HOME_URL), 1);
    }

    #[tokio::test]
    async fn test_unknown_cell() {
        let (controller, _rx) = loaded(MockAssetFetcher::new()).await;

        let err = controller.cell_visible(42).await.unwrap_err();
        assert!(matches!(err, PanelError::Picker(PickerError::UnknownCell(42))));
    }

    #[tokio::test]
    async fn test_insert_uses_cached_svg() {
        let (controller, mut rx) =
            loaded(MockAssetFetcher::new().with(LOGO_URL, "<svg>logo</svg>")).await;

        controller.cell_visible(3).await.unwrap();
        let selection = controller.select(3).await.unwrap();
        assert_eq!(selection.badge, "Puls");

        controller.insert_selected().await.unwrap();

        assert_eq!(
            rx.recv().await,
            Some(PluginMessage::insert_icon("<svg>logo</svg>", "logo"))
        );
        assert_eq!(controller.assets().fetcher().fetch_count(LOGO_URL), 1);
    }

    #[tokio::test]
    async fn test_insert_without_selection() {
        let (controller, _rx) = loaded(MockAssetFetcher::new()).await;

        let err = controller.insert_selected().await.unwrap_err();
        assert!(matches!(err, PanelError::Picker(PickerError::NoSelection)));
    }

    #[tokio::test]
    async fn test_insert_fetch_failure_sends_nothing() {
        let (controller, mut rx) = loaded(MockAssetFetcher::new()).await;
        controller.select(0).await.unwrap();

        let err = controller.insert_selected().await.unwrap_err();

        assert!(matches!(err, PanelError::Asset(_)));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_activate_selects_and_inserts_current_style() {
        let filled = "https://m.test/rounded/home-fill.svg";
        let (controller, mut rx) =
            loaded(MockAssetFetcher::new().with(filled, "<svg>filled</svg>")).await;

        controller
            .set_style(StyleOptions::new(MaterialStyle::Rounded, true))
            .await;
        controller.activate(0).await.unwrap();

        assert_eq!(
            controller.view().await.selection.map(|s| s.name),
            Some("home".to_string())
        );
        assert_eq!(
            rx.recv().await,
            Some(PluginMessage::insert_icon("<svg>filled</svg>", "home"))
        );
    }

    #[tokio::test]
    async fn test_insert_sends_raw_name() {
        let url = "https://m.test/outlined/arrow_back.svg";
        let (controller, mut rx) =
            controller(MockAssetFetcher::new().with(url, "<svg>back</svg>"));
        controller
            .install_catalog(vec![IconMeta::material("arrow_back")])
            .await;

        let selection = controller.select(0).await.unwrap();
        assert_eq!(selection.display_name, "arrow back");
        controller.insert_selected().await.unwrap();

        assert_eq!(
            rx.recv().await,
            Some(PluginMessage::insert_icon("<svg>back</svg>", "arrow_back"))
        );
    }

    #[tokio::test]
    async fn test_tab_change_clears_selection() {
        let (controller, _rx) = loaded(MockAssetFetcher::new()).await;
        controller.select(0).await.unwrap();

        let view = controller.select_tab(SourceFilter::Puls).await;

        assert!(view.selection.is_none());
        assert_eq!(view.filtered, 1);
        assert_eq!(view.cells[0].name, "logo");
    }

    #[tokio::test]
    async fn test_send_after_host_stopped() {
        let (controller, rx) = loaded(MockAssetFetcher::new()).await;
        drop(rx);

        let err = controller.resize(400.0, 600.0).await.unwrap_err();
        assert!(matches!(err, PanelError::HostUnavailable));
    }
}
