//! In-process sources and fetchers for testing.

use std::collections::HashMap;
use std::sync::Mutex;

use iconpick_core::{IconMeta, IconSource};

use crate::assets::AssetFetcher;
use crate::error::FetchError;
use crate::source::CatalogSource;

/// Source that always returns the same icons.
pub struct StaticSource {
    source: IconSource,
    icons: Vec<IconMeta>,
}

impl StaticSource {
    pub fn new(source: IconSource, icons: Vec<IconMeta>) -> Self {
        Self { source, icons }
    }
}

impl CatalogSource for StaticSource {
    fn source(&self) -> IconSource {
        self.source
    }

    async fn fetch_icons(&self) -> Result<Vec<IconMeta>, FetchError> {
        Ok(self.icons.clone())
    }
}

/// Source that always fails.
pub struct FailingSource {
    source: IconSource,
    error: FetchError,
}

impl FailingSource {
    pub fn new(source: IconSource, error: FetchError) -> Self {
        Self { source, error }
    }
}

impl CatalogSource for FailingSource {
    fn source(&self) -> IconSource {
        self.source
    }

    async fn fetch_icons(&self) -> Result<Vec<IconMeta>, FetchError> {
        Err(self.error.clone())
    }
}

/// Serves canned SVG markup and records every fetch.
#[derive(Default)]
pub struct MockAssetFetcher {
    assets: HashMap<String, String>,
    fetched: Mutex<Vec<String>>,
}

impl MockAssetFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: impl Into<String>, svg: impl Into<String>) -> Self {
        self.assets.insert(url.into(), svg.into());
        self
    }

    pub fn fetch_count(&self, url: &str) -> usize {
        self.fetched
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.as_str() == url)
            .count()
    }

    pub fn total_fetches(&self) -> usize {
        self.fetched.lock().unwrap().len()
    }
}

impl AssetFetcher for MockAssetFetcher {
    async fn fetch_svg(&self, url: &str) -> Result<String, FetchError> {
        self.fetched.lock().unwrap().push(url.to_string());
        self.assets
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                status: 404,
                url: url.to_string(),
            })
    }
}
