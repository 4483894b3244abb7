use std::sync::Arc;

use dashmap::DashMap;

use crate::error::FetchError;
use crate::http::HttpClient;

/// Trait for fetching raw SVG markup by URL.
pub trait AssetFetcher: Send + Sync {
    fn fetch_svg(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<String, FetchError>> + Send;
}

/// Fetches SVG assets over HTTP.
pub struct HttpAssetFetcher {
    http: HttpClient,
}

impl HttpAssetFetcher {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

impl AssetFetcher for HttpAssetFetcher {
    async fn fetch_svg(&self, url: &str) -> Result<String, FetchError> {
        self.http.get_text(url).await
    }
}

/// SVG markup keyed by resolved asset URL.
///
/// Append-only for the session; nothing is evicted. Content for a URL never
/// changes, so concurrent writers for the same key may simply overwrite.
#[derive(Default)]
pub struct SvgCache {
    entries: DashMap<String, Arc<str>>,
}

impl SvgCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, url: &str) -> Option<Arc<str>> {
        self.entries.get(url).map(|e| Arc::clone(e.value()))
    }

    pub fn insert(&self, url: &str, svg: String) -> Arc<str> {
        let svg: Arc<str> = Arc::from(svg);
        self.entries.insert(url.to_string(), Arc::clone(&svg));
        svg
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serves SVG markup from the cache, fetching on a miss.
pub struct AssetLoader<F: AssetFetcher> {
    fetcher: F,
    cache: SvgCache,
}

impl<F: AssetFetcher> AssetLoader<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            cache: SvgCache::new(),
        }
    }

    pub fn cache(&self) -> &SvgCache {
        &self.cache
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Markup for `url`. Failures are not cached, so a later call retries.
    pub async fn load(&self, url: &str) -> Result<Arc<str>, FetchError> {
        if let Some(svg) = self.cache.get(url) {
            return Ok(svg);
        }

        let svg = self.fetcher.fetch_svg(url).await?;
        Ok(self.cache.insert(url, svg))
    }
}
