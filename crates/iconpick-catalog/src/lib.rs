//! Iconpick Catalog - Remote icon metadata and SVG assets.

pub mod assets;
pub mod error;
pub mod http;
pub mod loader;
pub mod protocol;
pub mod source;

pub use assets::{AssetFetcher, AssetLoader, HttpAssetFetcher, SvgCache};
pub use error::FetchError;
pub use http::HttpClient;
pub use loader::{CatalogLoader, LoadStats, LoadedCatalog};
pub use source::{CatalogSource, MaterialRegistrySource, PulsManifestSource};

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

#[cfg(any(test, feature = "test-utils"))]
pub use memory::{FailingSource, MockAssetFetcher, StaticSource};
