use iconpick_core::{IconMeta, IconSource, MaterialStyle};

use crate::error::FetchError;
use crate::http::HttpClient;
use crate::protocol::{FileTree, PackageInfo, PulsEntry};

/// A remote catalog of icon metadata.
pub trait CatalogSource: Send + Sync {
    fn source(&self) -> IconSource;

    fn fetch_icons(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<IconMeta>, FetchError>> + Send;
}

/// Material Symbols listed through a package registry's file-tree API.
pub struct MaterialRegistrySource {
    http: HttpClient,
    metadata_url: String,
}

impl MaterialRegistrySource {
    pub fn new(http: HttpClient, metadata_url: impl Into<String>) -> Self {
        Self {
            http,
            metadata_url: metadata_url.into(),
        }
    }
}

impl CatalogSource for MaterialRegistrySource {
    fn source(&self) -> IconSource {
        IconSource::Material
    }

    async fn fetch_icons(&self) -> Result<Vec<IconMeta>, FetchError> {
        let info: PackageInfo = self.http.get_json(&self.metadata_url).await?;
        let version = info
            .latest_version()
            .ok_or(FetchError::UnresolvedVersion)?;

        let files_url = format!("{}@{}", self.metadata_url, version);
        let tree: FileTree = self.http.get_json(&files_url).await?;

        // Every style ships the same names; one listing is enough.
        let icons = tree.material_icons(MaterialStyle::Outlined.as_str());
        tracing::debug!("Material {} lists {} icons", version, icons.len());
        Ok(icons)
    }
}

/// Puls icons from a flat JSON manifest.
pub struct PulsManifestSource {
    http: HttpClient,
    manifest_url: String,
}

impl PulsManifestSource {
    pub fn new(http: HttpClient, manifest_url: impl Into<String>) -> Self {
        Self {
            http,
            manifest_url: manifest_url.into(),
        }
    }
}

impl CatalogSource for PulsManifestSource {
    fn source(&self) -> IconSource {
        IconSource::Puls
    }

    async fn fetch_icons(&self) -> Result<Vec<IconMeta>, FetchError> {
        let entries: Vec<PulsEntry> = self.http.get_json(&self.manifest_url).await?;
        Ok(entries.into_iter().map(Into::into).collect())
    }
}
