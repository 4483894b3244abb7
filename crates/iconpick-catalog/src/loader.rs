use serde::Serialize;

use iconpick_core::IconMeta;

use crate::source::CatalogSource;

/// Statistics from a catalog load.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    pub material_icons: usize,
    pub puls_icons: usize,
    pub sources_failed: usize,
}

/// Result of a catalog load: Material icons first, then Puls.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub icons: Vec<IconMeta>,
    pub stats: LoadStats,
}

/// Fetches both catalogs concurrently and joins them once both settle.
///
/// A failing source contributes zero icons; it never fails the other
/// source or the load as a whole.
pub struct CatalogLoader<M, P>
where
    M: CatalogSource,
    P: CatalogSource,
{
    material: M,
    puls: P,
}

impl<M, P> CatalogLoader<M, P>
where
    M: CatalogSource,
    P: CatalogSource,
{
    pub fn new(material: M, puls: P) -> Self {
        Self { material, puls }
    }

    pub async fn load(&self) -> LoadedCatalog {
        let (material, puls) = tokio::join!(
            fetch_isolated(&self.material),
            fetch_isolated(&self.puls)
        );

        let mut stats = LoadStats::default();
        let material = material.unwrap_or_else(|| {
            stats.sources_failed += 1;
            Vec::new()
        });
        let puls = puls.unwrap_or_else(|| {
            stats.sources_failed += 1;
            Vec::new()
        });
        stats.material_icons = material.len();
        stats.puls_icons = puls.len();

        let mut icons = material;
        icons.extend(puls);

        tracing::info!(
            "Loaded {} icons ({} material, {} puls, {} sources failed)",
            icons.len(),
            stats.material_icons,
            stats.puls_icons,
            stats.sources_failed
        );

        LoadedCatalog { icons, stats }
    }
}

/// Fetch one source, logging and swallowing its failure.
async fn fetch_isolated<S: CatalogSource>(source: &S) -> Option<Vec<IconMeta>> {
    match source.fetch_icons().await {
        Ok(icons) => Some(icons),
        Err(e) => {
            tracing::warn!("Failed to fetch {} metadata: {}", source.source(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::memory::{FailingSource, StaticSource};
    use iconpick_core::IconSource;

    #[tokio::test]
    async fn test_material_failure_keeps_puls() {
        let loader = CatalogLoader::new(
            FailingSource::new(
                IconSource::Material,
                FetchError::Transport("connection refused".to_string()),
            ),
            StaticSource::new(
                IconSource::Puls,
                vec![
                    IconMeta::puls("logo", vec![], "logo.svg"),
                    IconMeta::puls("bed", vec![], "bed.svg"),
                ],
            ),
        );

        let loaded = loader.load().await;

        assert_eq!(loaded.icons.len(), 2);
        assert!(loaded.icons.iter().all(|i| i.source == IconSource::Puls));
        assert_eq!(loaded.stats.sources_failed, 1);
        assert_eq!(loaded.stats.material_icons, 0);
    }

    #[tokio::test]
    async fn test_material_first_then_puls() {
        let loader = CatalogLoader::new(
            StaticSource::new(
                IconSource::Material,
                vec![IconMeta::material("home"), IconMeta::material("search")],
            ),
            StaticSource::new(
                IconSource::Puls,
                vec![IconMeta::puls("logo", vec![], "logo.svg")],
            ),
        );

        let loaded = loader.load().await;
        let names: Vec<_> = loaded.icons.iter().map(|i| i.name.as_str()).collect();

        assert_eq!(names, vec!["home", "search", "logo"]);
        assert_eq!(
            loaded.stats,
            LoadStats {
                material_icons: 2,
                puls_icons: 1,
                sources_failed: 0
            }
        );
    }

    #[tokio::test]
    async fn test_both_fail_gives_empty_catalog() {
        let loader = CatalogLoader::new(
            FailingSource::new(IconSource::Material, FetchError::UnresolvedVersion),
            FailingSource::new(
                IconSource::Puls,
                FetchError::Status {
                    status: 404,
                    url: "https://p.test/icons.json".to_string(),
                },
            ),
        );

        let loaded = loader.load().await;

        assert!(loaded.icons.is_empty());
        assert_eq!(loaded.stats.sources_failed, 2);
    }
}
