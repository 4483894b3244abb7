use serde::{Deserialize, Serialize};

use crate::icon::{IconMeta, IconSource};
use crate::style::StyleOptions;

/// Active source tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFilter {
    #[default]
    All,
    Material,
    Puls,
}

impl SourceFilter {
    pub fn admits(&self, source: IconSource) -> bool {
        match self {
            SourceFilter::All => true,
            SourceFilter::Material => source == IconSource::Material,
            SourceFilter::Puls => source == IconSource::Puls,
        }
    }
}

/// User-driven filter inputs. Any change triggers a full recomputation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub source: SourceFilter,
    /// Already trimmed and lower-cased.
    pub query: String,
    pub style: StyleOptions,
}

impl FilterState {
    /// Normalize raw search box input the way the query is stored.
    pub fn normalize_query(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    /// Whether an icon belongs in the filtered view.
    ///
    /// Substring match against the raw name, the name with `_` shown as
    /// spaces, or any keyword (case-insensitive). No ranking.
    pub fn matches(&self, icon: &IconMeta) -> bool {
        if !self.source.admits(icon.source) {
            return false;
        }
        let query = self.query.as_str();
        if query.is_empty() {
            return true;
        }

        if icon.name.contains(query) {
            return true;
        }
        if icon.name.replace('_', " ").contains(query) {
            return true;
        }
        icon.keywords
            .iter()
            .any(|k| k.to_lowercase().contains(query))
    }

    /// Indices of matching icons, in catalog order.
    pub fn apply(&self, catalog: &[IconMeta]) -> Vec<usize> {
        catalog
            .iter()
            .enumerate()
            .filter(|(_, icon)| self.matches(icon))
            .map(|(i, _)| i)
            .collect()
    }
}
