use serde::{Deserialize, Serialize};

/// Remote catalog an icon was fetched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconSource {
    Material,
    Puls,
}

impl IconSource {
    /// Label shown in the selection bar.
    pub fn badge(&self) -> &'static str {
        match self {
            IconSource::Material => "Material",
            IconSource::Puls => "Puls",
        }
    }
}

impl std::fmt::Display for IconSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconSource::Material => write!(f, "material"),
            IconSource::Puls => write!(f, "puls"),
        }
    }
}

/// Metadata for a single icon in the catalog.
///
/// Material icons are identified by `(source, name)`. Puls icons also carry
/// the `file` path their asset URL is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconMeta {
    pub name: String,
    pub source: IconSource,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl IconMeta {
    pub fn material(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: IconSource::Material,
            keywords: Vec::new(),
            file: None,
        }
    }

    pub fn puls(name: impl Into<String>, keywords: Vec<String>, file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: IconSource::Puls,
            keywords,
            file: Some(file.into()),
        }
    }

    /// Name with underscores shown as spaces (e.g. "arrow_back" -> "arrow back").
    pub fn display_name(&self) -> String {
        self.name.replace('_', " ")
    }
}
