use serde::{Deserialize, Serialize};

use iconpick_core::IconMeta;

/// Package summary from the registry metadata endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageInfo {
    #[serde(default)]
    pub tags: Option<PackageTags>,
    #[serde(default)]
    pub versions: Vec<PackageVersion>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageTags {
    pub latest: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageVersion {
    pub version: String,
}

impl PackageInfo {
    /// The `latest` tag, falling back to the first listed version.
    pub fn latest_version(&self) -> Option<&str> {
        self.tags
            .as_ref()
            .and_then(|t| t.latest.as_deref())
            .or_else(|| self.versions.first().map(|v| v.version.as_str()))
    }
}

/// File listing of one package version.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileTree {
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

/// A file, or a directory when `files` is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    #[serde(default)]
    pub files: Option<Vec<FileEntry>>,
}

impl FileTree {
    /// Entries of the top-level directory named `style`.
    pub fn style_dir(&self, style: &str) -> &[FileEntry] {
        self.files
            .iter()
            .find(|e| e.name == style)
            .and_then(|e| e.files.as_deref())
            .unwrap_or(&[])
    }

    /// Material icons listed under `style`, skipping `-fill` variants
    /// (fill is selected through the asset URL instead).
    pub fn material_icons(&self, style: &str) -> Vec<IconMeta> {
        self.style_dir(style)
            .iter()
            .filter(|f| f.name.ends_with(".svg") && !f.name.ends_with("-fill.svg"))
            .map(|f| IconMeta::material(f.name.trim_end_matches(".svg")))
            .collect()
    }
}

/// Entry of the Puls icon manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PulsEntry {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub file: String,
}

impl From<PulsEntry> for IconMeta {
    fn from(entry: PulsEntry) -> Self {
        IconMeta::puls(entry.name, entry.keywords, entry.file)
    }
}
