use crate::icon::{IconMeta, IconSource};
use crate::style::StyleOptions;

/// Base URLs SVG assets are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetUrls {
    pub material_cdn_base: String,
    pub puls_svg_base: String,
}

impl AssetUrls {
    pub fn new(material_cdn_base: impl Into<String>, puls_svg_base: impl Into<String>) -> Self {
        Self {
            material_cdn_base: material_cdn_base.into(),
            puls_svg_base: puls_svg_base.into(),
        }
    }

    /// Resolve the SVG asset URL for an icon.
    ///
    /// Puls URLs depend only on the recorded file. Material URLs change with
    /// style and fill, so the URL-keyed cache never serves a stale variant.
    pub fn resolve(&self, icon: &IconMeta, options: &StyleOptions) -> String {
        match icon.source {
            IconSource::Puls => match &icon.file {
                Some(file) => format!("{}{}", self.puls_svg_base, file),
                None => format!("{}{}.svg", self.puls_svg_base, icon.name),
            },
            IconSource::Material => {
                let suffix = if options.filled { "-fill" } else { "" };
                format!(
                    "{}{}/{}{}.svg",
                    self.material_cdn_base,
                    options.style.as_str(),
                    icon.name,
                    suffix
                )
            }
        }
    }
}
