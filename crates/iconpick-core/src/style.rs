use serde::{Deserialize, Serialize};

/// Material Symbols style family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialStyle {
    #[default]
    Outlined,
    Rounded,
    Sharp,
}

impl MaterialStyle {
    /// Directory name used by the CDN layout.
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialStyle::Outlined => "outlined",
            MaterialStyle::Rounded => "rounded",
            MaterialStyle::Sharp => "sharp",
        }
    }
}

impl std::str::FromStr for MaterialStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "outlined" => Ok(MaterialStyle::Outlined),
            "rounded" => Ok(MaterialStyle::Rounded),
            "sharp" => Ok(MaterialStyle::Sharp),
            other => Err(format!("unknown material style: {}", other)),
        }
    }
}

/// Style and fill options. Only Material asset URLs depend on these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleOptions {
    pub style: MaterialStyle,
    pub filled: bool,
}

impl StyleOptions {
    pub fn new(style: MaterialStyle, filled: bool) -> Self {
        Self { style, filled }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_outlined_unfilled() {
        let opts = StyleOptions::default();
        assert_eq!(opts.style, MaterialStyle::Outlined);
        assert!(!opts.filled);
    }

    #[test]
    fn test_parse_style() {
        assert_eq!("sharp".parse::<MaterialStyle>(), Ok(MaterialStyle::Sharp));
        assert!("bold".parse::<MaterialStyle>().is_err());
    }
}
