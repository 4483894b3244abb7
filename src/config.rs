use std::net::SocketAddr;
use std::time::Duration;

use iconpick_core::{AssetUrls, DEFAULT_PAGE_SIZE};

const MATERIAL_METADATA_URL: &str =
    "https://data.jsdelivr.com/v1/packages/npm/@material-symbols/svg-400";
const MATERIAL_CDN_BASE: &str = "https://cdn.jsdelivr.net/npm/@material-symbols/svg-400@latest/";
const PULS_MANIFEST_URL: &str = "https://cdn.jsdelivr.net/gh/niba-dips-no/puls-icons@main/icons.json";
const PULS_SVG_BASE: &str = "https://cdn.jsdelivr.net/gh/niba-dips-no/puls-icons@main/";

/// Panel configuration from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub material_metadata_url: String,
    pub material_cdn_base: String,
    pub puls_manifest_url: String,
    pub puls_svg_base: String,
    pub page_size: usize,
    pub search_debounce: Duration,
    pub fetch_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            material_metadata_url: MATERIAL_METADATA_URL.to_string(),
            material_cdn_base: MATERIAL_CDN_BASE.to_string(),
            puls_manifest_url: PULS_MANIFEST_URL.to_string(),
            puls_svg_base: PULS_SVG_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce: Duration::from_millis(200),
            fetch_timeout: Some(Duration::from_secs(15)),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    /// Every variable is optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(addr) = lookup("ICONPICK_LISTEN_ADDR") {
            config.listen_addr = addr.parse().map_err(|_| {
                ConfigError::Invalid("ICONPICK_LISTEN_ADDR", "must be a valid socket address")
            })?;
        }
        if let Some(url) = lookup("ICONPICK_MATERIAL_METADATA_URL") {
            config.material_metadata_url = url;
        }
        if let Some(url) = lookup("ICONPICK_MATERIAL_CDN_BASE") {
            config.material_cdn_base = url;
        }
        if let Some(url) = lookup("ICONPICK_PULS_MANIFEST_URL") {
            config.puls_manifest_url = url;
        }
        if let Some(url) = lookup("ICONPICK_PULS_SVG_BASE") {
            config.puls_svg_base = url;
        }

        if let Some(size) = lookup("ICONPICK_PAGE_SIZE") {
            config.page_size = match size.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid(
                        "ICONPICK_PAGE_SIZE",
                        "must be a positive integer",
                    ))
                }
            };
        }

        if let Some(ms) = lookup("ICONPICK_SEARCH_DEBOUNCE_MS") {
            let ms = ms.parse::<u64>().map_err(|_| {
                ConfigError::Invalid("ICONPICK_SEARCH_DEBOUNCE_MS", "must be a valid u64")
            })?;
            config.search_debounce = Duration::from_millis(ms);
        }

        if let Some(secs) = lookup("ICONPICK_FETCH_TIMEOUT_SECS") {
            let secs = secs.parse::<u64>().map_err(|_| {
                ConfigError::Invalid("ICONPICK_FETCH_TIMEOUT_SECS", "must be a valid u64")
            })?;
            // 0 disables the client timeout
            config.fetch_timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn asset_urls(&self) -> AssetUrls {
        AssetUrls::new(&self.material_cdn_base, &self.puls_svg_base)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str, &'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid(var, msg) => write!(f, "Invalid value for {}: {}", var, msg),
        }
    }
}

impl std::error::Error for ConfigError {}
