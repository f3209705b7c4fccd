use serde::Deserialize;

use crate::assets::AssetLoader;
use crate::extract::SiteKind;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Crawl targets, tried in order for every keyword
    #[serde(default = "default_sites")]
    pub sites: Vec<SiteTarget>,

    /// HTTP fetch behavior
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Search-engine augmentation of the site table
    #[serde(default)]
    pub search: SearchConfig,

    /// Unique palettes returned per query
    #[serde(default = "default_max_palettes")]
    pub max_palettes: usize,
}

fn default_max_palettes() -> usize {
    5
}

/// One crawl target: a URL template plus the extraction strategy tag for
/// the host it points at.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteTarget {
    /// URL with a `{keyword}` placeholder
    pub url: String,

    /// Which site-specific strategy applies (default: generic only)
    #[serde(default)]
    pub kind: SiteKind,
}

impl SiteTarget {
    /// Concrete URL for a normalized keyword.
    pub fn url_for(&self, keyword: &str) -> String {
        self.url.replace("{keyword}", keyword)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct FetchConfig {
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Lower bound of the random pause between site fetches
    #[serde(default = "default_min_delay_ms")]
    pub min_delay_ms: u64,

    /// Upper bound of the random pause between site fetches
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,

    /// User agents rotated across requests
    #[serde(default = "default_user_agents")]
    pub user_agents: Vec<String>,
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_min_delay_ms() -> u64 {
    1000
}

fn default_max_delay_ms() -> u64 {
    3000
}

fn default_user_agents() -> Vec<String> {
    [
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:89.0) Gecko/20100101 Firefox/89.0",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.1.1 Safari/605.1.15",
    ]
    .map(String::from)
    .to_vec()
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            min_delay_ms: default_min_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            user_agents: default_user_agents(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Whether to crawl search-engine result links at all
    #[serde(default = "default_search_enabled")]
    pub enabled: bool,

    /// Search endpoint; the query goes in the `q` parameter
    #[serde(default = "default_search_url")]
    pub url: String,

    /// How many result links to crawl per query
    #[serde(default = "default_max_links")]
    pub max_links: usize,
}

fn default_search_enabled() -> bool {
    true
}

fn default_search_url() -> String {
    "https://www.google.com/search".to_string()
}

fn default_max_links() -> usize {
    3
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enabled: default_search_enabled(),
            url: default_search_url(),
            max_links: default_max_links(),
        }
    }
}

fn default_sites() -> Vec<SiteTarget> {
    let table: [(&str, SiteKind); 7] = [
        ("https://coolors.co/palettes/search/{keyword}", SiteKind::Coolors),
        ("https://colorhunt.co/palettes/{keyword}", SiteKind::ColorHunt),
        ("https://www.colorhexa.com/color-{keyword}", SiteKind::ColorHexa),
        ("https://www.color-name.com/{keyword}-color", SiteKind::ColorName),
        ("https://www.design-seeds.com/search/{keyword}/", SiteKind::DesignSeeds),
        ("https://www.schemecolor.com/s/{keyword}", SiteKind::SchemeColor),
        (
            "https://www.colorcombos.com/color-schemes.html?search={keyword}",
            SiteKind::ColorCombos,
        ),
    ];

    table
        .into_iter()
        .map(|(url, kind)| SiteTarget {
            url: url.to_string(),
            kind,
        })
        .collect()
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::info!(
                        sites = config.sites.len(),
                        search_enabled = config.search.enabled,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sites: default_sites(),
            fetch: FetchConfig::default(),
            search: SearchConfig::default(),
            max_palettes: default_max_palettes(),
        }
    }
}
