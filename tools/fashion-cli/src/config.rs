//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fashion_cache::FAVORITES_KEY;
use fashion_catalog::search::{FilterSettings, SortKey, DEFAULT_PRICE_CEILING, DEFAULT_RECENCY_DAYS};
use fashion_data::{FetchPolicy, RetryPolicy, TimeoutConfig, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
use fashion_observability::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Config file names searched from the working directory upwards.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["fashion.toml", ".fashion.toml", "fashion.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FashionConfig {
    /// Listing API.
    #[serde(default)]
    pub api: ApiConfig,

    /// View defaults.
    #[serde(default)]
    pub view: ViewConfig,

    /// Favorites persistence.
    #[serde(default)]
    pub favorites: FavoritesConfig,

    /// Logging.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl FashionConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Listing API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the listing API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Total request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Retries after a transient failure.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_max_retries() -> u32 {
    1
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            max_retries: default_max_retries(),
        }
    }
}

impl ApiConfig {
    /// Timeout and retry policy for the API client.
    pub fn fetch_policy(&self) -> FetchPolicy {
        FetchPolicy::new(
            TimeoutConfig::from_millis(self.timeout_ms),
            RetryPolicy::new(self.max_retries),
        )
    }
}

/// Defaults for the product view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Products per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Trailing window of the recency filter, in days.
    #[serde(default = "default_recency_days")]
    pub recency_days: i64,

    /// Ceiling of the reasonable-price filter.
    #[serde(default = "default_price_ceiling")]
    pub price_ceiling: f64,

    /// Sort key applied when none is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortKey>,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_recency_days() -> i64 {
    DEFAULT_RECENCY_DAYS
}

fn default_price_ceiling() -> f64 {
    DEFAULT_PRICE_CEILING
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            recency_days: default_recency_days(),
            price_ceiling: default_price_ceiling(),
            sort: None,
        }
    }
}

impl ViewConfig {
    /// Filter thresholds.
    pub fn filter_settings(&self) -> FilterSettings {
        FilterSettings {
            recency_days: self.recency_days,
            price_ceiling: self.price_ceiling,
        }
    }
}

/// Favorites persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritesConfig {
    /// Store file; defaults to the user data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Key holding the favorite list.
    #[serde(default = "default_favorites_key")]
    pub key: String,
}

fn default_favorites_key() -> String {
    FAVORITES_KEY.to_string()
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            path: None,
            key: default_favorites_key(),
        }
    }
}

impl FavoritesConfig {
    /// Store file, falling back to the user data directory.
    pub fn store_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| data_dir().join("fashion").join("favorites.json"))
    }
}

/// Get the platform-specific data directory.
fn data_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share")
    } else {
        std::env::temp_dir()
    }
}

/// Generate a default fashion.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Clear Fashion browser configuration

[api]
base_url = "{base_url}"
timeout_ms = {timeout_ms}
max_retries = {max_retries}

[view]
page_size = {page_size}
recency_days = {recency_days}
price_ceiling = {price_ceiling:.1}
# sort = "price-asc"

[favorites]
# path = "~/.local/share/fashion/favorites.json"
key = "{key}"

[logging]
level = "info"
format = "human"
"#,
        base_url = DEFAULT_BASE_URL,
        timeout_ms = default_timeout_ms(),
        max_retries = default_max_retries(),
        page_size = DEFAULT_PAGE_SIZE,
        recency_days = DEFAULT_RECENCY_DAYS,
        price_ceiling = DEFAULT_PRICE_CEILING,
        key = FAVORITES_KEY,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use fashion_observability::{LogFormat, LogLevel};

    #[test]
    fn test_generated_config_matches_defaults() {
        let config: FashionConfig = toml::from_str(&generate_default_config()).unwrap();

        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_ms, 5000);
        assert_eq!(config.view.page_size, 12);
        assert_eq!(config.view.recency_days, 14);
        assert_eq!(config.view.price_ceiling, 50.0);
        assert_eq!(config.view.sort, None);
        assert_eq!(config.favorites.key, "favoriteProducts");
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: FashionConfig = toml::from_str(
            r#"
[view]
sort = "date-desc"

[logging]
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.view.sort, Some(SortKey::DateDesc));
        assert_eq!(config.view.page_size, 12);
        assert_eq!(config.api.max_retries, 1);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_load_json_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fashion.json");
        let favorites = dir.path().join("favs.json");
        let body = serde_json::json!({
            "view": {"page_size": 24},
            "favorites": {"path": favorites},
        });
        std::fs::write(&path, body.to_string()).unwrap();

        let loaded = FashionConfig::load(&path).unwrap();
        assert_eq!(loaded.view.page_size, 24);
        assert_eq!(loaded.favorites.store_path(), dir.path().join("favs.json"));
    }
}
