//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use fashion_cache::{FavoritesStore, FileStore};
use fashion_data::ApiClient;

use crate::config::{FashionConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: FashionConfig,
    /// File the configuration was read from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, path);
                (FashionConfig::load(&path)?, Some(path))
            }
            None => match find_config(&cwd) {
                Some(path) => (FashionConfig::load(&path)?, Some(path)),
                None => (FashionConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// API client built from the `[api]` section.
    pub fn api_client(&self) -> Result<ApiClient> {
        let api = &self.config.api;
        ApiClient::new(&api.base_url, api.fetch_policy())
            .with_context(|| format!("Failed to create API client for {}", api.base_url))
    }

    /// Favorites store built from the `[favorites]` section.
    pub fn favorites_store(&self) -> Result<FavoritesStore<FileStore>> {
        let path = self.config.favorites.store_path();
        let file = FileStore::open(&path)
            .with_context(|| format!("Failed to open favorites store: {}", path.display()))?;
        Ok(FavoritesStore::with_key(file, self.config.favorites.key.clone()))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

/// Find a config file in `start` or any of its ancestors.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(".fashion.toml"), "").unwrap();

        assert_eq!(find_config(&nested), Some(dir.path().join(".fashion.toml")));
    }

    #[test]
    fn test_find_config_prefers_first_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("fashion.json"), "{}").unwrap();
        std::fs::write(dir.path().join("fashion.toml"), "").unwrap();

        assert_eq!(find_config(dir.path()), Some(dir.path().join("fashion.toml")));
    }
}
