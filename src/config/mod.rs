//! Application configuration.
//!
//! Configuration is read from YAML; every field is optional:
//!
//! ```yaml
//! debounce_ms: 300
//! favorites_key: recipeFavorites
//! catalog: ./recipes          # file or directory; built-in sample if absent
//! storage: ./storage.json     # in-memory if absent
//! ```

use crate::favorites::FAVORITES_KEY;
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Search input quiescence window in milliseconds
    pub debounce_ms: u64,
    /// Storage key holding the favorites list
    pub favorites_key: String,
    /// Catalog file or directory
    pub catalog: Option<Utf8PathBuf>,
    /// JSON file backing the key-value store
    pub storage: Option<Utf8PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            debounce_ms: 300,
            favorites_key: FAVORITES_KEY.to_string(),
            catalog: None,
            storage: None,
        }
    }
}

impl AppConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Reads a config file. Relative `catalog` and `storage` paths are
    /// resolved against the file's directory.
    pub fn from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml_str(&content)?;
        if let Some(base) = path.parent() {
            config.catalog = config.catalog.map(|p| resolve(base, p));
            config.storage = config.storage.map(|p| resolve(base, p));
        }
        Ok(config)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn resolve(base: &Utf8Path, path: Utf8PathBuf) -> Utf8PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.debounce(), Duration::from_millis(300));
        assert_eq!(config.favorites_key, "recipeFavorites");
        assert!(config.catalog.is_none());
        assert!(config.storage.is_none());
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        assert_eq!(AppConfig::from_yaml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_yaml() {
        let config = AppConfig::from_yaml_str("debounce_ms: 150").unwrap();
        assert_eq!(config.debounce_ms, 150);
        assert_eq!(config.favorites_key, FAVORITES_KEY);
    }

    #[test]
    fn test_invalid_yaml() {
        let result = AppConfig::from_yaml_str("debounce_ms: soon");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_from_path_resolves_relative_paths() {
        let temp_dir = TempDir::new().unwrap();
        let dir = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).unwrap();
        let path = dir.join("app.yaml");
        fs::write(
            &path,
            indoc! {r#"
                favorites_key: myFavorites
                catalog: recipes
                storage: /var/lib/cards/storage.json
            "#},
        )
        .unwrap();

        let config = AppConfig::from_path(&path).unwrap();
        assert_eq!(config.favorites_key, "myFavorites");
        assert_eq!(config.catalog, Some(dir.join("recipes")));
        assert_eq!(
            config.storage,
            Some(Utf8PathBuf::from("/var/lib/cards/storage.json"))
        );
    }

    #[test]
    fn test_from_missing_path() {
        let result = AppConfig::from_path(Utf8Path::new("/nonexistent/app.yaml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
