// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{DashboardError, Result};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// JSON file backing the key-value store.
    pub path: PathBuf,
    pub state_key: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardConfig {
    /// Characters of the comment body shown per row; 0 shows the whole body.
    pub body_preview_chars: usize,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("COMMENTS_DASHBOARD")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| DashboardError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| DashboardError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://jsonplaceholder.typicode.com".to_string(),
                timeout_secs: 30,
            },
            storage: StorageConfig {
                path: PathBuf::from("data/local_storage.json"),
                state_key: crate::state::STORAGE_KEY.to_string(),
            },
            dashboard: DashboardConfig {
                body_preview_chars: 80,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        Validator::validate_url(&self.api.base_url)
            .map_err(|e| DashboardError::Config(e.to_string()))?;

        if self.api.timeout_secs == 0 {
            return Err(DashboardError::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.storage.state_key.trim().is_empty() {
            return Err(DashboardError::Config(
                "state_key must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.storage.state_key, "comments-dashboard-state-v1");
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("dashboard.toml");
        fs::write(
            &path,
            r#"
[api]
base_url = "http://localhost:8080"
timeout_secs = 5

[storage]
path = "state.json"
state_key = "custom-key"

[dashboard]
body_preview_chars = 0
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.storage.state_key, "custom-key");
        assert_eq!(config.dashboard.body_preview_chars, 0);
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let mut config = Config::default_config();
        config.api.base_url = "jsonplaceholder.typicode.com".to_string();
        assert!(matches!(config.validate(), Err(DashboardError::Config(_))));
    }
}
