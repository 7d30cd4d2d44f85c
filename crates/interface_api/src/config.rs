//! API configuration

use std::path::PathBuf;

use serde::Deserialize;

use infra_store::{StorageBackend, StorageConfig};

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Storage adapter
    pub storage_backend: StorageBackend,
    /// Data directory for the file backend
    pub storage_dir: Option<PathBuf>,
    /// Log level
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            storage_backend: StorageBackend::Memory,
            storage_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `MFMS_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("storage_backend", "memory")?
            .set_default("log_level", defaults.log_level)?
            .add_source(config::Environment::with_prefix("MFMS").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Storage settings for the configured backend
    pub fn storage_config(&self) -> StorageConfig {
        StorageConfig {
            backend: self.storage_backend,
            dir: self.storage_dir.clone(),
        }
    }
}
