//! Application Configuration
//!
//! Loads configuration from files and environment variables.

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::domain::models::DataSourceType;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// JWT configuration; the secret is wiped from memory on drop
#[derive(Clone, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct JwtConfig {
    pub secret: String,
    pub expires_in_secs: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("expires_in_secs", &self.expires_in_secs)
            .finish()
    }
}

/// Driver file storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DriversConfig {
    /// Root directory; each driver gets a sub-directory named by its id
    pub storage_dir: PathBuf,
    /// Largest accepted upload request body
    pub max_upload_bytes: usize,
}

/// A supported data-source type
#[derive(Debug, Clone, Deserialize)]
pub struct DataSourceTypeConfig {
    #[serde(rename = "type")]
    pub ds_type: String,
    pub name: String,
    #[serde(default)]
    pub supported_versions: Option<String>,
}

impl From<DataSourceTypeConfig> for DataSourceType {
    fn from(config: DataSourceTypeConfig) -> Self {
        Self {
            ds_type: config.ds_type,
            name: config.name,
            supported_versions: config.supported_versions,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub drivers: DriversConfig,
    #[serde(default)]
    pub datasource_types: Vec<DataSourceTypeConfig>,
}

impl AppConfig {
    /// Load configuration from files and environment
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        Config::builder()
            // Start with default config
            .add_source(File::with_name("config/default").required(true))
            // Merge environment-specific config if it exists
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Override with environment variables (e.g., APP__SERVER__PORT)
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}
