//! Config store port interface

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for persisting application configuration
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the config, or an empty config when none exists
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Save the config, creating parent directories as needed
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Path of the backing file
    fn path(&self) -> PathBuf;

    /// Whether the backing file exists
    fn exists(&self) -> bool;

    /// Write a default config, failing if one already exists
    async fn init(&self) -> Result<(), ConfigError>;
}
