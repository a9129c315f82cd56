//! Configuration management for the access service
//!
//! This module handles loading, validation, and management of all service configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{AccessError, Result};
use std::env;
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the access service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Access service configuration
    pub access: AccessConfig,
}

impl Config {
    /// Load configuration from file, then apply environment overrides
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AccessError::Config(format!("Failed to read config file: {}", e)))?;

        let access: AccessConfig = serde_yaml::from_str(&content)
            .map_err(|e| AccessError::Config(format!("Failed to parse config: {}", e)))?;

        let mut config = Self { access };
        config.apply_env_overrides()?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Defaults plus environment overrides
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `ACCESS_*` and `DATABASE_URL` overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(host) = env::var("ACCESS_HOST") {
            self.access.server.host = host;
        }
        if let Ok(port) = env::var("ACCESS_PORT") {
            self.access.server.port = port
                .parse()
                .map_err(|e| AccessError::Config(format!("Invalid port: {}", e)))?;
        }
        if let Ok(db_url) = env::var("DATABASE_URL") {
            self.access.storage.database.url = db_url;
        }
        if let Ok(role) = env::var("ACCESS_DEFAULT_ROLE") {
            self.access.rbac.default_role = role;
        }
        if let Ok(level) = env::var("ACCESS_LOG_LEVEL") {
            self.access.logging.level = level;
        }
        Ok(())
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.access.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.access.storage
    }

    /// Get RBAC configuration
    pub fn rbac(&self) -> &RbacConfig {
        &self.access.rbac
    }

    /// Get cache configuration
    pub fn cache(&self) -> &CacheConfig {
        &self.access.cache
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.access.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.access
            .server
            .validate()
            .map_err(|e| AccessError::Config(format!("Server config error: {}", e)))?;

        self.access
            .storage
            .validate()
            .map_err(|e| AccessError::Config(format!("Storage config error: {}", e)))?;

        self.access
            .rbac
            .validate()
            .map_err(|e| AccessError::Config(format!("RBAC config error: {}", e)))?;

        self.access
            .cache
            .validate()
            .map_err(|e| AccessError::Config(format!("Cache config error: {}", e)))?;

        self.access.server.cors.warn_if_permissive();

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.access)
            .map_err(|e| AccessError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
