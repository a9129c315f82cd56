//! Top-level access service configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Main access service configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AccessConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Role and bootstrap configuration
    #[serde(default)]
    pub rbac: RbacConfig,
    /// Role record cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
