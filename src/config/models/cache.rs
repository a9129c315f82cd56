//! Role record cache configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cache in front of the role store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Enable caching
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Freshness window in seconds
    #[serde(default = "default_cache_ttl")]
    pub ttl_seconds: u64,
    /// Maximum number of cached records
    #[serde(default = "default_cache_max_size")]
    pub max_entries: usize,
    /// Serve an expired entry when the store read fails
    #[serde(default)]
    pub serve_stale_on_error: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_seconds: default_cache_ttl(),
            max_entries: default_cache_max_size(),
            serve_stale_on_error: false,
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}
