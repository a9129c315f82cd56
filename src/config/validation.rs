//! Configuration validation

use crate::auth::rbac::Role;
use crate::config::models::*;
use tracing::{debug, warn};

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating server configuration");

        if self.port == 0 {
            return Err("Port cannot be 0".to_string());
        }

        if self.timeout == 0 {
            return Err("Timeout cannot be 0".to_string());
        }

        if self.workers == Some(0) {
            return Err("Worker count cannot be 0".to_string());
        }

        if self.cors.enabled && self.cors.allows_all_origins() && self.cors.allow_credentials {
            return Err(
                "CORS cannot allow all origins (*) when credentials are enabled".to_string(),
            );
        }

        Ok(())
    }
}

impl Validate for StorageConfig {
    fn validate(&self) -> Result<(), String> {
        if self.backend == StorageBackend::Database {
            if self.database.url.is_empty() {
                return Err("Database URL cannot be empty".to_string());
            }
            if self.database.max_connections == 0 {
                return Err("Database max connections must be greater than 0".to_string());
            }
        }

        Ok(())
    }
}

impl Validate for RbacConfig {
    fn validate(&self) -> Result<(), String> {
        let role = self.parsed_default_role()?;

        if role == Role::Admin {
            warn!("Default role is admin: every new user will get unrestricted access");
        }

        Ok(())
    }
}

impl Validate for CacheConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled {
            if self.ttl_seconds == 0 {
                return Err("Cache TTL must be greater than 0".to_string());
            }
            if self.max_entries == 0 {
                return Err("Cache max entries must be greater than 0".to_string());
            }
        }

        Ok(())
    }
}
