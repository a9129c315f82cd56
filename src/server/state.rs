//! Application state shared across HTTP handlers

use crate::auth::AccessSystem;
use crate::auth::rbac::RoleRegistry;
use crate::config::Config;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for sharing across worker threads.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Role lookups, assignments and bootstrap
    pub access: Arc<AccessSystem>,
}

impl AppState {
    pub fn new(config: Config, access: AccessSystem) -> Self {
        Self {
            config: Arc::new(config),
            access: Arc::new(access),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The immutable role registry
    pub fn registry(&self) -> &RoleRegistry {
        self.access.registry()
    }
}
