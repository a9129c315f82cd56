//! Server builder and run_server function

use crate::auth::AccessSystem;
use crate::config::Config;
use crate::server::server::HttpServer;
use crate::server::state::AppState;
use crate::utils::error::{AccessError, Result};
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    access: Option<AccessSystem>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use an already constructed access system instead of opening the store
    pub fn with_access_system(mut self, access: AccessSystem) -> Self {
        self.access = Some(access);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| AccessError::Config("Configuration is required".to_string()))?;

        match self.access {
            Some(access) => Ok(HttpServer::with_state(AppState::new(config, access))),
            None => HttpServer::new(&config).await,
        }
    }
}

/// Build and run the server until shutdown
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting KGOC access service v{}", crate::VERSION);

    let server = ServerBuilder::new().with_config(config).build().await?;
    info!(
        "Server starting at: http://{}",
        server.config().address()
    );
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   GET  /api/v1/roles - Role list");
    info!("   POST /api/v1/permissions/check - Permission check");
    info!("   POST /api/v1/users - Register user");

    server.start().await
}
