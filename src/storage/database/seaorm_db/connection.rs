use crate::config::DatabaseConfig;
use crate::utils::error::{AccessError, Result};
use sea_orm::*;
use sea_orm_migration::MigratorTrait;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::super::entities;
use super::super::migration::Migrator;
use super::types::{DatabaseBackendType, SeaOrmDatabase};

impl SeaOrmDatabase {
    /// Create a new database connection
    ///
    /// There is deliberately no fallback to a local SQLite file when the
    /// primary database is unreachable: an empty fallback store would let the
    /// first-user bootstrap promote a second admin.
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let backend_type = DatabaseBackendType::from_url(&config.url);
        if backend_type == DatabaseBackendType::SQLite {
            Self::ensure_sqlite_dir(&config.url)?;
        }

        let db = Self::try_connect(&config.url, config).await?;
        info!("Database connection established ({:?})", backend_type);
        Ok(Self { db, backend_type })
    }

    /// Try to connect to a database
    async fn try_connect(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url.to_string());
        opt.max_connections(config.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(3600))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        Database::connect(opt).await.map_err(AccessError::Database)
    }

    /// Create the parent directory of a file-backed SQLite URL
    fn ensure_sqlite_dir(url: &str) -> Result<()> {
        let path = url
            .trim_start_matches("sqlite://")
            .trim_start_matches("sqlite:")
            .split('?')
            .next()
            .unwrap_or_default();
        if path.is_empty() || path.starts_with(":memory:") {
            return Ok(());
        }

        if let Some(dir) = Path::new(path).parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    AccessError::Internal(format!("Failed to create data directory: {}", e))
                })?;
                debug!("Created SQLite data directory {}", dir.display());
            }
        }
        Ok(())
    }

    /// Get the current backend type
    pub fn backend_type(&self) -> DatabaseBackendType {
        self.backend_type
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations...");
        Migrator::up(&self.db, None).await.map_err(|e| {
            warn!("Migration failed: {}", e);
            AccessError::Database(e)
        })?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Close the database connection
    pub async fn close(self) -> Result<()> {
        self.db.close().await.map_err(AccessError::Database)?;
        Ok(())
    }

    /// Health check
    pub async fn ping(&self) -> Result<()> {
        debug!("Performing database health check");

        let _result = entities::SystemConfig::find()
            .limit(1)
            .all(&self.db)
            .await
            .map_err(AccessError::Database)?;

        debug!("Database health check passed");
        Ok(())
    }
}
