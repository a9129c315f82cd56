//! Test database utilities
//!
//! In-memory SQLite for isolated tests, and a temporary file-backed SQLite
//! database when a test needs several pooled connections.

use kgoc_access::config::DatabaseConfig;
use kgoc_access::storage::database::Database;
use std::sync::Arc;
use tempfile::TempDir;

/// Test database wrapper providing isolated SQLite instances
#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
    // Keeps the directory of a file-backed database alive
    _dir: Option<Arc<TempDir>>,
}

impl TestDatabase {
    /// Create a new in-memory test database
    ///
    /// Each call creates a completely isolated database instance.
    pub async fn new() -> Self {
        let db = create_test_db().await;
        Self {
            inner: Arc::new(db),
            _dir: None,
        }
    }

    /// Create a file-backed database in a temporary directory
    ///
    /// Unlike the in-memory variant this supports a pool of connections,
    /// so concurrent transactions really contend for the write lock.
    pub async fn on_disk(max_connections: u32) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = DatabaseConfig {
            url: format!("sqlite://{}/access.db?mode=rwc", dir.path().display()),
            max_connections,
            connection_timeout: 5,
        };

        let db = Database::new(&config)
            .await
            .expect("Failed to create on-disk test database");
        db.migrate().await.expect("Failed to run database migrations");

        Self {
            inner: Arc::new(db),
            _dir: Some(Arc::new(dir)),
        }
    }

    /// Get reference to the underlying database
    pub fn db(&self) -> &Database {
        &self.inner
    }

    /// Get Arc to the underlying database
    pub fn db_arc(&self) -> Arc<Database> {
        Arc::clone(&self.inner)
    }
}

/// Helper to create a simple test database config
pub fn test_db_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1, // In-memory DB only supports 1 connection
        connection_timeout: 5,
    }
}

/// Create a standalone test database (convenience function)
pub async fn create_test_db() -> Database {
    let config = test_db_config();
    let db = Database::new(&config)
        .await
        .expect("Failed to create test database");
    db.migrate().await.expect("Failed to run migrations");
    db
}

#[cfg(test)]
mod tests {
    use super::*;
    use kgoc_access::RoleStore;

    #[tokio::test]
    async fn test_database_creation() {
        let db = TestDatabase::new().await;
        assert!(db.db().health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_on_disk_database_creation() {
        let db = TestDatabase::on_disk(4).await;
        assert!(db.db().health_check().await.is_ok());
    }
}
