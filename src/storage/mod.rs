//! Storage layer for the access service
//!
//! `RoleStore` is the repository seam. The database implementation is
//! authoritative in production; `MemoryStore` backs tests and throwaway
//! deployments. `RoleCache` sits in front of either one.

/// Read-through role record cache
pub mod cache;
/// Database storage module
pub mod database;
/// In-memory store
pub mod memory;

pub use cache::{CacheLookup, CacheStats, RoleCache};
pub use memory::MemoryStore;

use crate::config::{StorageBackend, StorageConfig};
use crate::core::models::{FirstUserMarker, UserAccount, UserRoleRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Key of the first-user sentinel in the system configuration table
pub const FIRST_USER_KEY: &str = "firstUser";

/// Result of an attempt to claim the first-user slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimOutcome {
    /// Sentinel and admin record were written
    Claimed,
    /// Someone else already holds the sentinel
    AlreadyClaimed,
    /// Role records or other accounts already exist
    StoreNotEmpty,
}

/// Persistence for accounts, role records and the first-user sentinel
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Role record for a user
    async fn get_role_record(&self, user_id: &str) -> Result<Option<UserRoleRecord>>;

    /// Create or overwrite a user's role record
    async fn put_role_record(&self, record: &UserRoleRecord) -> Result<()>;

    /// All role records ordered by user id
    async fn list_role_records(&self) -> Result<Vec<UserRoleRecord>>;

    async fn count_role_records(&self) -> Result<u64>;

    /// Register an account; duplicate id or email is a conflict
    async fn create_user(&self, account: &UserAccount) -> Result<()>;

    async fn find_user(&self, user_id: &str) -> Result<Option<UserAccount>>;

    async fn count_users(&self) -> Result<u64>;

    /// Atomically claim the first-user slot for `record.user_id`
    ///
    /// Succeeds only if the sentinel is absent, no role records exist, and
    /// no account other than `record.user_id` exists. On success the sentinel,
    /// `record` and `account` (when registering) are written as one unit.
    /// A duplicate `account` is a conflict error.
    async fn claim_first_user(
        &self,
        record: &UserRoleRecord,
        account: Option<&UserAccount>,
    ) -> Result<ClaimOutcome>;

    async fn first_user_marker(&self) -> Result<Option<FirstUserMarker>>;

    async fn health_check(&self) -> Result<()>;
}

/// Open the configured store
pub async fn open_store(config: &StorageConfig) -> Result<Arc<dyn RoleStore>> {
    match config.backend {
        StorageBackend::Database => {
            let db = database::Database::new(&config.database).await?;
            db.migrate().await?;
            Ok(Arc::new(db))
        }
        StorageBackend::Memory => {
            info!("Using in-memory role store; data will not survive a restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
