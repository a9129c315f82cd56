//! Test fixtures and data factories
//!
//! All factories create real objects, not mocks.

use kgoc_access::config::{AccessConfig, StorageBackend};
use kgoc_access::{Role, UserAccount, UserRoleRecord};
use uuid::Uuid;

/// Factory for creating test accounts
pub struct AccountFactory;

impl AccountFactory {
    /// Create an account with a random id and email
    pub fn create() -> UserAccount {
        let id = Uuid::new_v4().to_string();
        let email = format!("crew-{}@kgoc.example", &id[..8]);
        UserAccount::new(id, email, Some("Field Crew".to_string()))
    }

    /// Create an account with a specific id
    pub fn with_id(id: &str) -> UserAccount {
        UserAccount::new(id, format!("{}@kgoc.example", id), None)
    }
}

/// Factory for role records
pub struct RoleRecordFactory;

impl RoleRecordFactory {
    pub fn assigned(user_id: &str, role: Role) -> UserRoleRecord {
        UserRoleRecord::new(user_id, role, Some("fixture".to_string()))
    }
}

/// Default configuration backed by the in-memory store
pub fn memory_config() -> AccessConfig {
    let mut config = AccessConfig::default();
    config.storage.backend = StorageBackend::Memory;
    config
}
