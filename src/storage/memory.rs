//! In-memory role store
//!
//! All state sits behind one lock, so the first-user claim is a single
//! critical section.

use super::{ClaimOutcome, RoleStore};
use crate::core::models::{FirstUserMarker, UserAccount, UserRoleRecord};
use crate::utils::error::{AccessError, Result};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Default)]
struct MemoryState {
    users: BTreeMap<String, UserAccount>,
    roles: BTreeMap<String, UserRoleRecord>,
    first_user: Option<FirstUserMarker>,
}

/// Process-local store
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoleStore for MemoryStore {
    async fn get_role_record(&self, user_id: &str) -> Result<Option<UserRoleRecord>> {
        Ok(self.state.lock().roles.get(user_id).cloned())
    }

    async fn put_role_record(&self, record: &UserRoleRecord) -> Result<()> {
        debug!("Storing role {} for user {}", record.role, record.user_id);
        self.state
            .lock()
            .roles
            .insert(record.user_id.clone(), record.clone());
        Ok(())
    }

    async fn list_role_records(&self) -> Result<Vec<UserRoleRecord>> {
        Ok(self.state.lock().roles.values().cloned().collect())
    }

    async fn count_role_records(&self) -> Result<u64> {
        Ok(self.state.lock().roles.len() as u64)
    }

    async fn create_user(&self, account: &UserAccount) -> Result<()> {
        let mut state = self.state.lock();
        if state.users.contains_key(&account.id) {
            return Err(AccessError::conflict(format!(
                "User {} already exists",
                account.id
            )));
        }
        if state.users.values().any(|u| u.email == account.email) {
            return Err(AccessError::conflict(format!(
                "Email {} is already registered",
                account.email
            )));
        }
        state.users.insert(account.id.clone(), account.clone());
        Ok(())
    }

    async fn find_user(&self, user_id: &str) -> Result<Option<UserAccount>> {
        Ok(self.state.lock().users.get(user_id).cloned())
    }

    async fn count_users(&self) -> Result<u64> {
        Ok(self.state.lock().users.len() as u64)
    }

    async fn claim_first_user(
        &self,
        record: &UserRoleRecord,
        account: Option<&UserAccount>,
    ) -> Result<ClaimOutcome> {
        let mut state = self.state.lock();

        if state.first_user.is_some() {
            return Ok(ClaimOutcome::AlreadyClaimed);
        }
        let other_users = state.users.keys().any(|id| id != &record.user_id);
        if !state.roles.is_empty() || other_users {
            return Ok(ClaimOutcome::StoreNotEmpty);
        }
        if let Some(account) = account {
            if state.users.contains_key(&account.id) {
                return Err(AccessError::conflict(format!(
                    "User {} already exists",
                    account.id
                )));
            }
            state.users.insert(account.id.clone(), account.clone());
        }

        state.first_user = Some(FirstUserMarker {
            user_id: record.user_id.clone(),
            claimed_at: record.assigned_at,
        });
        state.roles.insert(record.user_id.clone(), record.clone());
        Ok(ClaimOutcome::Claimed)
    }

    async fn first_user_marker(&self) -> Result<Option<FirstUserMarker>> {
        Ok(self.state.lock().first_user.clone())
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
