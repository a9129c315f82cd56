//! First-user bootstrap
//!
//! Exactly one account in the lifetime of a store is promoted to admin
//! automatically. The decision is delegated to the store's atomic
//! `claim_first_user`; nothing here reads and then writes.

use crate::auth::rbac::Role;
use crate::config::RbacConfig;
use crate::core::models::{UserAccount, UserRoleRecord};
use crate::storage::{ClaimOutcome, RoleStore};
use crate::utils::error::{AccessError, Result};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Initial role resolution result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BootstrapOutcome {
    pub record: UserRoleRecord,
    /// True only for the account that won the first-user claim
    pub granted_admin: bool,
}

impl BootstrapOutcome {
    fn existing(record: UserRoleRecord) -> Self {
        Self {
            record,
            granted_admin: false,
        }
    }
}

/// Initial role assignment for new accounts
pub struct FirstUserBootstrap {
    store: Arc<dyn RoleStore>,
    default_role: Role,
    enabled: bool,
}

impl FirstUserBootstrap {
    pub fn new(store: Arc<dyn RoleStore>, config: &RbacConfig) -> Result<Self> {
        let default_role = config.parsed_default_role().map_err(AccessError::Config)?;
        Ok(Self {
            store,
            default_role,
            enabled: config.bootstrap_enabled,
        })
    }

    pub fn default_role(&self) -> Role {
        self.default_role
    }

    /// Register `account` and resolve its initial role
    ///
    /// The account is written inside the claim when bootstrap is enabled, so
    /// two simultaneous registrations on an empty store cannot both see the
    /// other's account and both give up the claim.
    pub async fn register(&self, account: &UserAccount) -> Result<BootstrapOutcome> {
        if self.enabled {
            let record = UserRoleRecord::system(&account.id, Role::Admin);
            match self.store.claim_first_user(&record, Some(account)).await {
                Ok(ClaimOutcome::Claimed) => return Ok(Self::promoted(record)),
                Ok(outcome) => debug!("First-user claim for {}: {:?}", account.id, outcome),
                Err(e @ AccessError::Conflict(_)) => return Err(e),
                Err(e) => self.log_claim_failure(&account.id, &e),
            }
        }

        self.store.create_user(account).await?;
        self.existing_or_default(&account.id).await
    }

    /// Resolve the role of an already-known user id on first login
    ///
    /// An existing record is returned unchanged.
    pub async fn resolve_initial_role(&self, user_id: &str) -> Result<BootstrapOutcome> {
        if let Some(record) = self.store.get_role_record(user_id).await? {
            return Ok(BootstrapOutcome::existing(record));
        }

        if self.enabled {
            let record = UserRoleRecord::system(user_id, Role::Admin);
            match self.store.claim_first_user(&record, None).await {
                Ok(ClaimOutcome::Claimed) => return Ok(Self::promoted(record)),
                Ok(outcome) => debug!("First-user claim for {}: {:?}", user_id, outcome),
                Err(e) => self.log_claim_failure(user_id, &e),
            }
        }

        self.existing_or_default(user_id).await
    }

    async fn existing_or_default(&self, user_id: &str) -> Result<BootstrapOutcome> {
        if let Some(record) = self.store.get_role_record(user_id).await? {
            return Ok(BootstrapOutcome::existing(record));
        }

        let record = UserRoleRecord::system(user_id, self.default_role);
        self.store.put_role_record(&record).await?;
        debug!("Assigned default role {} to {}", self.default_role, user_id);
        Ok(BootstrapOutcome::existing(record))
    }

    fn promoted(record: UserRoleRecord) -> BootstrapOutcome {
        info!("Granted admin to first user {}", record.user_id);
        BootstrapOutcome {
            record,
            granted_admin: true,
        }
    }

    fn log_claim_failure(&self, user_id: &str, error: &AccessError) {
        // Treat as "not first user" so an unreachable store never grants admin.
        warn!(
            "First-user check failed for {}: {}; assigning {}",
            user_id, error, self.default_role
        );
    }
}
