//! Access system facade shared by the HTTP server and the CLI

use super::bootstrap::{BootstrapOutcome, FirstUserBootstrap};
use super::rbac::{AccessibleModules, Permission, Role, RoleRegistry};
use crate::config::AccessConfig;
use crate::core::models::{FirstUserMarker, UserAccess, UserAccount, UserRoleRecord};
use crate::storage::{self, CacheLookup, CacheStats, RoleCache, RoleStore};
use crate::utils::error::{AccessError, Result};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of registering an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub account: UserAccount,
    pub record: UserRoleRecord,
    pub granted_admin: bool,
}

/// Role lookups, assignments and bootstrap over one store
pub struct AccessSystem {
    registry: Arc<RoleRegistry>,
    store: Arc<dyn RoleStore>,
    cache: RoleCache,
    bootstrap: FirstUserBootstrap,
    serve_stale_on_error: bool,
}

impl AccessSystem {
    /// Build from an already opened store
    pub fn new(
        registry: Arc<RoleRegistry>,
        store: Arc<dyn RoleStore>,
        config: &AccessConfig,
    ) -> Result<Self> {
        let bootstrap = FirstUserBootstrap::new(store.clone(), &config.rbac)?;
        Ok(Self {
            registry,
            store,
            cache: RoleCache::new(&config.cache),
            bootstrap,
            serve_stale_on_error: config.cache.serve_stale_on_error,
        })
    }

    /// Build the registry and open the configured store
    pub async fn from_config(config: &AccessConfig) -> Result<Self> {
        info!("Initializing access system");
        let registry = Arc::new(RoleRegistry::from_config(&config.rbac));
        let store = storage::open_store(&config.storage).await?;
        let system = Self::new(registry, store, config)?;
        info!(
            "Access system initialized (default role: {})",
            system.bootstrap.default_role()
        );
        Ok(system)
    }

    pub fn registry(&self) -> &Arc<RoleRegistry> {
        &self.registry
    }

    pub fn store(&self) -> &Arc<dyn RoleStore> {
        &self.store
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Register a new account and assign its initial role
    pub async fn register_user(&self, account: UserAccount) -> Result<Registration> {
        if account.id.trim().is_empty() {
            return Err(AccessError::validation("User id must not be empty"));
        }
        if !account.email.contains('@') {
            return Err(AccessError::validation(format!(
                "Invalid email address: {}",
                account.email
            )));
        }

        let outcome = self.bootstrap.register(&account).await?;
        self.cache.insert(&outcome.record);
        info!(
            "Registered user {} with role {}",
            account.id, outcome.record.role
        );

        Ok(Registration {
            account,
            record: outcome.record,
            granted_admin: outcome.granted_admin,
        })
    }

    /// First-login role resolution for an upstream-authenticated user id
    ///
    /// No local account is required. The first-user claim still fails once
    /// any other account or role record exists.
    pub async fn on_first_login(&self, user_id: &str) -> Result<BootstrapOutcome> {
        let outcome = self.bootstrap.resolve_initial_role(user_id).await?;
        self.cache.insert(&outcome.record);
        Ok(outcome)
    }

    /// Role record of a user, served from cache while fresh
    pub async fn get_role_record(&self, user_id: &str) -> Result<Option<UserRoleRecord>> {
        let stale = match self.cache.lookup(user_id) {
            CacheLookup::Fresh(record) => return Ok(Some(record)),
            CacheLookup::Stale(record) => Some(record),
            CacheLookup::Miss => None,
        };

        match self.store.get_role_record(user_id).await {
            Ok(Some(record)) => {
                self.cache.insert(&record);
                Ok(Some(record))
            }
            Ok(None) => {
                self.cache.invalidate(user_id);
                Ok(None)
            }
            Err(e) if self.serve_stale_on_error && e.is_storage_failure() => match stale {
                Some(record) => {
                    warn!(
                        "Role store read failed for {}: {}; serving cached role {}",
                        user_id, e, record.role
                    );
                    self.cache.note_stale_served();
                    Ok(Some(record))
                }
                None => Err(e),
            },
            Err(e) => Err(e),
        }
    }

    pub async fn get_user_role(&self, user_id: &str) -> Result<Option<Role>> {
        Ok(self.get_role_record(user_id).await?.map(|record| record.role))
    }

    /// Validate `role` and overwrite the user's record
    pub async fn set_user_role(
        &self,
        user_id: &str,
        role: &str,
        assigned_by: Option<&str>,
    ) -> Result<UserRoleRecord> {
        if user_id.trim().is_empty() {
            return Err(AccessError::validation("User id must not be empty"));
        }
        let role: Role = role.parse().map_err(AccessError::Validation)?;

        let record = UserRoleRecord::new(user_id, role, assigned_by.map(str::to_string));
        if let Err(e) = self.store.put_role_record(&record).await {
            self.cache.invalidate(user_id);
            return Err(e);
        }
        self.cache.insert(&record);

        debug!("Set role of {} to {}", user_id, role);
        Ok(record)
    }

    /// Role change on behalf of `actor_id`, who must hold `user_assign_roles`
    pub async fn assign_role(
        &self,
        actor_id: &str,
        user_id: &str,
        role: &str,
    ) -> Result<UserRoleRecord> {
        self.require_permission(actor_id, Permission::UserAssignRoles)
            .await?;
        let record = self.set_user_role(user_id, role, Some(actor_id)).await?;
        info!("{} assigned role {} to {}", actor_id, record.role, user_id);
        Ok(record)
    }

    /// Effective permissions and module visibility for a user
    pub async fn user_access(&self, user_id: &str) -> Result<UserAccess> {
        let role = self.get_user_role(user_id).await?;
        let (permissions, modules) = match role {
            Some(role) => (
                self.registry.permissions_for(role).to_vec(),
                self.registry.accessible_modules(role),
            ),
            None => (Vec::new(), AccessibleModules::none()),
        };

        Ok(UserAccess {
            user_id: user_id.to_string(),
            role,
            permissions,
            modules,
        })
    }

    /// All role records, for actors holding `user_view`
    pub async fn list_role_records(&self, actor_id: &str) -> Result<Vec<UserRoleRecord>> {
        self.require_permission(actor_id, Permission::UserView)
            .await?;
        self.store.list_role_records().await
    }

    pub async fn first_user_marker(&self) -> Result<Option<FirstUserMarker>> {
        self.store.first_user_marker().await
    }

    /// Fail with an authorization error unless `actor_id` holds `permission`
    pub async fn require_permission(&self, actor_id: &str, permission: Permission) -> Result<Role> {
        let role = self.get_user_role(actor_id).await?.ok_or_else(|| {
            AccessError::authorization(format!("User {} has no role", actor_id))
        })?;

        let check = self.registry.check_permission(role, permission);
        if check.granted {
            Ok(role)
        } else {
            Err(AccessError::Authorization(
                check
                    .denial_reason
                    .unwrap_or_else(|| format!("Permission denied: {}", permission)),
            ))
        }
    }

    pub async fn health_check(&self) -> Result<()> {
        self.store.health_check().await
    }
}
