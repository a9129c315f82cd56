//! Role and bootstrap configuration

use crate::auth::rbac::{Permission, Role};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// RBAC configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Role given to every user after the first
    #[serde(default = "default_role")]
    pub default_role: String,
    /// Promote the first registered account to admin
    #[serde(default = "super::default_true")]
    pub bootstrap_enabled: bool,
    /// Per-role replacement permission lists
    #[serde(default)]
    pub role_permissions: BTreeMap<Role, Vec<Permission>>,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            default_role: default_role(),
            bootstrap_enabled: true,
            role_permissions: BTreeMap::new(),
        }
    }
}

impl RbacConfig {
    /// Parsed default role
    pub fn parsed_default_role(&self) -> Result<Role, String> {
        self.default_role.parse()
    }
}

fn default_role() -> String {
    Role::Operator.as_str().to_string()
}
