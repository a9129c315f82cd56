//! Permission predicates
//!
//! All predicates are pure and infallible: a missing mapping means no permissions.

use super::registry::RoleRegistry;
use super::types::{Permission, PermissionCheck, Role};

impl RoleRegistry {
    /// True iff `permission` is in the list for `role`
    pub fn has_permission(&self, role: Role, permission: Permission) -> bool {
        self.permissions_for(role).contains(&permission)
    }

    /// String form used at the wire boundary
    ///
    /// Unknown roles, empty tokens and unknown permissions all yield `false`.
    pub fn has_permission_token(&self, role: &str, permission: &str) -> bool {
        if permission.is_empty() {
            return false;
        }
        match (role.parse::<Role>(), permission.parse::<Permission>()) {
            (Ok(role), Ok(permission)) => self.has_permission(role, permission),
            _ => false,
        }
    }

    /// True if the role holds at least one of `permissions`; false for an empty list
    pub fn has_any_permission(&self, role: Role, permissions: &[Permission]) -> bool {
        permissions.iter().any(|p| self.has_permission(role, *p))
    }

    /// True if the role holds every one of `permissions`; true for an empty list
    pub fn has_all_permissions(&self, role: Role, permissions: &[Permission]) -> bool {
        permissions.iter().all(|p| self.has_permission(role, *p))
    }

    /// Detailed permission check
    pub fn check_permission(&self, role: Role, permission: Permission) -> PermissionCheck {
        if self.has_permission(role, permission) {
            PermissionCheck {
                granted: true,
                granted_by_role: Some(role),
                denial_reason: None,
            }
        } else {
            PermissionCheck {
                granted: false,
                granted_by_role: None,
                denial_reason: Some(format!(
                    "Role {} is missing permission: {}",
                    role, permission
                )),
            }
        }
    }
}
