//! Role registry: the immutable role → permission table

use crate::config::RbacConfig;
use std::collections::BTreeMap;
use tracing::{debug, info};

use super::types::{Permission, Role, RoleSummary};

/// Immutable role → permission table
///
/// Built once at startup and shared behind `Arc`. Nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRegistry {
    pub(super) table: BTreeMap<Role, Vec<Permission>>,
}

impl RoleRegistry {
    /// The standard KGOC table
    pub fn standard() -> Self {
        use Permission::*;

        let mut table = BTreeMap::new();
        table.insert(
            Role::Welltester,
            vec![
                WellTestView,
                WellTestCreate,
                WellTestEdit,
                WellServiceView,
                ReportView,
                NotificationView,
            ],
        );
        table.insert(
            Role::Operator,
            vec![
                WellTestView,
                WellServiceView,
                WellServiceCreate,
                WellServiceEdit,
                ReportView,
                NotificationView,
            ],
        );
        table.insert(
            Role::Supervisor,
            vec![
                WellTestView,
                WellTestCreate,
                WellTestEdit,
                WellTestApprove,
                WellTestExport,
                WellServiceView,
                WellServiceEdit,
                WellServiceAssign,
                WellServiceClose,
                UserView,
                ReportView,
                ReportGenerate,
                NotificationView,
                NotificationSend,
            ],
        );
        table.insert(
            Role::Coordinator,
            vec![
                WellTestView,
                WellTestExport,
                WellServiceView,
                WellServiceCreate,
                WellServiceEdit,
                WellServiceAssign,
                UserView,
                ReportView,
                ReportGenerate,
                NotificationView,
                NotificationSend,
            ],
        );
        table.insert(
            Role::Administrator,
            vec![
                WellTestView,
                WellServiceView,
                AdminDashboard,
                AdminSystemLogs,
                AdminSettings,
                UserView,
                UserManage,
                UserAssignRoles,
                ReportView,
                ReportGenerate,
                NotificationView,
                NotificationSend,
            ],
        );
        table.insert(Role::Admin, Permission::ALL.to_vec());

        Self { table }
    }

    /// Standard table with the per-role replacement lists from configuration
    pub fn from_config(config: &RbacConfig) -> Self {
        let mut registry = Self::standard();

        for (role, permissions) in &config.role_permissions {
            let mut deduped: Vec<Permission> = Vec::with_capacity(permissions.len());
            for permission in permissions {
                if !deduped.contains(permission) {
                    deduped.push(*permission);
                }
            }
            debug!(
                "Overriding permissions for role {}: {} entries",
                role,
                deduped.len()
            );
            registry.table.insert(*role, deduped);
        }

        info!(
            "Role registry initialized with {} roles ({} overridden)",
            registry.table.len(),
            config.role_permissions.len()
        );
        registry
    }

    /// Ordered permission list for a role
    pub fn permissions_for(&self, role: Role) -> &[Permission] {
        self.table.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Permissions for a role grouped by token prefix, in table order
    pub fn grouped_permissions(&self, role: Role) -> BTreeMap<&'static str, Vec<Permission>> {
        let mut groups: BTreeMap<&'static str, Vec<Permission>> = BTreeMap::new();
        for permission in self.permissions_for(role) {
            groups.entry(permission.group()).or_default().push(*permission);
        }
        groups
    }

    /// List all roles with their permissions
    pub fn list_roles(&self) -> Vec<RoleSummary> {
        Role::ALL
            .iter()
            .map(|role| RoleSummary {
                role: *role,
                display_name: role.display_name(),
                description: role.description(),
                permissions: self.permissions_for(*role).to_vec(),
            })
            .collect()
    }
}

impl Default for RoleRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
