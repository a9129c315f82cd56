//! RBAC type definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field-operations role
///
/// `Admin` is the top-level role; `Administrator` is an ordinary role that
/// happens to carry the administration permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Well tester
    Welltester,
    /// Field operator
    Operator,
    /// Field supervisor
    Supervisor,
    /// Operations coordinator
    Coordinator,
    /// Site administrator
    Administrator,
    /// System administrator
    Admin,
}

impl Role {
    /// Every role, in declaration order
    pub const ALL: [Role; 6] = [
        Role::Welltester,
        Role::Operator,
        Role::Supervisor,
        Role::Coordinator,
        Role::Administrator,
        Role::Admin,
    ];

    /// Wire token for this role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Welltester => "welltester",
            Role::Operator => "operator",
            Role::Supervisor => "supervisor",
            Role::Coordinator => "coordinator",
            Role::Administrator => "administrator",
            Role::Admin => "admin",
        }
    }

    /// Human readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Welltester => "Well Tester",
            Role::Operator => "Operator",
            Role::Supervisor => "Supervisor",
            Role::Coordinator => "Coordinator",
            Role::Administrator => "Administrator",
            Role::Admin => "System Admin",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::Welltester => "Records and edits well test data in the field",
            Role::Operator => "Raises and updates well service requests",
            Role::Supervisor => "Approves well tests and assigns well services",
            Role::Coordinator => "Schedules well services and publishes reports",
            Role::Administrator => "Manages users, roles and system settings",
            Role::Admin => "Unrestricted access to every module",
        }
    }

    /// Whether this is the top-level admin role
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("Invalid role: {}", s))
    }
}

/// Permission token
///
/// The namespace is flat. The prefix before the action is only used to
/// group permissions for display and to derive module visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    WellTestView,
    WellTestCreate,
    WellTestEdit,
    WellTestDelete,
    WellTestApprove,
    WellTestExport,
    WellServiceView,
    WellServiceCreate,
    WellServiceEdit,
    WellServiceAssign,
    WellServiceClose,
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
}

impl Permission {
    /// Every permission, in declaration order
    pub const ALL: [Permission; 21] = [
        Permission::WellTestView,
        Permission::WellTestCreate,
        Permission::WellTestEdit,
        Permission::WellTestDelete,
        Permission::WellTestApprove,
        Permission::WellTestExport,
        Permission::WellServiceView,
        Permission::WellServiceCreate,
        Permission::WellServiceEdit,
        Permission::WellServiceAssign,
        Permission::WellServiceClose,
        Permission::AdminDashboard,
        Permission::AdminSystemLogs,
        Permission::AdminSettings,
        Permission::UserView,
        Permission::UserManage,
        Permission::UserAssignRoles,
        Permission::ReportView,
        Permission::ReportGenerate,
        Permission::NotificationView,
        Permission::NotificationSend,
    ];

    /// Wire token for this permission
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::WellTestView => "well_test_view",
            Permission::WellTestCreate => "well_test_create",
            Permission::WellTestEdit => "well_test_edit",
            Permission::WellTestDelete => "well_test_delete",
            Permission::WellTestApprove => "well_test_approve",
            Permission::WellTestExport => "well_test_export",
            Permission::WellServiceView => "well_service_view",
            Permission::WellServiceCreate => "well_service_create",
            Permission::WellServiceEdit => "well_service_edit",
            Permission::WellServiceAssign => "well_service_assign",
            Permission::WellServiceClose => "well_service_close",
            Permission::AdminDashboard => "admin_dashboard",
            Permission::AdminSystemLogs => "admin_system_logs",
            Permission::AdminSettings => "admin_settings",
            Permission::UserView => "user_view",
            Permission::UserManage => "user_manage",
            Permission::UserAssignRoles => "user_assign_roles",
            Permission::ReportView => "report_view",
            Permission::ReportGenerate => "report_generate",
            Permission::NotificationView => "notification_view",
            Permission::NotificationSend => "notification_send",
        }
    }

    /// Display group, taken from the token prefix
    pub fn group(&self) -> &'static str {
        PERMISSION_GROUPS
            .iter()
            .find(|(prefix, _)| self.as_str().starts_with(prefix))
            .map(|(_, name)| *name)
            .unwrap_or("other")
    }
}

/// Token prefix to display group name
const PERMISSION_GROUPS: [(&str, &str); 6] = [
    ("well_test_", "well_test"),
    ("well_service_", "well_service"),
    ("admin_", "admin"),
    ("user_", "user"),
    ("report_", "report"),
    ("notification_", "notification"),
];

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .iter()
            .copied()
            .find(|permission| permission.as_str() == s)
            .ok_or_else(|| format!("Invalid permission: {}", s))
    }
}

/// Major application section whose visibility is derived from permissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Module {
    WellTest,
    WellServices,
    Administration,
    UserManagement,
}

/// How a module's visibility is decided for non-admin roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleRule {
    /// Any held permission token starts with the prefix
    Prefix(&'static str),
    /// The single named permission is held
    Requires(Permission),
}

impl Module {
    pub const ALL: [Module; 4] = [
        Module::WellTest,
        Module::WellServices,
        Module::Administration,
        Module::UserManagement,
    ];

    pub fn rule(&self) -> ModuleRule {
        match self {
            Module::WellTest => ModuleRule::Prefix("well_test_"),
            Module::WellServices => ModuleRule::Prefix("well_service_"),
            Module::Administration => ModuleRule::Prefix("admin_"),
            Module::UserManagement => ModuleRule::Requires(Permission::UserManage),
        }
    }
}

/// Module visibility flags for one role
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibleModules {
    pub well_test: bool,
    pub well_services: bool,
    pub administration: bool,
    pub user_management: bool,
}

impl AccessibleModules {
    /// Every module enabled
    pub fn all() -> Self {
        Self {
            well_test: true,
            well_services: true,
            administration: true,
            user_management: true,
        }
    }

    /// Nothing enabled
    pub fn none() -> Self {
        Self::default()
    }

    pub fn get(&self, module: Module) -> bool {
        match module {
            Module::WellTest => self.well_test,
            Module::WellServices => self.well_services,
            Module::Administration => self.administration,
            Module::UserManagement => self.user_management,
        }
    }

    pub(super) fn set(&mut self, module: Module, enabled: bool) {
        match module {
            Module::WellTest => self.well_test = enabled,
            Module::WellServices => self.well_services = enabled,
            Module::Administration => self.administration = enabled,
            Module::UserManagement => self.user_management = enabled,
        }
    }
}

/// Permission check result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionCheck {
    /// Whether permission is granted
    pub granted: bool,
    /// Role that granted the permission
    pub granted_by_role: Option<Role>,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}

/// Role summary for listings
#[derive(Debug, Clone, Serialize)]
pub struct RoleSummary {
    pub role: Role,
    pub display_name: &'static str,
    pub description: &'static str,
    pub permissions: Vec<Permission>,
}
