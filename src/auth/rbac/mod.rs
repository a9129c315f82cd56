//! Role-Based Access Control (RBAC)
//!
//! Static role registry, permission predicates and module visibility.

mod modules;
mod permissions;
mod registry;
mod types;

pub use registry::RoleRegistry;
pub use types::{
    AccessibleModules, Module, ModuleRule, Permission, PermissionCheck, Role, RoleSummary,
};
