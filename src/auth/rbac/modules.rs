//! Module accessibility derivation
//!
//! This only decides what the client renders. Operations that matter
//! re-check permissions on the server side.

use super::registry::RoleRegistry;
use super::types::{AccessibleModules, Module, ModuleRule, Role};

impl RoleRegistry {
    /// Module visibility for a role
    pub fn accessible_modules(&self, role: Role) -> AccessibleModules {
        // The top-level admin sees everything, whatever the table says.
        if role.is_admin() {
            return AccessibleModules::all();
        }

        let permissions = self.permissions_for(role);
        let mut modules = AccessibleModules::none();
        for module in Module::ALL {
            let enabled = match module.rule() {
                ModuleRule::Prefix(prefix) => {
                    permissions.iter().any(|p| p.as_str().starts_with(prefix))
                }
                ModuleRule::Requires(permission) => permissions.contains(&permission),
            };
            modules.set(module, enabled);
        }
        modules
    }
}
