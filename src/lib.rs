//! # KGOC Access
//!
//! Role-based access control for KGOC field operations.
//!
//! ## Features
//!
//! - **Role Registry**: six fixed roles and an immutable role → permission table
//! - **Permission Predicates**: `has_permission`, `has_any_permission`, `has_all_permissions`
//! - **Module Visibility**: which application sections a role may see
//! - **First-User Bootstrap**: exactly one account is ever promoted to admin automatically
//! - **Role Store**: SQLite/PostgreSQL via SeaORM, or in memory, with a TTL cache in front
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kgoc_access::{AccessSystem, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/access.yaml").await?;
//!     let access = AccessSystem::from_config(&config.access).await?;
//!
//!     let outcome = access.on_first_login("user-42").await?;
//!     println!("user-42 is {}", outcome.record.role);
//!     Ok(())
//! }
//! ```
//!
//! ## Permission checks
//!
//! ```rust
//! use kgoc_access::{Permission, Role, RoleRegistry};
//!
//! let registry = RoleRegistry::standard();
//! assert!(registry.has_permission(Role::Supervisor, Permission::WellTestApprove));
//! assert!(!registry.has_permission_token("ghost", "well_test_view"));
//! assert!(registry.accessible_modules(Role::Admin).user_management);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::rbac::{AccessibleModules, Module, Permission, Role, RoleRegistry};
pub use auth::{AccessSystem, BootstrapOutcome, Registration};
pub use config::Config;
pub use core::models::{FirstUserMarker, UserAccess, UserAccount, UserRoleRecord};
pub use storage::{ClaimOutcome, MemoryStore, RoleStore};
pub use utils::error::{AccessError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
        assert_eq!(NAME, "kgoc-access");
        assert!(!DESCRIPTION.is_empty());
    }
}
