/// System configuration entity module
pub mod system_config;
/// User entity module
pub mod user;
/// User role entity module
pub mod user_role;

pub use system_config::Entity as SystemConfig;
pub use user::Entity as User;
pub use user_role::Entity as UserRole;
