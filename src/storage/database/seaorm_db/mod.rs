// Module declarations
mod types;
mod connection;
mod user_ops;
mod role_ops;
mod bootstrap_ops;
mod store;

// Re-export public types
pub use types::{DatabaseBackendType, SeaOrmDatabase};
