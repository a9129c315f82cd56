//! Core data models
//!
//! Records persisted by the storage layer and returned by the HTTP API.

pub mod records;

pub use records::{FirstUserMarker, SYSTEM_ACTOR, UserAccess, UserAccount, UserRoleRecord};
