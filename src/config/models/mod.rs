//! Configuration data models
//!
//! This module defines all configuration structures used by the access service.

#![allow(missing_docs)]

pub mod access;
pub mod cache;
pub mod logging;
pub mod rbac;
pub mod server;
pub mod storage;

pub use access::*;
pub use cache::*;
pub use logging::*;
pub use rbac::*;
pub use server::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_cache_ttl() -> u64 {
    300 // 5 minutes
}

pub fn default_cache_max_size() -> usize {
    10_000
}

pub fn default_true() -> bool {
    true
}
