//! Utility modules for the access service
//!
//! - **error**: error type and HTTP error mapping
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;
