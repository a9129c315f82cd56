//! Error handling for the access service
//!
//! This module defines the error type shared by the registry, storage, and HTTP layers.

mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{AccessError, Result};
