//! Common test utilities for kgoc-access
//!
//! - In-memory and file-backed SQLite databases
//! - Account and configuration fixtures
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{database, fixtures};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let db = database::TestDatabase::new().await;
//!     let account = fixtures::AccountFactory::create();
//!     // ...
//! }
//! ```

pub mod database;
pub mod fixtures;

// Re-export commonly used items
pub use database::TestDatabase;
pub use fixtures::AccountFactory;

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
