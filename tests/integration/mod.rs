//! Integration tests for kgoc-access
//!
//! These tests verify the interaction between multiple components
//! and test real system behavior without mocking.

pub mod bootstrap_tests;
pub mod config_validation_tests;
pub mod database_tests;
