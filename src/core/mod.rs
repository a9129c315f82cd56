//! Core data structures for the access service

pub mod models;
