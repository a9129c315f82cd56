//! Authorization system
//!
//! Role registry and predicates live in [`rbac`]. [`bootstrap`] decides the
//! initial role of a new account, and [`AccessSystem`] ties both to the
//! role store and cache.

pub mod bootstrap;
pub mod rbac;
mod system;

pub use bootstrap::{BootstrapOutcome, FirstUserBootstrap};
pub use system::{AccessSystem, Registration};
