//! Test utilities
//!
//! An in-memory Twitter client and post fixtures for service and router tests.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
