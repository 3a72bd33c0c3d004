//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing posts and users
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
