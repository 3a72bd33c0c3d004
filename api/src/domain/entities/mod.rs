//! Domain entities
//!
//! Pure domain models for users, posts, and the rules that filter them.

pub mod post;
pub mod user;

#[allow(unused_imports)]
pub use post::{InclusionOptions, Post, PostReference, ReferenceKind};
pub use user::TwitterUser;
