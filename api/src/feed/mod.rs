//! Feed module
//!
//! RSS rendering of a user's posts.

pub mod escape;
pub mod renderer;

pub use renderer::{render_feed, FeedEntry};
