//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{Post, PostReference, ReferenceKind};
use crate::domain::ports::ApiProblem;

/// Create a post with no references
pub fn test_post(id: &str, text: &str) -> Post {
    Post {
        id: id.to_string(),
        text: text.to_string(),
        references: vec![],
    }
}

/// Create a post with a single reference of the given kind
pub fn test_post_referencing(id: &str, text: &str, kind: ReferenceKind) -> Post {
    Post {
        id: id.to_string(),
        text: text.to_string(),
        references: vec![PostReference {
            kind,
            id: format!("{}-target", id),
        }],
    }
}

pub fn test_reply(id: &str, text: &str) -> Post {
    test_post_referencing(id, text, ReferenceKind::RepliedTo)
}

pub fn test_retweet(id: &str, text: &str) -> Post {
    test_post_referencing(id, text, ReferenceKind::Retweeted)
}

pub fn test_quote(id: &str, text: &str) -> Post {
    test_post_referencing(id, text, ReferenceKind::Quoted)
}

/// The problem Twitter reports for a username that does not exist
pub fn not_found_problem(username: &str) -> ApiProblem {
    ApiProblem {
        title: "Not Found Error".to_string(),
        detail: format!("Could not find user with username: [{}].", username),
        problem_type: Some("https://api.twitter.com/2/problems/resource-not-found".to_string()),
        value: Some(username.to_string()),
        resource_type: Some("user".to_string()),
    }
}
