//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They record the calls they receive so tests can verify behavior.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::fixtures::not_found_problem;
use crate::domain::entities::{Post, TwitterUser};
use crate::domain::ports::{ApiProblem, TimelinePage, TwitterClient, UserLookup};
use crate::error::TwitterError;

// ============================================================================
// Mock Twitter Client
// ============================================================================

#[derive(Default)]
pub struct MockTwitterClient {
    users: Arc<RwLock<HashMap<String, UserLookup>>>,
    timelines: Arc<RwLock<HashMap<String, TimelinePage>>>,
    should_fail: bool,
    lookups: Arc<RwLock<Vec<String>>>,
    timeline_requests: Arc<RwLock<Vec<(String, u8)>>>,
}

impl MockTwitterClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails as if the upstream were unavailable
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Configure a user that resolves to the given id
    pub fn with_user(self, username: &str, id: &str) -> Self {
        self.users.write().unwrap().insert(
            username.to_string(),
            UserLookup {
                data: Some(TwitterUser {
                    id: id.to_string(),
                    name: username.to_string(),
                    username: username.to_string(),
                }),
                errors: vec![],
            },
        );
        self
    }

    /// Configure a user lookup that reports problems
    pub fn with_user_problems(self, username: &str, problems: Vec<ApiProblem>) -> Self {
        self.users.write().unwrap().insert(
            username.to_string(),
            UserLookup {
                data: None,
                errors: problems,
            },
        );
        self
    }

    /// Configure the posts returned for a user id
    pub fn with_timeline(self, user_id: &str, posts: Vec<Post>) -> Self {
        self.timelines.write().unwrap().insert(
            user_id.to_string(),
            TimelinePage {
                data: posts,
                errors: vec![],
            },
        );
        self
    }

    /// Configure a timeline request that reports problems
    pub fn with_timeline_problems(self, user_id: &str, problems: Vec<ApiProblem>) -> Self {
        self.timelines.write().unwrap().insert(
            user_id.to_string(),
            TimelinePage {
                data: vec![],
                errors: problems,
            },
        );
        self
    }

    /// Usernames passed to `user_by_username`, in call order
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.read().unwrap().clone()
    }

    /// (user id, max results) passed to `user_timeline`, in call order
    pub fn timeline_requests(&self) -> Vec<(String, u8)> {
        self.timeline_requests.read().unwrap().clone()
    }

    fn unavailable() -> TwitterError {
        TwitterError::Api {
            status: 503,
            message: "Mock failure".to_string(),
        }
    }
}

#[async_trait]
impl TwitterClient for MockTwitterClient {
    async fn user_by_username(&self, username: &str) -> Result<UserLookup, TwitterError> {
        self.lookups.write().unwrap().push(username.to_string());

        if self.should_fail {
            return Err(Self::unavailable());
        }

        let users = self.users.read().unwrap();
        Ok(users.get(username).cloned().unwrap_or_else(|| UserLookup {
            data: None,
            errors: vec![not_found_problem(username)],
        }))
    }

    async fn user_timeline(
        &self,
        user_id: &str,
        max_results: u8,
    ) -> Result<TimelinePage, TwitterError> {
        self.timeline_requests
            .write()
            .unwrap()
            .push((user_id.to_string(), max_results));

        if self.should_fail {
            return Err(Self::unavailable());
        }

        let timelines = self.timelines.read().unwrap();
        Ok(timelines
            .get(user_id)
            .cloned()
            .unwrap_or_else(|| TimelinePage {
                data: vec![],
                errors: vec![ApiProblem {
                    title: "Not Found Error".to_string(),
                    detail: format!("Could not find user with id: [{}].", user_id),
                    problem_type: None,
                    value: Some(user_id.to_string()),
                    resource_type: Some("user".to_string()),
                }],
            }))
    }
}
