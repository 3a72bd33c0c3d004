//! Twitter client port trait
//!
//! Defines the interface for reading users and timelines from the Twitter v2 API.
//! Payloads are returned as the API reports them, including the `errors` array;
//! interpreting those errors is left to the application layer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::entities::post::deserialize_null_default;
use crate::domain::entities::{Post, TwitterUser};
use crate::error::{LookupError, TwitterError};

/// One entry of the `errors` array in a Twitter API payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiProblem {
    pub title: String,
    #[serde(default)]
    pub detail: String,
    #[serde(rename = "type", default)]
    pub problem_type: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
}

impl From<&ApiProblem> for LookupError {
    fn from(problem: &ApiProblem) -> Self {
        LookupError::new(problem.title.clone(), problem.detail.clone())
    }
}

/// Response of `GET /2/users/by/username/:username`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserLookup {
    #[serde(default)]
    pub data: Option<TwitterUser>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub errors: Vec<ApiProblem>,
}

/// Response of `GET /2/users/:id/tweets`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimelinePage {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub data: Vec<Post>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub errors: Vec<ApiProblem>,
}

/// Port trait for Twitter API operations
#[async_trait]
pub trait TwitterClient: Send + Sync {
    /// Look up a user by their handle
    async fn user_by_username(&self, username: &str) -> Result<UserLookup, TwitterError>;

    /// Fetch a single page of the most recent posts for a user
    async fn user_timeline(
        &self,
        user_id: &str,
        max_results: u8,
    ) -> Result<TimelinePage, TwitterError>;
}
