//! Timeline service
//!
//! Resolves handles to user ids and fetches filtered timelines.
//! One upstream call per operation, no retries.

use std::sync::Arc;

use crate::domain::entities::{InclusionOptions, Post};
use crate::domain::ports::{ApiProblem, TwitterClient};
use crate::error::{LookupError, TwitterError};

/// Most posts the timeline endpoint returns in one page.
/// Only the first page is ever fetched.
pub const TIMELINE_PAGE_SIZE: u8 = 100;

/// Service for resolving users and reading their timelines
pub struct TimelineService<TC>
where
    TC: TwitterClient,
{
    twitter: Arc<TC>,
}

impl<TC> TimelineService<TC>
where
    TC: TwitterClient,
{
    pub fn new(twitter: Arc<TC>) -> Self {
        Self { twitter }
    }

    /// Resolve a username to the stable user id reported by Twitter
    pub async fn resolve_user_id(&self, username: &str) -> Result<String, TwitterError> {
        let lookup = self.twitter.user_by_username(username).await?;
        check_problems(&lookup.errors)?;

        lookup.data.map(|user| user.id).ok_or_else(|| {
            TwitterError::Deserialization(format!(
                "user lookup for {} returned neither data nor errors",
                username
            ))
        })
    }

    /// Fetch the most recent page of a user's posts, dropping the ones the
    /// options exclude. Upstream order is preserved.
    pub async fn fetch_timeline(
        &self,
        user_id: &str,
        options: &InclusionOptions,
    ) -> Result<Vec<Post>, TwitterError> {
        let page = self
            .twitter
            .user_timeline(user_id, TIMELINE_PAGE_SIZE)
            .await?;
        check_problems(&page.errors)?;

        let fetched = page.data.len();
        let posts: Vec<Post> = page
            .data
            .into_iter()
            .filter(|post| options.keeps(post))
            .collect();

        tracing::debug!(
            "Kept {} of {} posts for user {} ({:?})",
            posts.len(),
            fetched,
            user_id,
            options
        );

        Ok(posts)
    }
}

/// The first reported problem becomes the error
fn check_problems(problems: &[ApiProblem]) -> Result<(), LookupError> {
    match problems.first() {
        Some(problem) => Err(problem.into()),
        None => Ok(()),
    }
}
