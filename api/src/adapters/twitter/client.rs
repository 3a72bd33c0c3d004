//! Twitter v2 API client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use urlencoding::encode;

use crate::domain::ports::{TimelinePage, TwitterClient, UserLookup};
use crate::error::{LookupError, TwitterError};

/// Tweet fields requested alongside each timeline post
const TIMELINE_TWEET_FIELDS: &str = "referenced_tweets";

/// Implementation of the Twitter API client (app-only bearer auth)
pub struct TwitterClientImpl {
    http: Client,
    base_url: String,
    bearer_token: String,
}

impl TwitterClientImpl {
    pub fn new(base_url: String, bearer_token: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/2{}", self.base_url, path)
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, TwitterError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| TwitterError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(TwitterError::Unauthorized)
        } else {
            let message = response.text().await.unwrap_or_default();
            // Error responses usually carry a problem document with a title and detail
            match serde_json::from_str::<ProblemResponse>(&message) {
                Ok(problem) => Err(LookupError::new(problem.title, problem.detail).into()),
                Err(_) => Err(TwitterError::Api {
                    status: status.as_u16(),
                    message,
                }),
            }
        }
    }
}

/// Problem document returned with non-2xx responses
#[derive(Deserialize)]
struct ProblemResponse {
    title: String,
    #[serde(default)]
    detail: String,
}

#[async_trait]
impl TwitterClient for TwitterClientImpl {
    async fn user_by_username(&self, username: &str) -> Result<UserLookup, TwitterError> {
        tracing::debug!("Looking up Twitter user {}", username);

        let resp = self
            .http
            .get(self.api_url(&format!("/users/by/username/{}", encode(username))))
            .bearer_auth(&self.bearer_token)
            .send()
            .await?;

        self.handle_response(resp).await
    }

    async fn user_timeline(
        &self,
        user_id: &str,
        max_results: u8,
    ) -> Result<TimelinePage, TwitterError> {
        tracing::debug!(
            "Fetching up to {} posts for Twitter user {}",
            max_results,
            user_id
        );

        let resp = self
            .http
            .get(self.api_url(&format!("/users/{}/tweets", encode(user_id))))
            .query(&[
                ("max_results", max_results.to_string()),
                ("tweet.fields", TIMELINE_TWEET_FIELDS.to_string()),
            ])
            .bearer_auth(&self.bearer_token)
            .send()
            .await?;

        self.handle_response(resp).await
    }
}
