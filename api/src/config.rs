use std::env;

use anyhow::{Context, Result};

/// Default HTTP listen port
const DEFAULT_PORT: u16 = 4567;

#[derive(Clone, Debug)]
pub struct Config {
    /// App-only bearer token for the Twitter v2 API
    pub twitter_bearer_token: String,
    pub twitter_api_url: String,
    /// Username shown in the channel title and link of every rendered feed
    pub feed_username: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            twitter_bearer_token: lookup("TWITTER_BEARER_TOKEN")
                .context("TWITTER_BEARER_TOKEN must be set")?,
            twitter_api_url: lookup("TWITTER_API_URL")
                .unwrap_or_else(|| "https://api.twitter.com".to_string()),
            feed_username: lookup("FEED_USERNAME").unwrap_or_else(|| "eritbh".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        })
    }
}
