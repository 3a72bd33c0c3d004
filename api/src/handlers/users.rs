//! User feed handlers
//!
//! Endpoints that render a user's timeline as RSS, addressed either by
//! username or by user id. Any upstream failure becomes an empty 500.

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::domain::entities::{InclusionOptions, Post};
use crate::domain::ports::TwitterClient;
use crate::error::AppError;
use crate::feed::{render_feed, FeedEntry};
use crate::AppState;

const RSS_CONTENT_TYPE: &str = "application/rss+xml";

/// Query string pairs, kept as a list so repeated keys stay visible
type QueryPairs = Vec<(String, String)>;

/// A flag is set only when it appears once with the literal value `true`
fn query_flag(query: &[(String, String)], name: &str) -> bool {
    let mut values = query
        .iter()
        .filter(|(key, _)| key == name)
        .map(|(_, value)| value.as_str());
    matches!((values.next(), values.next()), (Some("true"), None))
}

fn inclusion_options(query: &[(String, String)]) -> InclusionOptions {
    InclusionOptions {
        include_replies: query_flag(query, "includeReplies"),
        include_retweets: query_flag(query, "includeRetweets"),
        include_quote_tweets: query_flag(query, "includeQuoteTweets"),
    }
}

/// Fetch, filter and render the feed for a resolved user id
async fn serve_feed<TC: TwitterClient>(
    state: &AppState<TC>,
    user_id: &str,
    options: &InclusionOptions,
) -> Result<Response, AppError> {
    let posts: Vec<Post> = state
        .timeline_service
        .fetch_timeline(user_id, options)
        .await?;

    let entries: Vec<FeedEntry> = posts.iter().map(FeedEntry::from).collect();
    // The channel always names the configured account, not the requested one.
    let body = render_feed(&state.feed_username, &entries);

    Ok(([(header::CONTENT_TYPE, RSS_CONTENT_TYPE)], body).into_response())
}

/// GET /users/by-id/:user_id
///
/// Query flags: `includeReplies`, `includeRetweets`, `includeQuoteTweets`.
pub async fn get_feed_by_id<TC: TwitterClient + 'static>(
    State(state): State<AppState<TC>>,
    Path(user_id): Path<String>,
    Query(query): Query<QueryPairs>,
) -> Result<Response, AppError> {
    let options = inclusion_options(&query);
    serve_feed(&state, &user_id, &options).await
}

/// GET /users/by-username/:username
///
/// Resolves the username, then serves the same feed as the by-id route
/// with the incoming query string.
pub async fn get_feed_by_username<TC: TwitterClient + 'static>(
    State(state): State<AppState<TC>>,
    Path(username): Path<String>,
    Query(query): Query<QueryPairs>,
) -> Result<Response, AppError> {
    let user_id = state.timeline_service.resolve_user_id(&username).await?;
    tracing::debug!("Resolved @{} to user {}", username, user_id);

    let options = inclusion_options(&query);
    serve_feed(&state, &user_id, &options).await
}
