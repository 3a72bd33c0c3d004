//! Timeline RSS proxy
//!
//! Serves a Twitter user's recent posts as an RSS feed, optionally leaving
//! out replies, retweets and quote tweets.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::TwitterClientImpl;
use app::TimelineService;
use config::Config;
use domain::ports::TwitterClient;

/// Application state shared across all handlers
pub struct AppState<TC: TwitterClient> {
    pub timeline_service: Arc<TimelineService<TC>>,
    pub feed_username: String,
}

impl<TC: TwitterClient> Clone for AppState<TC> {
    fn clone(&self) -> Self {
        Self {
            timeline_service: self.timeline_service.clone(),
            feed_username: self.feed_username.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router for the given state
pub fn build_router<TC: TwitterClient + 'static>(state: AppState<TC>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Feeds
        .route(
            "/users/by-username/:username",
            get(handlers::get_feed_by_username::<TC>),
        )
        .route("/users/by-id/:user_id", get(handlers::get_feed_by_id::<TC>))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,timeline_rss=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting timeline RSS proxy...");

    // Load configuration
    let config = Config::from_env()?;

    // One client for the whole process
    let twitter_client = Arc::new(TwitterClientImpl::new(
        config.twitter_api_url.clone(),
        config.twitter_bearer_token.clone(),
    ));

    let state = AppState {
        timeline_service: Arc::new(TimelineService::new(twitter_client)),
        feed_username: config.feed_username.clone(),
    };

    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
