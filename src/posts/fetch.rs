//! The single outbound fetch and its error taxonomy.
//!
//! The transport sits behind [`PostsApi`] so the lifecycle can be driven
//! with a fake in tests. The real transport is one reqwest GET with no
//! retries, no caching, and no cancellation.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::posts::{Post, PostsIntent};
use crate::store::Store;

/// Errors that can occur while fetching the post collection.
///
/// The causes stay distinct here even though the posts slice collapses
/// them into one displayed message.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("request failed: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status code.
    #[error("server returned status {status}")]
    Status { status: u16 },

    /// The body arrived but was not a decodable post collection.
    #[error("undecodable response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

/// Transport abstraction for the post collection.
pub trait PostsApi: Send + Sync {
    /// Issue one request for the full collection.
    fn fetch_posts(&self) -> impl Future<Output = Result<Vec<Post>, FetchError>> + Send;
}

/// reqwest-backed transport against the configured endpoint.
pub struct HttpPostsApi {
    client: Client,
    url: String,
}

impl HttpPostsApi {
    pub fn new(config: &ApiConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .timeout(Duration::from_secs(u64::from(config.request_timeout_seconds)))
            .build()
            .expect("Failed to build posts client");

        Self {
            client,
            url: config.posts_url.clone(),
        }
    }
}

impl PostsApi for HttpPostsApi {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| FetchError::Network { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Network { source })?;

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode { source })
    }
}

/// Drive the whole fetch lifecycle against the store.
///
/// Dispatches `FetchStarted` before the request goes out, then exactly one
/// completion intent. Failures are converted into state and never
/// propagated to the caller.
pub async fn load_posts<A: PostsApi>(api: &A, store: &Store) {
    store.dispatch(PostsIntent::FetchStarted);

    match api.fetch_posts().await {
        Ok(posts) => {
            tracing::info!(count = posts.len(), "posts fetched");
            store.dispatch(PostsIntent::FetchSucceeded { posts });
        }
        Err(err) => {
            tracing::warn!(error = %err, "posts fetch failed");
            store.dispatch(PostsIntent::FetchFailed {
                message: err.to_string(),
            });
        }
    }
}
