//! Intents for the post list request lifecycle.

use crate::store::Intent;

use super::state::Post;

/// The three lifecycle events of the single fetch, modeled as explicit
/// intents so the state machine is reducible without a network.
#[derive(Debug, Clone)]
pub enum PostsIntent {
    /// The request was issued and is now in flight.
    FetchStarted,

    /// The request completed with a decodable collection (possibly empty).
    FetchSucceeded { posts: Vec<Post> },

    /// The request failed.
    FetchFailed {
        /// Human-readable description of the failure.
        message: String,
    },
}

impl Intent for PostsIntent {}
