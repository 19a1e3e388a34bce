//! State for the post list request lifecycle.

use serde::Deserialize;

use crate::store::SliceState;

/// One entry from the remote collection.
///
/// The remote schema is opaque beyond `name`; unknown fields are ignored
/// during decoding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Post {
    pub name: String,
}

/// Lifecycle state of the single outbound fetch.
///
/// The payload-carrying shape keeps the invariants structural: an error
/// message exists only under `Failed`, items only under `Succeeded`, and
/// an empty successful result stays distinguishable from `Idle`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PostsState {
    /// No fetch has been issued yet.
    #[default]
    Idle,

    /// A fetch is in flight.
    Loading,

    /// The fetch completed with a decodable body (possibly empty).
    Succeeded { posts: Vec<Post> },

    /// The fetch failed: network error, bad status, or undecodable body.
    Failed { error: String },
}

impl SliceState for PostsState {}

impl PostsState {
    /// Check whether a fetch is currently in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Get the fetched posts, if the fetch succeeded.
    pub fn posts(&self) -> Option<&[Post]> {
        match self {
            Self::Succeeded { posts } => Some(posts),
            _ => None,
        }
    }

    /// Get the failure message, if the fetch failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { error } => Some(error),
            _ => None,
        }
    }
}
