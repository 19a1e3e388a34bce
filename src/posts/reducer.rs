//! Reducer for the post list request lifecycle.

use crate::store::Reducer;

use super::intent::PostsIntent;
use super::state::PostsState;

/// Reducer for fetch lifecycle transitions.
///
/// `FetchStarted` always moves to `Loading`, discarding any prior outcome,
/// so a re-triggered fetch starts from a clean slate. The completion
/// intents are terminal until the next `FetchStarted`.
pub struct PostsReducer;

impl Reducer for PostsReducer {
    type State = PostsState;
    type Intent = PostsIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PostsIntent::FetchStarted => PostsState::Loading,
            PostsIntent::FetchSucceeded { posts } => PostsState::Succeeded { posts },
            PostsIntent::FetchFailed { message } => PostsState::Failed { error: message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posts::Post;

    #[test]
    fn started_transitions_to_loading() {
        let state = PostsReducer::reduce(PostsState::Idle, PostsIntent::FetchStarted);
        assert_eq!(state, PostsState::Loading);
    }

    #[test]
    fn succeeded_stores_posts_in_order() {
        let posts = vec![
            Post {
                name: "Alice".into(),
            },
            Post { name: "Bob".into() },
        ];
        let state = PostsReducer::reduce(
            PostsState::Loading,
            PostsIntent::FetchSucceeded {
                posts: posts.clone(),
            },
        );
        assert_eq!(state, PostsState::Succeeded { posts });
    }

    #[test]
    fn failed_stores_message() {
        let state = PostsReducer::reduce(
            PostsState::Loading,
            PostsIntent::FetchFailed {
                message: "connection refused".into(),
            },
        );
        assert_eq!(state.error_message(), Some("connection refused"));
    }

    #[test]
    fn started_discards_prior_failure() {
        let failed = PostsState::Failed {
            error: "timeout".into(),
        };
        let state = PostsReducer::reduce(failed, PostsIntent::FetchStarted);
        assert_eq!(state, PostsState::Loading);
    }
}
