mod fetch;
mod intent;
mod reducer;
mod state;

pub use fetch::{load_posts, FetchError, HttpPostsApi, PostsApi};
pub use intent::PostsIntent;
pub use reducer::PostsReducer;
pub use state::{Post, PostsState};
