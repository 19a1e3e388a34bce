//! Thread-safe aggregate state container.
//!
//! Holds every slice behind one lock and routes dispatched intents to the
//! matching slice reducer. Constructed once at the composition root and
//! handed to whatever needs it; there is no global instance.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;

use crate::counter::{CounterIntent, CounterReducer, CounterState};
use crate::posts::{PostsIntent, PostsReducer, PostsState};
use crate::store::Reducer;

/// Aggregate application state: one field per slice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub counter: CounterState,
    pub posts: PostsState,
}

/// Top-level intent: tags a slice intent with the slice it belongs to.
#[derive(Debug, Clone)]
pub enum AppIntent {
    Counter(CounterIntent),
    Posts(PostsIntent),
}

impl From<CounterIntent> for AppIntent {
    fn from(intent: CounterIntent) -> Self {
        AppIntent::Counter(intent)
    }
}

impl From<PostsIntent> for AppIntent {
    fn from(intent: PostsIntent) -> Self {
        AppIntent::Posts(intent)
    }
}

/// Change notification handle returned by [`Store::subscribe`].
///
/// Carries a version counter that increases on every dispatch. Receivers
/// can await changes or poll `has_changed`.
pub type StoreSubscription = watch::Receiver<u64>;

/// Run a slice reducer in place: take the current slice state, reduce,
/// store the result.
macro_rules! reduce_slice {
    ($state:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $state.$field = <$reducer>::reduce(std::mem::take(&mut $state.$field), $intent);
    };
}

/// Thread-safe state container with interior mutability.
///
/// Cloning is cheap; all clones share the same state. Multiple readers
/// can take snapshots concurrently while dispatch serializes writers.
#[derive(Clone)]
pub struct Store {
    inner: Arc<RwLock<AppState>>,
    version_tx: Arc<watch::Sender<u64>>,
}

impl Store {
    /// Create a store with every slice at its default initial state.
    pub fn new() -> Self {
        let (version_tx, _) = watch::channel(0);
        Self {
            inner: Arc::new(RwLock::new(AppState::default())),
            version_tx: Arc::new(version_tx),
        }
    }

    /// Get a clone of the whole aggregate state.
    ///
    /// This is cheap because AppState is Clone.
    pub fn snapshot(&self) -> AppState {
        self.inner.read().clone()
    }

    /// Get a clone of the counter slice.
    pub fn counter(&self) -> CounterState {
        self.inner.read().counter.clone()
    }

    /// Get a clone of the posts slice.
    pub fn posts(&self) -> PostsState {
        self.inner.read().posts.clone()
    }

    /// Apply one intent through the matching slice reducer.
    ///
    /// This is the sole mutation path. The reducer runs synchronously
    /// under the write lock; subscribers are notified afterwards.
    pub fn dispatch(&self, intent: impl Into<AppIntent>) {
        let intent = intent.into();
        tracing::debug!(?intent, "dispatch");
        {
            let mut state = self.inner.write();
            match intent {
                AppIntent::Counter(intent) => {
                    reduce_slice!(state, counter, CounterReducer, intent);
                }
                AppIntent::Posts(intent) => {
                    reduce_slice!(state, posts, PostsReducer, intent);
                }
            }
        }
        self.version_tx.send_modify(|version| *version += 1);
    }

    /// Subscribe to change notifications.
    ///
    /// The returned receiver observes a version counter bumped on every
    /// dispatch. It does not carry state; subscribers take a fresh
    /// snapshot when woken.
    pub fn subscribe(&self) -> StoreSubscription {
        self.version_tx.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_has_default_slices() {
        let store = Store::new();
        let state = store.snapshot();
        assert_eq!(state.counter, CounterState::default());
        assert_eq!(state.posts, PostsState::Idle);
    }

    #[test]
    fn dispatch_routes_to_counter_slice_only() {
        let store = Store::new();
        store.dispatch(CounterIntent::Increment);
        let state = store.snapshot();
        assert_eq!(state.counter.count, 1);
        assert_eq!(state.posts, PostsState::Idle);
    }

    #[test]
    fn dispatch_routes_to_posts_slice_only() {
        let store = Store::new();
        store.dispatch(PostsIntent::FetchStarted);
        let state = store.snapshot();
        assert_eq!(state.posts, PostsState::Loading);
        assert_eq!(state.counter.count, 0);
    }

    #[test]
    fn dispatch_bumps_subscription_version() {
        let store = Store::new();
        let rx = store.subscribe();
        assert_eq!(*rx.borrow(), 0);
        store.dispatch(CounterIntent::Increment);
        assert_eq!(*rx.borrow(), 1);
        store.dispatch(CounterIntent::Reset);
        assert_eq!(*rx.borrow(), 2);
    }

    #[test]
    fn clones_share_state() {
        let store = Store::new();
        let other = store.clone();
        store.dispatch(CounterIntent::IncrementBy(5));
        assert_eq!(other.counter().count, 5);
    }
}
