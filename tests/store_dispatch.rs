use tallyfeed::counter::CounterIntent;
use tallyfeed::posts::{Post, PostsIntent, PostsState};
use tallyfeed::store::{AppIntent, Store};

#[test]
fn slices_reduce_independently() {
    let store = Store::new();

    store.dispatch(CounterIntent::IncrementBy(7));
    store.dispatch(PostsIntent::FetchStarted);
    store.dispatch(PostsIntent::FetchSucceeded {
        posts: vec![Post {
            name: "Alice".into(),
        }],
    });
    store.dispatch(CounterIntent::Decrement);

    let state = store.snapshot();
    assert_eq!(state.counter.count, 6);
    assert_eq!(
        state.posts,
        PostsState::Succeeded {
            posts: vec![Post {
                name: "Alice".into()
            }]
        }
    );
}

#[test]
fn app_intent_wraps_slice_intents() {
    let store = Store::new();
    store.dispatch(AppIntent::Counter(CounterIntent::Increment));
    store.dispatch(AppIntent::Posts(PostsIntent::FetchStarted));

    let state = store.snapshot();
    assert_eq!(state.counter.count, 1);
    assert!(state.posts.is_loading());
}

#[test]
fn subscription_sees_every_dispatch() {
    let store = Store::new();
    let rx = store.subscribe();

    store.dispatch(CounterIntent::Increment);
    store.dispatch(CounterIntent::Increment);
    store.dispatch(PostsIntent::FetchStarted);

    assert_eq!(*rx.borrow(), 3);
}

#[tokio::test]
async fn subscription_wakes_on_dispatch() {
    let store = Store::new();
    let mut rx = store.subscribe();

    let writer = store.clone();
    tokio::spawn(async move {
        writer.dispatch(CounterIntent::Increment);
    });

    rx.changed().await.expect("sender alive");
    assert_eq!(store.counter().count, 1);
}
