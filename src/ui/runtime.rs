use std::time::Duration;

use crate::config::Config;
use crate::posts::{load_posts, HttpPostsApi};
use crate::store::Store;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal::setup_terminal;

/// Compose the store, issue the one-shot fetch, and run the event loop
/// until quit.
pub fn run(config: Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let store = Store::new();

    // View activation: the single fetch goes out exactly once, here.
    let api = HttpPostsApi::new(&config.api);
    {
        let store = store.clone();
        runtime.spawn(async move {
            load_posts(&api, &store).await;
        });
    }

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = App::new(store.clone(), config.counter.step);
    let events = EventHandler::new(tick_rate);
    let mut changes = store.subscribe();

    terminal.draw(|frame| draw(frame, &app))?;
    loop {
        if app.should_quit() {
            break;
        }

        let mut dirty = false;
        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                app.on_key(key);
                dirty = true;
            }
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(_, _)) => dirty = true,
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }

        // Fetch completion arrives on the runtime thread; the store
        // subscription is how it reaches the draw loop.
        if changes.has_changed().unwrap_or(false) {
            changes.mark_unchanged();
            dirty = true;
        }

        if dirty {
            terminal.draw(|frame| draw(frame, &app))?;
        }
    }

    drop(guard);
    Ok(())
}
