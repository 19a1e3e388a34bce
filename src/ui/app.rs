use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::counter::CounterIntent;
use crate::store::{AppState, Store};

/// View-model over the store: holds the handle the view dispatches
/// through, plus UI-local bits that never belong in a slice.
pub struct App {
    store: Store,
    step: i64,
    should_quit: bool,
}

impl App {
    pub fn new(store: Store, step: i64) -> Self {
        Self {
            store,
            step,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Amount applied by the step keys.
    pub fn step(&self) -> i64 {
        self.step
    }

    /// Fresh snapshot of the aggregate state for rendering.
    pub fn snapshot(&self) -> AppState {
        self.store.snapshot()
    }

    /// Translate a key press into an intent (or a quit request).
    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.request_quit(),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.store.dispatch(CounterIntent::Increment);
            }
            KeyCode::Char('-') => self.store.dispatch(CounterIntent::Decrement),
            KeyCode::Char(']') => self.store.dispatch(CounterIntent::IncrementBy(self.step)),
            KeyCode::Char('[') => self.store.dispatch(CounterIntent::DecrementBy(self.step)),
            KeyCode::Char('r') => self.store.dispatch(CounterIntent::Reset),
            _ => {}
        }
    }
}
