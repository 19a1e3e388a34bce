//! Unidirectional state container primitives.
//!
//! The application state lives in a single [`Store`] split into
//! independently reducible slices. The view layer reads snapshots and
//! dispatches intents; the store is the only mutation path.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable representation of a slice of application state
//! - **Intent**: user actions or system events
//! - **Reducer**: pure function that transforms state based on intents

mod container;
mod intent;
mod reducer;
mod state;

pub use container::{AppIntent, AppState, Store, StoreSubscription};
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::SliceState;
