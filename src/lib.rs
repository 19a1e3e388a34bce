//! A terminal demo pairing a reducible state container with a one-shot
//! remote fetch.
//!
//! The store holds two independent slices: a counter mutated by a fixed
//! set of intents, and a post list driven through the
//! idle/loading/succeeded/failed lifecycle of a single HTTP GET. The TUI
//! reads snapshots and dispatches intents; nothing else mutates state.

pub mod config;
pub mod counter;
pub mod posts;
pub mod store;
pub mod trace;
pub mod ui;
