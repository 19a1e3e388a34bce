pub mod app;
pub mod events;
pub mod render;
pub mod runtime;
mod terminal;

pub use runtime::run;
