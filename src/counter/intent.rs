use crate::store::Intent;

/// Intents that can be dispatched to the counter slice.
///
/// All of them are total: there is no failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    /// Add one.
    Increment,

    /// Subtract one.
    Decrement,

    /// Add an arbitrary amount.
    IncrementBy(i64),

    /// Subtract an arbitrary amount.
    DecrementBy(i64),

    /// Back to zero.
    Reset,
}

impl Intent for CounterIntent {}
