use crate::store::SliceState;

/// State of the counter slice: a single signed integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    pub count: i64,
}

impl SliceState for CounterState {}
