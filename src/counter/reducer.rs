//! Reducer for the counter slice.

use crate::store::Reducer;

use super::intent::CounterIntent;
use super::state::CounterState;

/// Reducer for counter state transitions.
///
/// Arithmetic saturates at the i64 bounds rather than wrapping or
/// panicking, so every transition stays deterministic.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let count = match intent {
            CounterIntent::Increment => state.count.saturating_add(1),
            CounterIntent::Decrement => state.count.saturating_sub(1),
            CounterIntent::IncrementBy(amount) => state.count.saturating_add(amount),
            CounterIntent::DecrementBy(amount) => state.count.saturating_sub(amount),
            CounterIntent::Reset => 0,
        };
        CounterState { count }
    }
}
