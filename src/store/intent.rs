//! Base trait for intents (user/system actions).

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses)
/// - System events (fetch lifecycle outcomes)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
