//! Base trait for state slices.

/// Marker trait for slice state objects.
///
/// Slices should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait SliceState: Clone + PartialEq + Default + Send + 'static {}
