#![forbid(unsafe_code)]

//! Shared result type for widget mouse handling.

/// Outcome of routing a mouse event to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseResult {
    /// The event was not for this widget, or changed nothing.
    Ignored,
    /// The cursor moved to the given slide index.
    Moved(usize),
}

impl MouseResult {
    /// Whether the event changed widget state.
    #[must_use]
    pub const fn is_moved(&self) -> bool {
        matches!(self, Self::Moved(_))
    }
}
