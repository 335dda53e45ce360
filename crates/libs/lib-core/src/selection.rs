//! # Selection Observer
//!
//! Turns "the user finished selecting text" into candidate context for the
//! next question. The host reports the end of a selection gesture (pointer
//! release in the browser) and the observer queries the current selection
//! once; nothing is polled.
//!
//! A selection qualifies when its trimmed text is longer than
//! [`MIN_SELECTION_CHARS`] characters. The most recent qualifying selection
//! replaces the previous one; shorter ones are dropped without feedback.

use crate::conversation::SessionHandle;

/// Trimmed selections must be longer than this many characters.
pub const MIN_SELECTION_CHARS: usize = 10;

/// Host capability: the plain text currently selected, if any.
pub trait SelectionSource {
    fn current_selection(&self) -> Option<String>;
}

impl<F> SelectionSource for F
where
    F: Fn() -> Option<String>,
{
    fn current_selection(&self) -> Option<String> {
        self()
    }
}

/// Trim `raw` and keep it only if it is long enough to be useful context.
///
/// # Examples
///
/// ```rust
/// use lib_core::selection::capture_selection;
///
/// assert_eq!(capture_selection("  the quick brown fox  ").as_deref(), Some("the quick brown fox"));
/// assert_eq!(capture_selection("too short"), None);
/// ```
pub fn capture_selection(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (trimmed.chars().count() > MIN_SELECTION_CHARS).then(|| trimmed.to_string())
}

/// Publishes qualifying selections into a session.
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectionObserver;

impl SelectionObserver {
    /// Handle the end of a selection gesture.
    ///
    /// Returns `true` when the session's pending selection was replaced.
    pub fn on_selection_end<S, H>(&self, source: &S, session: &H) -> bool
    where
        S: SelectionSource + ?Sized,
        H: SessionHandle + ?Sized,
    {
        let Some(text) = source.current_selection().as_deref().and_then(capture_selection) else {
            return false;
        };

        tracing::debug!(chars = text.chars().count(), "Captured selection");
        session
            .with_session(|s| s.set_pending_selection(Some(text)))
            .is_some()
    }
}
