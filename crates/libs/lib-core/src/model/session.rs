//! # Session State
//!
//! Single source of truth for one widget's conversation. The session is
//! created empty on mount, cleared only by explicit user action and dropped on
//! unmount; nothing is persisted.
//!
//! ## Exchange bookkeeping
//!
//! A user send is split in two synchronous steps around the network await:
//!
//! 1. [`Session::begin_exchange`] checks the single-flight guard, appends the
//!    user turn, clears the draft, raises `busy` and hands back the request.
//! 2. [`Session::complete_exchange`] applies the outcome and lowers `busy`.
//!
//! Because the user turn lands in step 1, a viewer sees their own message
//! before the backend has answered.
//!
//! ```rust
//! use lib_core::model::Session;
//! use shared::ChatResponse;
//!
//! let mut session = Session::new();
//! let pending = session.begin_exchange("What is a node?", None).unwrap();
//! assert!(session.is_busy());
//! assert_eq!(session.turns().len(), 1);
//!
//! session.complete_exchange(pending, Ok(ChatResponse {
//!     session_id: Some("s1".into()),
//!     response: "A node is...".to_string(),
//!     sources: None,
//! }));
//! assert!(!session.is_busy());
//! assert_eq!(session.turns().len(), 2);
//! ```

use shared::{ChatRequest, ChatResponse, SessionId};

use crate::error::{AppError, Result};
use crate::model::turn::Turn;

/// What happened to one call of `send_message`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input or an exchange already in flight; nothing changed.
    Ignored,
    /// The backend answered and the assistant turn was appended.
    Answered,
    /// The exchange failed and the apology turn was appended.
    Failed,
    /// The session was dropped (widget unmounted) while the request was in
    /// flight; there was nothing left to update.
    Unmounted,
}

/// A request issued by [`Session::begin_exchange`] and not yet settled.
#[derive(Debug)]
pub struct PendingExchange {
    request: ChatRequest,
}

impl PendingExchange {
    pub fn request(&self) -> &ChatRequest {
        &self.request
    }
}

/// The running conversation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    turns: Vec<Turn>,
    session_id: Option<SessionId>,
    pending_selection: Option<String>,
    busy: bool,
    draft: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    pub fn pending_selection(&self) -> Option<&str> {
        self.pending_selection.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Current contents of the input box.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Whether the send control should be enabled.
    pub fn can_send(&self) -> bool {
        !self.busy && !self.draft.trim().is_empty()
    }

    /// Append a turn. User turns must have non-blank content.
    pub fn append_turn(&mut self, turn: Turn) -> Result<()> {
        if turn.is_user() && turn.content().trim().is_empty() {
            return Err(AppError::Validation("user turn must not be empty".to_string()));
        }
        self.turns.push(turn);
        Ok(())
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    /// Record the backend's session id. A later, different id overwrites the
    /// earlier one; the backend is authoritative.
    pub fn set_session_id(&mut self, id: SessionId) {
        if self.session_id.as_ref().is_some_and(|current| *current != id) {
            tracing::debug!(old = ?self.session_id, new = %id, "Backend replaced session id");
        }
        self.session_id = Some(id);
    }

    /// Replace (never accumulate) the captured selection.
    pub fn set_pending_selection(&mut self, selection: Option<String>) {
        self.pending_selection = selection;
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Empty the turns and forget the session id and selection.
    ///
    /// An exchange still in flight keeps `busy` raised until it settles; its
    /// reply then lands as the first turn of the emptied conversation.
    pub fn clear(&mut self) {
        self.turns.clear();
        self.session_id = None;
        self.pending_selection = None;
    }

    /// Start one exchange for `raw_input`.
    ///
    /// Returns `None` without touching state when the trimmed input is empty
    /// or another exchange is in flight.
    pub fn begin_exchange(&mut self, raw_input: &str, chapter_slug: Option<&str>) -> Option<PendingExchange> {
        if raw_input.trim().is_empty() || self.busy {
            return None;
        }

        self.turns.push(Turn::user(raw_input));
        self.draft.clear();
        self.busy = true;

        let request = ChatRequest {
            message: raw_input.to_string(),
            session_id: self.session_id.clone(),
            selected_text: self.pending_selection.clone(),
            chapter_slug: chapter_slug.map(str::to_string),
        };

        Some(PendingExchange { request })
    }

    /// Settle an exchange started by [`Session::begin_exchange`].
    ///
    /// On success the assistant turn is appended and the selection is
    /// consumed. The reply's session id is adopted only when the request went
    /// out without one and none has been set since. On failure the apology
    /// turn is appended and the selection is kept for a retry. `busy` is
    /// lowered either way.
    pub fn complete_exchange(&mut self, pending: PendingExchange, outcome: Result<ChatResponse>) -> SendOutcome {
        self.busy = false;

        match outcome {
            Ok(response) => {
                if pending.request.session_id.is_none() && self.session_id.is_none() {
                    if let Some(id) = response.session_id {
                        tracing::info!(session_id = %id, "Session established");
                        self.session_id = Some(id);
                    }
                }
                self.turns.push(Turn::assistant(response.response, response.sources));
                self.pending_selection = None;
                SendOutcome::Answered
            }
            Err(e) => {
                tracing::warn!(error = %e, "Chat exchange failed");
                self.turns.push(Turn::apology());
                SendOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::turn::{Role, APOLOGY_TEXT};

    fn answer(session_id: Option<&str>, text: &str, sources: Option<Vec<&str>>) -> ChatResponse {
        ChatResponse {
            session_id: session_id.map(SessionId::from),
            response: text.to_string(),
            sources: sources.map(|s| s.into_iter().map(String::from).collect()),
        }
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(session.turns().is_empty());
        assert_eq!(session.session_id(), None);
        assert_eq!(session.pending_selection(), None);
        assert!(!session.is_busy());
        assert!(!session.can_send());
    }

    #[test]
    fn test_append_turn_rejects_blank_user_turn() {
        let mut session = Session::new();
        assert!(matches!(session.append_turn(Turn::user("  \n")), Err(AppError::Validation(_))));
        assert!(session.append_turn(Turn::assistant("", None)).is_ok());
        assert!(session.append_turn(Turn::user("hello")).is_ok());
        assert_eq!(session.turns().len(), 2);
    }

    #[test]
    fn test_begin_exchange_ignores_blank_input() {
        let mut session = Session::new();
        session.set_draft("   ");
        assert!(session.begin_exchange("   ", None).is_none());
        assert!(session.turns().is_empty());
        assert!(!session.is_busy());
        assert_eq!(session.draft(), "   ");
    }

    #[test]
    fn test_begin_exchange_appends_untrimmed_user_turn() {
        let mut session = Session::new();
        session.set_draft("  What is a node?\n");
        let pending = session.begin_exchange("  What is a node?\n", Some("module-1/nodes")).unwrap();

        assert_eq!(session.turns().len(), 1);
        assert_eq!(session.turns()[0].role(), Role::User);
        assert_eq!(session.turns()[0].content(), "  What is a node?\n");
        assert_eq!(session.draft(), "");
        assert!(session.is_busy());
        assert!(!session.can_send());

        let request = pending.request();
        assert_eq!(request.message, "  What is a node?\n");
        assert_eq!(request.session_id, None);
        assert_eq!(request.selected_text, None);
        assert_eq!(request.chapter_slug.as_deref(), Some("module-1/nodes"));
    }

    #[test]
    fn test_single_flight() {
        let mut session = Session::new();
        let _pending = session.begin_exchange("first", None).unwrap();
        assert!(session.begin_exchange("second", None).is_none());
        assert_eq!(session.turns().len(), 1);
    }

    #[test]
    fn test_success_adopts_session_id_and_consumes_selection() {
        let mut session = Session::new();
        session.set_pending_selection(Some("Topics carry typed messages".to_string()));

        let pending = session.begin_exchange("What is a topic?", None).unwrap();
        assert_eq!(pending.request().selected_text.as_deref(), Some("Topics carry typed messages"));

        let outcome = session.complete_exchange(pending, Ok(answer(Some("s1"), "A topic is...", Some(vec!["module-1/topics"]))));
        assert_eq!(outcome, SendOutcome::Answered);
        assert_eq!(session.session_id(), Some(&SessionId::from("s1")));
        assert_eq!(session.pending_selection(), None);
        assert!(!session.is_busy());

        let reply = &session.turns()[1];
        assert_eq!(reply.role(), Role::Assistant);
        assert_eq!(reply.content(), "A topic is...");
        assert_eq!(reply.sources(), Some(&["module-1/topics".to_string()][..]));
    }

    #[test]
    fn test_later_responses_do_not_replace_session_id() {
        let mut session = Session::new();
        let pending = session.begin_exchange("one", None).unwrap();
        session.complete_exchange(pending, Ok(answer(Some("s1"), "a", None)));

        let pending = session.begin_exchange("two", None).unwrap();
        assert_eq!(pending.request().session_id, Some(SessionId::from("s1")));
        session.complete_exchange(pending, Ok(answer(Some("s2"), "b", None)));
        assert_eq!(session.session_id(), Some(&SessionId::from("s1")));

        let pending = session.begin_exchange("three", None).unwrap();
        session.complete_exchange(pending, Ok(answer(None, "c", None)));
        assert_eq!(session.session_id(), Some(&SessionId::from("s1")));
        assert_eq!(session.turns().len(), 6);
    }

    #[test]
    fn test_set_session_id_overwrites() {
        let mut session = Session::new();
        session.set_session_id(SessionId::Number(1));
        session.set_session_id(SessionId::Number(2));
        assert_eq!(session.session_id(), Some(&SessionId::Number(2)));
    }

    #[test]
    fn test_failure_keeps_selection_and_session_unset() {
        let mut session = Session::new();
        session.set_pending_selection(Some("ROS 2 uses DDS underneath".to_string()));

        let pending = session.begin_exchange("Explain this", None).unwrap();
        let outcome = session.complete_exchange(pending, Err(AppError::Status(500)));

        assert_eq!(outcome, SendOutcome::Failed);
        assert_eq!(session.turns().len(), 2);
        assert_eq!(session.turns()[1].content(), APOLOGY_TEXT);
        assert_eq!(session.turns()[1].sources(), None);
        assert_eq!(session.pending_selection(), Some("ROS 2 uses DDS underneath"));
        assert_eq!(session.session_id(), None);
        assert!(!session.is_busy());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut session = Session::new();
        session.set_pending_selection(Some("some selected passage".to_string()));
        let pending = session.begin_exchange("hi", None).unwrap();
        session.complete_exchange(pending, Ok(answer(Some("s9"), "hello", None)));
        session.set_pending_selection(Some("another passage here".to_string()));

        session.clear();
        assert!(session.turns().is_empty());
        assert_eq!(session.session_id(), None);
        assert_eq!(session.pending_selection(), None);
    }

    #[test]
    fn test_reply_after_clear_lands_in_emptied_conversation() {
        let mut session = Session::new();
        session.set_pending_selection(Some("a passage about topics".to_string()));
        let pending = session.begin_exchange("hi", None).unwrap();
        session.clear();
        assert!(session.is_busy());
        assert!(session.begin_exchange("again", None).is_none());

        let outcome = session.complete_exchange(pending, Ok(answer(Some("s1"), "late", None)));
        assert_eq!(outcome, SendOutcome::Answered);
        assert!(!session.is_busy());
        assert_eq!(session.turns().len(), 1);
        assert_eq!(session.turns()[0].role(), Role::Assistant);
        assert_eq!(session.turns()[0].content(), "late");
        // the request carried no id, so the reply's id is adopted
        assert_eq!(session.session_id(), Some(&SessionId::from("s1")));
    }

    #[test]
    fn test_reply_after_clear_does_not_restore_old_session_id() {
        let mut session = Session::new();
        let pending = session.begin_exchange("one", None).unwrap();
        session.complete_exchange(pending, Ok(answer(Some("s1"), "a", None)));

        let pending = session.begin_exchange("two", None).unwrap();
        assert_eq!(pending.request().session_id, Some(SessionId::from("s1")));
        session.clear();
        let outcome = session.complete_exchange(pending, Ok(answer(Some("s1"), "b", None)));

        assert_eq!(outcome, SendOutcome::Answered);
        assert_eq!(session.turns().len(), 1);
        assert_eq!(session.turns()[0].content(), "b");
        assert_eq!(session.session_id(), None);

        let pending = session.begin_exchange("three", None).unwrap();
        assert_eq!(pending.request().session_id, None);
        session.complete_exchange(pending, Err(AppError::Network("reset".to_string())));
        assert_eq!(session.turns()[2].content(), APOLOGY_TEXT);
    }
}
