//! # Conversation Client
//!
//! Performs exactly one request/response exchange per user-initiated send and
//! folds the outcome back into the [`Session`].
//!
//! ## Flow
//!
//! ```text
//! send_message(raw)
//!   ├─ begin_exchange   user turn appended, draft cleared, busy = true
//!   ├─ transport.send   (await - the only suspension point)
//!   └─ complete_exchange assistant or apology turn, busy = false
//! ```
//!
//! The session is never borrowed across the await, so the host's event loop
//! stays free to render the user turn, toggle the panel or capture selections
//! while the request is outstanding.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::cell::RefCell;
//! use lib_core::{ConversationClient, HttpTransport, Session, WidgetConfig};
//!
//! # async fn run() -> lib_core::Result<()> {
//! let config = WidgetConfig::default();
//! let client = ConversationClient::new(HttpTransport::new(&config)?, config);
//! let session = RefCell::new(Session::new());
//!
//! client.send_message(&session, "What is a node?").await;
//! # Ok(())
//! # }
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::WidgetConfig;
use crate::model::Session;
use crate::transport::ChatTransport;

pub use crate::model::SendOutcome;

/// Access to the live session owned by a host.
///
/// Returns `None` when the session no longer exists (the widget unmounted
/// while a request was in flight).
pub trait SessionHandle {
    fn with_session<R>(&self, f: impl FnOnce(&mut Session) -> R) -> Option<R>;
}

impl SessionHandle for RefCell<Session> {
    fn with_session<R>(&self, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<H: SessionHandle + ?Sized> SessionHandle for Rc<H> {
    fn with_session<R>(&self, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        (**self).with_session(f)
    }
}

impl<H: SessionHandle + ?Sized> SessionHandle for &H {
    fn with_session<R>(&self, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        (**self).with_session(f)
    }
}

/// Sends user turns through a [`ChatTransport`].
#[derive(Clone, Debug)]
pub struct ConversationClient<T> {
    transport: T,
    config: WidgetConfig,
}

impl<T: ChatTransport> ConversationClient<T> {
    pub fn new(transport: T, config: WidgetConfig) -> Self {
        Self { transport, config }
    }

    /// Send `raw_input` as the next user turn.
    ///
    /// A no-op returning [`SendOutcome::Ignored`] when the trimmed input is
    /// empty or an exchange is already in flight. Failures never propagate:
    /// they become the apology turn.
    pub async fn send_message<H: SessionHandle>(&self, session: &H, raw_input: &str) -> SendOutcome {
        let chapter_slug = self.config.chapter_slug.as_deref();
        let pending = match session.with_session(|s| s.begin_exchange(raw_input, chapter_slug)) {
            Some(Some(pending)) => pending,
            _ => {
                tracing::trace!("Send ignored: empty input or exchange in flight");
                return SendOutcome::Ignored;
            }
        };

        tracing::debug!(
            has_session = pending.request().session_id.is_some(),
            has_selection = pending.request().selected_text.is_some(),
            "Sending chat message"
        );

        let outcome = self.transport.send(pending.request()).await;

        session
            .with_session(|s| s.complete_exchange(pending, outcome))
            .unwrap_or_else(|| {
                tracing::debug!("Session dropped during exchange");
                SendOutcome::Unmounted
            })
    }
}
