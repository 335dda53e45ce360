//! Chat session state management

use leptos::prelude::*;
use lib_core::{ConversationClient, PanelState, Session, SessionHandle, WidgetConfig};

use crate::services::chat::FetchTransport;

pub type ChatClient = ConversationClient<FetchTransport>;

/// Per-widget conversation context
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: RwSignal<Session>,
    pub panel: RwSignal<PanelState>,
    client: StoredValue<ChatClient>,
}

impl SessionContext {
    pub fn new(config: WidgetConfig) -> Self {
        let transport = FetchTransport::new(&config);
        Self {
            session: RwSignal::new(Session::new()),
            panel: RwSignal::new(PanelState::default()),
            client: StoredValue::new(ConversationClient::new(transport, config)),
        }
    }

    pub fn is_open(&self) -> bool {
        self.panel.with(|panel| panel.is_open())
    }

    pub fn toggle_panel(&self) {
        self.panel.update(PanelState::toggle);
    }

    pub fn set_draft(&self, draft: String) {
        self.session.update(|s| s.set_draft(draft));
    }

    pub fn dismiss_selection(&self) {
        self.session.update(|s| s.set_pending_selection(None));
    }

    pub fn clear(&self) {
        self.session.update(Session::clear);
    }

    /// Send the current draft. Ignored while busy or when the draft is blank.
    pub fn send(&self) {
        let ctx = *self;
        let raw = self.session.with_untracked(|s| s.draft().to_string());
        let client = self.client.get_value();

        leptos::task::spawn_local(async move {
            let outcome = client.send_message(&ctx, &raw).await;
            log::debug!("Chat send finished: {:?}", outcome);
        });
    }
}

impl SessionHandle for SessionContext {
    fn with_session<R>(&self, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        // None once the owning component has been disposed
        self.session.try_update(f)
    }
}

pub fn provide_session_context(config: WidgetConfig) -> SessionContext {
    let context = SessionContext::new(config);
    provide_context(context);
    context
}

pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}
