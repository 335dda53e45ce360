//! Docs Tutor widget root
//!
//! Owns one conversation for as long as it is mounted. The document selection
//! listener lives in the component's reactive owner, so it is removed when the
//! widget is disposed.

use leptos::prelude::*;
use lib_core::WidgetConfig;

use crate::components::ChatWidget;
use crate::services::SelectionListener;
use crate::state::provide_session_context;

#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    let ctx = provide_session_context(config);

    let listener = SelectionListener::attach(ctx);
    if listener.is_none() {
        log::debug!("No interactive document, selection capture disabled");
    }
    // Dropped (and the DOM handler removed) together with this component
    let _listener = StoredValue::new_local(listener);

    view! {
        <div class="docs-tutor">
            <ChatWidget/>
        </div>
    }
}
