//! Floating toggle button and the panel it opens

use leptos::prelude::*;

use crate::components::ChatPanel;
use crate::state::use_session_context;

#[component]
pub fn ChatWidget() -> impl IntoView {
    let ctx = use_session_context();

    view! {
        <button
            class="tutor-toggle"
            aria-label="Toggle chat"
            on:click=move |_| ctx.toggle_panel()
        >
            {move || if ctx.is_open() { "✕" } else { "💬" }}
        </button>

        <Show when=move || ctx.is_open()>
            <ChatPanel/>
        </Show>
    }
}
