//! Conversation bubbles

use leptos::prelude::*;
use lib_core::Turn;
use shared::utils::format_source_label;

use crate::utils::constants::{SELECTION_HINT, WELCOME_GREETING, WELCOME_PROMPT};

/// One user or assistant turn, with citation chips when the backend sent any.
#[component]
pub fn TurnBubble(turn: Turn) -> impl IntoView {
    let class = if turn.is_user() {
        "tutor-message tutor-message-user"
    } else {
        "tutor-message tutor-message-assistant"
    };

    let labels: Option<Vec<String>> = turn
        .has_sources()
        .then(|| turn.sources().unwrap_or_default().iter().map(|s| format_source_label(s)).collect());

    view! {
        <div class=class>
            <div class="tutor-message-content">{turn.content().to_string()}</div>
            {labels.map(|labels| view! {
                <div class="tutor-sources">
                    <span class="tutor-sources-label">"Sources:"</span>
                    {labels
                        .into_iter()
                        .map(|label| view! { <span class="tutor-source">{label}</span> })
                        .collect_view()}
                </div>
            })}
        </div>
    }
}

/// Empty-state greeting
#[component]
pub fn WelcomeMessage(#[prop(into)] has_selection: Signal<bool>) -> impl IntoView {
    view! {
        <div class="tutor-empty">
            <p>{WELCOME_GREETING}</p>
            <p>{WELCOME_PROMPT}</p>
            <Show when=move || has_selection.get()>
                <p class="tutor-hint">{SELECTION_HINT}</p>
            </Show>
        </div>
    }
}

/// Shown while an exchange is in flight
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="tutor-message tutor-message-assistant">
            <div class="tutor-loading">
                <span></span>
                <span></span>
                <span></span>
            </div>
        </div>
    }
}
