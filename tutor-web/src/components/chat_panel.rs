//! Chat Panel - header, selection banner, conversation and composer

use leptos::html::Div;
use leptos::prelude::*;
use lib_core::Session;
use shared::utils::selection_preview;
use web_sys::{KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions};

use crate::components::{TurnBubble, TypingIndicator, WelcomeMessage};
use crate::state::use_session_context;
use crate::utils::constants::{INPUT_PLACEHOLDER, PANEL_TITLE};

#[component]
pub fn ChatPanel() -> impl IntoView {
    let ctx = use_session_context();
    let session = ctx.session;
    let end_ref = NodeRef::<Div>::new();

    let is_busy = move || session.with(Session::is_busy);
    let preview = move || session.with(|s| s.pending_selection().map(selection_preview));

    // Keep the newest turn (or the typing indicator) in view
    let turn_marker = Memo::new(move |_| session.with(|s| (s.turns().len(), s.is_busy())));
    Effect::new(move |_| {
        turn_marker.track();
        if let Some(end) = end_ref.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            end.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            ctx.send();
        }
    };

    view! {
        <div class="tutor-window">
            <div class="tutor-header">
                <h3>{PANEL_TITLE}</h3>
                <button class="tutor-clear" title="Clear chat" on:click=move |_| ctx.clear()>
                    "🗑️"
                </button>
            </div>

            {move || preview().map(|text| view! {
                <div class="tutor-selection">
                    <span class="tutor-selection-label">"Selected:"</span>
                    <span class="tutor-selection-text">"\"" {text} "\""</span>
                    <button
                        class="tutor-selection-dismiss"
                        title="Dismiss selection"
                        on:click=move |_| ctx.dismiss_selection()
                    >
                        "✕"
                    </button>
                </div>
            })}

            <div class="tutor-messages">
                <Show when=move || session.with(|s| s.turns().is_empty())>
                    <WelcomeMessage has_selection=move || session.with(|s| s.pending_selection().is_some())/>
                </Show>

                {move || session.with(|s| {
                    s.turns()
                        .iter()
                        .cloned()
                        .map(|turn| view! { <TurnBubble turn=turn/> })
                        .collect_view()
                })}

                <Show when=is_busy>
                    <TypingIndicator/>
                </Show>

                <div node_ref=end_ref></div>
            </div>

            <div class="tutor-input">
                <textarea
                    class="tutor-textarea"
                    rows="2"
                    placeholder=INPUT_PLACEHOLDER
                    prop:value=move || session.with(|s| s.draft().to_string())
                    on:input=move |ev| ctx.set_draft(event_target_value(&ev))
                    on:keydown=on_keydown
                    disabled=is_busy
                ></textarea>
                <button
                    class="tutor-send"
                    on:click=move |_| ctx.send()
                    disabled=move || !session.with(Session::can_send)
                >
                    {move || if is_busy() { "⏳" } else { "➤" }}
                </button>
            </div>
        </div>
    }
}
