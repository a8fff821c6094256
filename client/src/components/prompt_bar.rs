//! Prompt input that creates the next canvas version.

use leptos::prelude::*;

use crate::net::session_sync::SessionController;
use crate::state::session::SessionState;

#[component]
pub fn PromptBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let controller = expect_context::<SessionController>();
    let input = RwSignal::new(String::new());

    let busy = move || session.with(|s| s.is_loading);
    let can_send = move || !busy() && !input.with(|v| v.trim().is_empty());

    let submit = move || {
        if !can_send() {
            return;
        }
        controller.submit_prompt(&input.get_untracked());
        input.set(String::new());
    };

    let placeholder = move || {
        if session.with(|s| s.selected_chat.is_some()) {
            "Refine this canvas…"
        } else {
            "Describe a dashboard to start a new chat…"
        }
    };

    view! {
        <div class="prompt-bar">
            <textarea
                class="prompt-bar__input"
                rows="2"
                placeholder=placeholder
                disabled=busy
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" && !ev.shift_key() {
                        ev.prevent_default();
                        submit();
                    }
                }
            ></textarea>
            <button class="btn btn--primary" disabled=move || !can_send() on:click=move |_| submit()>
                {move || if busy() { "Working…" } else { "Send" }}
            </button>
        </div>
    }
}
