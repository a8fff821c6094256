//! Chat picker for the canvas view.

use leptos::prelude::*;

use crate::net::session_sync::SessionController;
use crate::state::session::SessionState;

#[component]
pub fn ChatList() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let controller = expect_context::<SessionController>();

    let selected_id = move || session.with(|s| s.selected_chat.as_ref().map(|c| c.id.clone()));

    view! {
        <aside class="chat-list">
            <button class="btn chat-list__new" on:click=move |_| controller.select_chat(None)>
                "New chat"
            </button>
            <ul>
                {move || {
                    let chats = session.with(|s| s.chats.clone());
                    if chats.is_empty() {
                        return view! { <li class="chat-list__empty">"No chats yet"</li> }.into_any();
                    }
                    chats
                        .into_iter()
                        .map(|chat| {
                            let id = chat.id.clone();
                            let title = if chat.title.is_empty() { "Untitled".to_owned() } else { chat.title.clone() };
                            view! {
                                <li>
                                    <button
                                        class="chat-list__item"
                                        class:chat-list__item--selected=move || selected_id().as_deref() == Some(id.as_str())
                                        on:click=move |_| controller.select_chat(Some(chat.clone()))
                                    >
                                        {title}
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </ul>
        </aside>
    }
}
