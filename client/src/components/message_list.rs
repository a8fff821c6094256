//! Chat transcript; message bodies are Markdown.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::markdown::render_message_html;

#[component]
pub fn MessageList() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="messages">
            {move || {
                let messages = session.with(|s| s.messages.clone());
                if messages.is_empty() {
                    return view! { <div class="messages__empty">"No messages"</div> }.into_any();
                }
                messages
                    .into_iter()
                    .map(|msg| {
                        let class = format!("message message--{}", msg.role);
                        let html = render_message_html(&msg.content);
                        view! {
                            <div class=class>
                                <span class="message__role">{msg.role}</span>
                                <div class="message__body" inner_html=html></div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}
