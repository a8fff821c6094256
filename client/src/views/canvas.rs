//! AI canvas: chat picker, version strip, rendered widgets, transcript, and
//! the prompt bar that produces the next version.

use leptos::prelude::*;

use crate::canvas::renderer::CanvasRenderer;
use crate::components::chat_list::ChatList;
use crate::components::error_banner::ErrorBanner;
use crate::components::message_list::MessageList;
use crate::components::prompt_bar::PromptBar;
use crate::components::version_strip::VersionStrip;
use crate::net::session_sync::SessionController;
use crate::state::session::SessionState;

#[component]
pub fn CanvasView() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let controller = expect_context::<SessionController>();

    let components = Signal::derive(move || {
        session.with(|s| s.current_version.as_ref().map(|v| v.components.clone()).unwrap_or_default())
    });
    let heading = move || {
        session.with(|s| match &s.selected_chat {
            Some(chat) if !chat.title.is_empty() => chat.title.clone(),
            Some(_) => "Untitled".to_owned(),
            None => "New canvas".to_owned(),
        })
    };

    view! {
        <div class="view view--canvas">
            <ChatList/>
            <div class="canvas__main">
                <header class="canvas__header">
                    <h2 class="view__title">{heading}</h2>
                    {move || session.with(|s| s.is_loading).then(|| view! { <span class="spinner" title="Loading"></span> })}
                </header>
                <ErrorBanner
                    message=Signal::derive(move || session.with(|s| s.error.clone()))
                    on_dismiss=Callback::new(move |()| controller.dismiss_error())
                />
                <VersionStrip/>
                <CanvasRenderer components/>
                <MessageList/>
                <PromptBar/>
            </div>
        </div>
    }
}
