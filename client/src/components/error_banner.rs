//! Dismissable error banner that clears itself after a few seconds.

use leptos::prelude::*;

/// Shows `message` while it is `Some`. Calls `on_dismiss` on click, or after
/// the auto-clear delay if the same message is still showing.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>, on_dismiss: Callback<()>) -> impl IntoView {
    Effect::new(move || {
        let Some(shown) = message.get() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(crate::config::BANNER_AUTO_CLEAR_MS).await;
            if message.try_get_untracked().flatten().as_deref() == Some(shown.as_str()) {
                on_dismiss.run(());
            }
        });
        #[cfg(not(feature = "hydrate"))]
        drop(shown);
    });

    move || {
        message.get().map(|text| {
            view! {
                <div class="banner banner--error" role="alert">
                    <span class="banner__text">{text}</span>
                    <button class="banner__close" title="Dismiss" on:click=move |_| on_dismiss.run(())>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
