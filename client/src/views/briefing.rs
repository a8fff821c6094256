//! Daily briefing video: latest render status, playback, and regeneration.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::net::feeds::{generate_briefing, load_briefing, poll_briefing};
use crate::state::briefing::BriefingState;

#[component]
pub fn BriefingView() -> impl IntoView {
    let briefing = expect_context::<RwSignal<BriefingState>>();
    let force = RwSignal::new(false);

    load_briefing(briefing);
    poll_briefing(briefing);

    let busy = move || briefing.with(|s| s.is_generating || s.should_poll());

    view! {
        <div class="view view--briefing">
            <h2 class="view__title">"Daily briefing"</h2>
            <ErrorBanner
                message=Signal::derive(move || briefing.with(|s| s.error.clone()))
                on_dismiss=Callback::new(move |()| briefing.update(|s| s.error = None))
            />
            <div class="briefing__status">
                <span class="badge">{move || briefing.with(BriefingState::status_label)}</span>
                {move || {
                    briefing.with(|s| s.video.as_ref().and_then(|v| v.created_at.clone())).map(|ts| {
                        view! { <span class="briefing__created">{format!("Created {ts}")}</span> }
                    })
                }}
                {move || {
                    briefing.with(|s| s.video.as_ref().and_then(|v| v.error.clone())).map(|err| {
                        view! { <span class="briefing__error">{err}</span> }
                    })
                }}
            </div>
            {move || {
                if briefing.with(|s| s.is_loading && s.video.is_none()) {
                    return view! { <div class="briefing__placeholder">"Loading…"</div> }.into_any();
                }
                match briefing.with(|s| s.playable_url().map(str::to_owned)) {
                    Some(url) => view! { <video class="briefing__player" controls=true src=url></video> }.into_any(),
                    None => view! { <div class="briefing__placeholder">"No video available"</div> }.into_any(),
                }
            }}
            <div class="briefing__actions">
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || force.get()
                        on:change=move |ev| force.set(event_target_checked(&ev))
                    />
                    "Regenerate even if today's briefing exists"
                </label>
                <button
                    class="btn btn--primary"
                    disabled=busy
                    on:click=move |_| generate_briefing(briefing, force.get_untracked())
                >
                    {move || if briefing.with(|s| s.is_generating) { "Requesting…" } else { "Generate briefing" }}
                </button>
            </div>
        </div>
    }
}
