//! Version picker: one chip per version of the selected chat.

use leptos::prelude::*;

use crate::net::session_sync::SessionController;
use crate::state::session::SessionState;

#[component]
pub fn VersionStrip() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let controller = expect_context::<SessionController>();

    move || {
        let (versions, current) =
            session.with(|s| (s.versions.clone(), s.current_version.as_ref().map(|v| v.id.clone())));
        if versions.is_empty() {
            return ().into_any();
        }
        view! {
            <div class="version-strip">
                {versions
                    .into_iter()
                    .map(|version| {
                        let is_current = current.as_deref() == Some(version.id.as_str());
                        let id = version.id.clone();
                        view! {
                            <button
                                class="version-strip__chip"
                                class:version-strip__chip--current=is_current
                                title=version.prompt
                                on:click=move |_| controller.set_current_version(&id)
                            >
                                {format!("v{}", version.version_number)}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any()
    }
}
