//! Left navigation: one launcher per sidebar view, grouped by section.

use leptos::prelude::*;

use crate::state::views::sidebar_sections;
use crate::state::workspace::WorkspaceState;

#[component]
pub fn Sidebar() -> impl IntoView {
    let workspace = expect_context::<RwSignal<WorkspaceState>>();

    let open = move |id: &'static str| {
        workspace.update(|ws| {
            if let Err(err) = ws.open_view(id) {
                leptos::logging::warn!("open view {id} failed: {err}");
            }
        });
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"Ledgerline"</div>
            {sidebar_sections()
                .into_iter()
                .map(|(section, items)| {
                    view! {
                        <div class="sidebar__section">
                            <h4 class="sidebar__heading">{section}</h4>
                            <ul>
                                {items
                                    .into_iter()
                                    .map(|item| {
                                        let id = item.id;
                                        view! {
                                            <li>
                                                <button
                                                    class="sidebar__item"
                                                    class:sidebar__item--active=move || {
                                                        workspace.with(|ws| ws.is_active(id))
                                                    }
                                                    on:click=move |_| open(id)
                                                >
                                                    {item.label}
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
