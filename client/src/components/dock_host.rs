//! Renders the `dock` layout: one tab strip and body per tab set.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every user gesture on a tab becomes a `dock::Action` dispatched through
//! `WorkspaceState::dispatch`, which mirrors the resulting selection. This
//! component never edits the layout directly.

use dock::{Action, TabSet};
use leptos::prelude::*;

use crate::state::workspace::WorkspaceState;
use crate::views::render_view;

fn dispatch(workspace: RwSignal<WorkspaceState>, action: Action) {
    workspace.update(|ws| {
        if let Err(err) = ws.dispatch(action) {
            leptos::logging::warn!("layout action rejected: {err}");
        }
    });
}

#[component]
fn TabStrip(set: TabSet, active: bool) -> impl IntoView {
    let workspace = expect_context::<RwSignal<WorkspaceState>>();
    let selected = set.selected;
    let multi = set.tabs.len() > 1;

    view! {
        <div class="dock__strip" class:dock__strip--active=active role="tablist">
            {set
                .tabs
                .into_iter()
                .enumerate()
                .map(|(idx, tab)| {
                    let select_id = tab.id.clone();
                    let close_id = tab.id.clone();
                    let split_id = tab.id.clone();
                    let is_selected = selected == Some(idx);
                    view! {
                        <div class="dock__tab" class:dock__tab--selected=is_selected role="tab">
                            <button
                                class="dock__tab-label"
                                on:click=move |_| dispatch(workspace, Action::SelectTab(select_id.clone()))
                            >
                                {tab.name}
                            </button>
                            {multi
                                .then(|| {
                                    view! {
                                        <button
                                            class="dock__tab-split"
                                            title="Open in new group"
                                            on:click=move |_| {
                                                dispatch(
                                                    workspace,
                                                    Action::MoveTab {
                                                        tab_id: split_id.clone(),
                                                        to_tabset: None,
                                                    },
                                                );
                                            }
                                        >
                                            "⇥"
                                        </button>
                                    }
                                })}
                            {tab
                                .closeable
                                .then(|| {
                                    view! {
                                        <button
                                            class="dock__tab-close"
                                            title="Close"
                                            on:click=move |_| dispatch(workspace, Action::DeleteTab(close_id.clone()))
                                        >
                                            "×"
                                        </button>
                                    }
                                })}
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
pub fn DockHost() -> impl IntoView {
    let workspace = expect_context::<RwSignal<WorkspaceState>>();

    // Selection mirroring changes other workspace fields; only layout changes re-render.
    let layout = Memo::new(move |_| workspace.with(|ws| ws.layout().clone()));

    move || {
        let (sets, active_set) =
            layout.with(|layout| (layout.tabsets().to_vec(), layout.active_tabset().map(|s| s.id.clone())));

        view! {
            <div class="dock">
                {sets
                    .into_iter()
                    .map(|set| {
                        let active = active_set.as_deref() == Some(set.id.as_str());
                        let set_id = set.id.clone();
                        let body = set.selected_tab().map(|tab| (tab.id.clone(), tab.component.clone()));
                        view! {
                            <section
                                class="dock__set"
                                class:dock__set--active=active
                                on:click=move |_| {
                                    if !active {
                                        dispatch(workspace, Action::SetActiveTabSet(set_id.clone()));
                                    }
                                }
                            >
                                <TabStrip set active/>
                                <div class="dock__body">
                                    {match body {
                                        Some((tab_id, component)) => render_view(&component, tab_id),
                                        None => view! { <div class="dock__empty">"No open tabs"</div> }.into_any(),
                                    }}
                                </div>
                            </section>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
    }
}
