//! Canvas renderer: a version's component list → widgets.
//!
//! Rendering is split in two. [`plan_canvas`] resolves every entry against the
//! registry without touching the DOM; [`CanvasRenderer`] turns the plan into
//! views. Entries render in list order with no filtering or de-duplication,
//! and an unregistered type becomes a visible placeholder in its slot.

#[cfg(test)]
#[path = "renderer_test.rs"]
mod renderer_test;

use leptos::prelude::*;
use schema::ComponentEntry;
use serde_json::Value;

use super::registry::{self, WidgetKind};

/// One resolved canvas slot.
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasSlot {
    Widget { key: String, kind: WidgetKind, data: Value },
    Missing { key: String, type_name: String, position: usize },
}

impl CanvasSlot {
    pub fn key(&self) -> &str {
        match self {
            Self::Widget { key, .. } | Self::Missing { key, .. } => key,
        }
    }
}

pub fn plan_canvas(entries: &[ComponentEntry]) -> Vec<CanvasSlot> {
    entries
        .iter()
        .enumerate()
        .map(|(position, entry)| match registry::lookup(&entry.kind) {
            Some(kind) => CanvasSlot::Widget { key: entry.id.clone(), kind, data: entry.data.clone() },
            None => CanvasSlot::Missing { key: entry.id.clone(), type_name: entry.kind.clone(), position },
        })
        .collect()
}

/// Placeholder for a type the registry does not know.
#[component]
fn MissingComponent(type_name: String, position: usize) -> impl IntoView {
    view! {
        <div class="canvas-widget canvas-widget--missing" data-position=position.to_string()>
            <span class="canvas-widget__missing-title">"Component not found"</span>
            <code class="canvas-widget__missing-type">{type_name}</code>
            <span class="canvas-widget__missing-position">{format!("position {}", position + 1)}</span>
        </div>
    }
}

/// Render the given component list.
#[component]
pub fn CanvasRenderer(#[prop(into)] components: Signal<Vec<ComponentEntry>>) -> impl IntoView {
    move || {
        let slots = components.with(|entries| plan_canvas(entries));
        if slots.is_empty() {
            return view! { <div class="canvas canvas--empty">"This version has no components."</div> }.into_any();
        }

        view! {
            <div class="canvas">
                {slots
                    .into_iter()
                    .map(|slot| match slot {
                        CanvasSlot::Widget { key, kind, data } => {
                            view! {
                                <section class="canvas__slot" data-key=key data-widget=kind.name()>
                                    {registry::render_widget(kind, &data)}
                                </section>
                            }
                                .into_any()
                        }
                        CanvasSlot::Missing { key, type_name, position } => {
                            view! {
                                <section class="canvas__slot" data-key=key>
                                    <MissingComponent type_name position/>
                                </section>
                            }
                                .into_any()
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any()
    }
}
