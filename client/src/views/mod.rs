//! Tab views hosted by the dock.
//!
//! SYSTEM CONTEXT
//! ==============
//! A tab stores only its view id (`component`). [`render_view`] resolves it
//! through the static view map and builds the view; asset-detail views also
//! receive their tab id so they can look up which asset they show.

pub mod asset_detail;
pub mod briefing;
pub mod canvas;
pub mod explore;
pub mod mock;
pub mod news;
pub mod options;
pub mod portfolio;

use leptos::prelude::*;

use asset_detail::AssetDetailView;
use briefing::BriefingView;
use canvas::CanvasView;
use explore::ExploreView;
use news::NewsView;
use options::OptionsView;
use portfolio::PortfolioView;

use crate::state::views::{ViewKind, view_kind};

/// Build the view registered under `component` for tab `tab_id`.
pub fn render_view(component: &str, tab_id: String) -> AnyView {
    let Some(kind) = view_kind(component) else {
        leptos::logging::warn!("tab {tab_id} names unknown view {component}");
        return view! { <div class="view view--missing">{format!("Unknown view: {component}")}</div> }.into_any();
    };
    match kind {
        ViewKind::Portfolio => view! { <PortfolioView/> }.into_any(),
        ViewKind::Canvas => view! { <CanvasView/> }.into_any(),
        ViewKind::Explore(asset_type) => view! { <ExploreView asset_type/> }.into_any(),
        ViewKind::Options => view! { <OptionsView/> }.into_any(),
        ViewKind::News => view! { <NewsView/> }.into_any(),
        ViewKind::Briefing => view! { <BriefingView/> }.into_any(),
        ViewKind::AssetDetail(asset_type) => view! { <AssetDetailView asset_type tab_id/> }.into_any(),
    }
}
