//! Sidebar configuration and the view-id → view mapping.
//!
//! Tab ids for sidebar views are the sidebar item ids; asset-detail tabs use
//! `"{detail view id}-{asset id}"` and resolve their view through the tab's
//! `component` field.

#[cfg(test)]
#[path = "views_test.rs"]
mod views_test;

use std::collections::HashMap;
use std::sync::OnceLock;

use schema::AssetType;

/// Every view a tab can host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Portfolio,
    Canvas,
    Explore(AssetType),
    Options,
    News,
    Briefing,
    AssetDetail(AssetType),
}

/// One launchable sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarItem {
    pub id: &'static str,
    pub label: &'static str,
    pub section: &'static str,
    pub view: ViewKind,
    pub closeable: bool,
}

pub const SIDEBAR_ITEMS: &[SidebarItem] = &[
    SidebarItem { id: "portfolio", label: "Portfolio", section: "Overview", view: ViewKind::Portfolio, closeable: false },
    SidebarItem { id: "canvas", label: "Canvas", section: "Overview", view: ViewKind::Canvas, closeable: true },
    SidebarItem {
        id: "bonds",
        label: "Bonds",
        section: "Explore",
        view: ViewKind::Explore(AssetType::Bonds),
        closeable: true,
    },
    SidebarItem {
        id: "stocks",
        label: "Stocks",
        section: "Explore",
        view: ViewKind::Explore(AssetType::Stocks),
        closeable: true,
    },
    SidebarItem {
        id: "etfs",
        label: "ETFs",
        section: "Explore",
        view: ViewKind::Explore(AssetType::Etfs),
        closeable: true,
    },
    SidebarItem {
        id: "commodities",
        label: "Commodities",
        section: "Explore",
        view: ViewKind::Explore(AssetType::Commodities),
        closeable: true,
    },
    SidebarItem { id: "options", label: "Options", section: "Trade", view: ViewKind::Options, closeable: true },
    SidebarItem { id: "news", label: "News", section: "Research", view: ViewKind::News, closeable: true },
    SidebarItem { id: "briefing", label: "Daily Briefing", section: "Research", view: ViewKind::Briefing, closeable: true },
];

/// Tab opened on first load.
pub const HOME_VIEW_ID: &str = "portfolio";

/// Detail view id for an asset type.
#[must_use]
pub fn detail_view_id(asset_type: AssetType) -> &'static str {
    match asset_type {
        AssetType::Bonds => "bond-detail",
        AssetType::Stocks => "stock-detail",
        AssetType::Etfs => "etf-detail",
        AssetType::Commodities => "commodity-detail",
    }
}

/// View-id → view map, built once from [`SIDEBAR_ITEMS`] plus the detail views.
pub fn view_map() -> &'static HashMap<&'static str, ViewKind> {
    static MAP: OnceLock<HashMap<&'static str, ViewKind>> = OnceLock::new();
    MAP.get_or_init(|| {
        let mut map: HashMap<&'static str, ViewKind> = SIDEBAR_ITEMS.iter().map(|item| (item.id, item.view)).collect();
        for asset_type in AssetType::ALL {
            map.insert(detail_view_id(asset_type), ViewKind::AssetDetail(asset_type));
        }
        map
    })
}

#[must_use]
pub fn sidebar_item(id: &str) -> Option<&'static SidebarItem> {
    SIDEBAR_ITEMS.iter().find(|item| item.id == id)
}

/// Resolve a tab's `component` key.
#[must_use]
pub fn view_kind(component: &str) -> Option<ViewKind> {
    view_map().get(component).copied()
}

/// Sidebar items grouped by section, in declaration order.
#[must_use]
pub fn sidebar_sections() -> Vec<(&'static str, Vec<&'static SidebarItem>)> {
    let mut sections: Vec<(&'static str, Vec<&'static SidebarItem>)> = Vec::new();
    for item in SIDEBAR_ITEMS {
        match sections.iter_mut().find(|(name, _)| *name == item.section) {
            Some((_, items)) => items.push(item),
            None => sections.push((item.section, vec![item])),
        }
    }
    sections
}
