//! Tabbed workspace state on top of the `dock` layout model.
//!
//! ARCHITECTURE
//! ============
//! `WorkspaceState` is the only writer of the layout. Every layout change goes
//! through [`WorkspaceState::dispatch`], which intercepts the action, applies
//! it, and mirrors the layout's resulting selection into `active_tab_id` /
//! `current_tab_id`. After a delete the layout picks the successor tab; we
//! read that choice back rather than predicting it.
//!
//! Asset-detail tabs share one view component per asset type. The asset each
//! tab shows lives in a side table keyed by tab id, and `selected_asset` is
//! republished from that table whenever the active tab changes.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use std::collections::HashMap;

use dock::{Action, Layout, LayoutError, TabNode};
use schema::Asset;

use super::views::{self, HOME_VIEW_ID, ViewKind};

#[derive(Clone, Debug)]
pub struct WorkspaceState {
    layout: Layout,
    /// Selected tab of the active tab set, mirrored from the layout.
    pub active_tab_id: Option<String>,
    /// Tab the asset-detail subsystem reads; tracks `active_tab_id`.
    pub current_tab_id: Option<String>,
    tab_assets: HashMap<String, Asset>,
    /// Asset shown by the current tab, if it is an asset-detail tab.
    pub selected_asset: Option<Asset>,
}

impl Default for WorkspaceState {
    fn default() -> Self {
        let mut state = Self::new(Layout::new());
        if let Err(err) = state.open_view(HOME_VIEW_ID) {
            leptos::logging::warn!("failed to open home view: {err}");
        }
        state
    }
}

impl WorkspaceState {
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        let mut state = Self {
            layout,
            active_tab_id: None,
            current_tab_id: None,
            tab_assets: HashMap::new(),
            selected_asset: None,
        };
        let active = state.layout.active_tab_id().map(str::to_owned);
        state.set_active(active);
        state
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Apply a layout action and mirror the resulting selection.
    ///
    /// # Errors
    ///
    /// Propagates [`LayoutError`] from the layout; state is unchanged on error.
    pub fn dispatch(&mut self, action: Action) -> Result<(), LayoutError> {
        match action {
            Action::SelectTab(id) => {
                self.layout.do_action(Action::SelectTab(id.clone()))?;
                self.set_active(Some(id));
            }
            Action::DeleteTab(id) => {
                self.layout.do_action(Action::DeleteTab(id.clone()))?;
                self.tab_assets.remove(&id);
                let successor = self.layout.active_tab_id().map(str::to_owned);
                self.set_active(successor);
            }
            other => {
                self.layout.do_action(other)?;
                let active = self.layout.active_tab_id().map(str::to_owned);
                self.set_active(active);
            }
        }
        Ok(())
    }

    /// Open (or refocus) a sidebar view. Unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Propagates [`LayoutError`] from the layout.
    pub fn open_view(&mut self, view_id: &str) -> Result<bool, LayoutError> {
        let Some(item) = views::sidebar_item(view_id) else {
            return Ok(false);
        };
        let mut tab = TabNode::new(item.id, item.label, item.id);
        tab.closeable = item.closeable;
        self.select_or_create(tab)?;
        Ok(true)
    }

    /// Open (or refocus) the detail tab for `asset`; returns its tab id.
    ///
    /// # Errors
    ///
    /// Propagates [`LayoutError`] from the layout; the tab's asset mapping is
    /// left as it was.
    pub fn open_asset(&mut self, asset: Asset) -> Result<String, LayoutError> {
        let view_id = views::detail_view_id(asset.asset_type());
        let tab_id = format!("{view_id}-{}", asset.id());
        let label = asset.common().ticker.clone();
        // Must be in place before dispatch so the selection picks it up.
        let previous = self.tab_assets.insert(tab_id.clone(), asset);
        if let Err(err) = self.select_or_create(TabNode::new(tab_id.clone(), label, view_id)) {
            match previous {
                Some(asset) => self.tab_assets.insert(tab_id, asset),
                None => self.tab_assets.remove(&tab_id),
            };
            return Err(err);
        }
        Ok(tab_id)
    }

    fn select_or_create(&mut self, tab: TabNode) -> Result<(), LayoutError> {
        if self.layout.contains_tab(&tab.id) {
            self.dispatch(Action::SelectTab(tab.id))
        } else {
            self.dispatch(Action::AddTab { tab, tabset: None })
        }
    }

    fn set_active(&mut self, tab_id: Option<String>) {
        self.selected_asset = tab_id.as_ref().and_then(|id| self.tab_assets.get(id)).cloned();
        self.current_tab_id.clone_from(&tab_id);
        self.active_tab_id = tab_id;
    }

    #[must_use]
    pub fn asset_for_tab(&self, tab_id: &str) -> Option<&Asset> {
        self.tab_assets.get(tab_id)
    }

    /// View hosted by a tab.
    #[must_use]
    pub fn view_for_tab(&self, tab_id: &str) -> Option<ViewKind> {
        self.layout.tab(tab_id).and_then(|tab| views::view_kind(&tab.component))
    }

    #[must_use]
    pub fn is_active(&self, tab_id: &str) -> bool {
        self.active_tab_id.as_deref() == Some(tab_id)
    }
}
