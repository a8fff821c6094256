//! Tab sets, tabs, and action application.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use serde::{Deserialize, Serialize};

use crate::LayoutError;
use crate::action::Action;

/// Id given to the tab set created by [`Layout::new`].
pub const MAIN_TABSET: &str = "main";

/// A single tab.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabNode {
    pub id: String,
    pub name: String,
    /// View key the host resolves when rendering the tab body.
    pub component: String,
    #[serde(default = "closeable_default")]
    pub closeable: bool,
}

fn closeable_default() -> bool {
    true
}

impl TabNode {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, component: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), component: component.into(), closeable: true }
    }

    /// Mark the tab as not closeable.
    #[must_use]
    pub fn pinned(mut self) -> Self {
        self.closeable = false;
        self
    }
}

/// An ordered group of tabs with at most one selected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSet {
    pub id: String,
    #[serde(default)]
    pub tabs: Vec<TabNode>,
    /// Index into `tabs`; `None` only when `tabs` is empty.
    #[serde(default)]
    pub selected: Option<usize>,
}

impl TabSet {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), tabs: Vec::new(), selected: None }
    }

    #[must_use]
    pub fn selected_tab(&self) -> Option<&TabNode> {
        self.selected.and_then(|i| self.tabs.get(i))
    }

    fn position(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    /// Remove the tab at `index`, handing selection to its left neighbour.
    fn remove_at(&mut self, index: usize) -> TabNode {
        let tab = self.tabs.remove(index);
        self.selected = match self.selected {
            _ if self.tabs.is_empty() => None,
            Some(sel) if sel == index => Some(index.saturating_sub(1)),
            Some(sel) if sel > index => Some(sel - 1),
            other => other,
        };
        tab
    }

    fn push_selected(&mut self, tab: TabNode) {
        self.tabs.push(tab);
        self.selected = Some(self.tabs.len() - 1);
    }
}

/// The whole docking layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    tabsets: Vec<TabSet>,
    #[serde(default)]
    active_tabset: Option<String>,
    #[serde(default)]
    split_seq: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}

impl Layout {
    /// A layout with one empty, active tab set.
    #[must_use]
    pub fn new() -> Self {
        Self { tabsets: vec![TabSet::new(MAIN_TABSET)], active_tabset: Some(MAIN_TABSET.to_owned()), split_seq: 0 }
    }

    /// Parse a layout, repairing out-of-range selections.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Json`] for malformed input and
    /// [`LayoutError::DuplicateTab`] when a tab id appears twice.
    pub fn from_json(raw: &str) -> Result<Self, LayoutError> {
        let mut layout: Self = serde_json::from_str(raw)?;
        let mut seen = std::collections::HashSet::new();
        for set in &mut layout.tabsets {
            for tab in &set.tabs {
                if !seen.insert(tab.id.clone()) {
                    return Err(LayoutError::DuplicateTab(tab.id.clone()));
                }
            }
            set.selected = match set.selected {
                _ if set.tabs.is_empty() => None,
                Some(i) if i < set.tabs.len() => Some(i),
                _ => Some(0),
            };
        }
        if layout.tabsets.is_empty() {
            layout.tabsets.push(TabSet::new(MAIN_TABSET));
        }
        let active_known = layout
            .active_tabset
            .as_deref()
            .is_some_and(|id| layout.tabsets.iter().any(|s| s.id == id));
        if !active_known {
            layout.active_tabset = layout.tabsets.first().map(|s| s.id.clone());
        }
        Ok(layout)
    }

    /// Serialize for persistence or debugging.
    ///
    /// # Errors
    ///
    /// Only fails if serde_json does, which it does not for this type.
    pub fn to_json(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string(self)?)
    }

    #[must_use]
    pub fn tabsets(&self) -> &[TabSet] {
        &self.tabsets
    }

    #[must_use]
    pub fn active_tabset(&self) -> Option<&TabSet> {
        let id = self.active_tabset.as_deref()?;
        self.tabsets.iter().find(|s| s.id == id)
    }

    /// The selected tab of the active tab set.
    #[must_use]
    pub fn active_tab_id(&self) -> Option<&str> {
        self.active_tabset()?.selected_tab().map(|t| t.id.as_str())
    }

    #[must_use]
    pub fn tab(&self, id: &str) -> Option<&TabNode> {
        self.tabsets.iter().flat_map(|s| s.tabs.iter()).find(|t| t.id == id)
    }

    #[must_use]
    pub fn contains_tab(&self, id: &str) -> bool {
        self.tab(id).is_some()
    }

    /// All tabs in layout order.
    pub fn tabs(&self) -> impl Iterator<Item = &TabNode> {
        self.tabsets.iter().flat_map(|s| s.tabs.iter())
    }

    /// Apply one action.
    ///
    /// # Errors
    ///
    /// Fails without modifying the layout when the action references an
    /// unknown tab or tab set, adds a duplicate tab id, or deletes a pinned tab.
    pub fn do_action(&mut self, action: Action) -> Result<(), LayoutError> {
        match action {
            Action::SelectTab(id) => self.select_tab(&id),
            Action::DeleteTab(id) => self.delete_tab(&id),
            Action::AddTab { tab, tabset } => self.add_tab(tab, tabset.as_deref()),
            Action::MoveTab { tab_id, to_tabset } => self.move_tab(&tab_id, to_tabset.as_deref()),
            Action::SetActiveTabSet(id) => {
                self.tabset_index(&id)?;
                self.active_tabset = Some(id);
                Ok(())
            }
        }
    }

    fn locate(&self, tab_id: &str) -> Result<(usize, usize), LayoutError> {
        self.tabsets
            .iter()
            .enumerate()
            .find_map(|(si, set)| set.position(tab_id).map(|ti| (si, ti)))
            .ok_or_else(|| LayoutError::UnknownTab(tab_id.to_owned()))
    }

    fn tabset_index(&self, id: &str) -> Result<usize, LayoutError> {
        self.tabsets
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| LayoutError::UnknownTabSet(id.to_owned()))
    }

    fn select_tab(&mut self, id: &str) -> Result<(), LayoutError> {
        let (si, ti) = self.locate(id)?;
        let set = &mut self.tabsets[si];
        set.selected = Some(ti);
        self.active_tabset = Some(set.id.clone());
        Ok(())
    }

    fn delete_tab(&mut self, id: &str) -> Result<(), LayoutError> {
        let (si, ti) = self.locate(id)?;
        if !self.tabsets[si].tabs[ti].closeable {
            return Err(LayoutError::NotCloseable(id.to_owned()));
        }
        self.detach(si, ti);
        Ok(())
    }

    fn add_tab(&mut self, tab: TabNode, tabset: Option<&str>) -> Result<(), LayoutError> {
        if self.contains_tab(&tab.id) {
            return Err(LayoutError::DuplicateTab(tab.id));
        }
        let si = match tabset.or(self.active_tabset.as_deref()) {
            Some(id) => self.tabset_index(id)?,
            None => 0,
        };
        let set = &mut self.tabsets[si];
        set.push_selected(tab);
        self.active_tabset = Some(set.id.clone());
        Ok(())
    }

    fn move_tab(&mut self, tab_id: &str, to_tabset: Option<&str>) -> Result<(), LayoutError> {
        let (si, ti) = self.locate(tab_id)?;
        let target_id = match to_tabset {
            Some(id) => {
                let target = self.tabset_index(id)?;
                if target == si {
                    return self.select_tab(tab_id);
                }
                id.to_owned()
            }
            None => {
                self.split_seq += 1;
                let id = format!("tabset-{}", self.split_seq);
                self.tabsets.insert(si + 1, TabSet::new(id.clone()));
                id
            }
        };
        let tab = self.detach(si, ti);
        let target = self.tabset_index(&target_id)?;
        self.tabsets[target].push_selected(tab);
        self.active_tabset = Some(target_id);
        Ok(())
    }

    /// Remove a tab and drop its set if that leaves it empty (keeping at least one set).
    fn detach(&mut self, si: usize, ti: usize) -> TabNode {
        let tab = self.tabsets[si].remove_at(ti);
        if self.tabsets[si].tabs.is_empty() && self.tabsets.len() > 1 {
            let removed = self.tabsets.remove(si);
            if self.active_tabset.as_deref() == Some(removed.id.as_str()) {
                self.active_tabset = self.tabsets.first().map(|s| s.id.clone());
            }
        }
        tab
    }
}
