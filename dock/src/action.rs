use crate::layout::TabNode;

/// A request to change the layout.
///
/// Hosts may inspect an action before handing it to
/// [`Layout::do_action`](crate::Layout::do_action), e.g. to mirror the
/// selected tab into their own state.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Select a tab and make its tab set active.
    SelectTab(String),
    /// Remove a tab. If it was selected, its left neighbour takes over.
    DeleteTab(String),
    /// Append a tab to a tab set (`None` = the active set) and select it.
    AddTab { tab: TabNode, tabset: Option<String> },
    /// Move a tab to another set, or to a fresh set split off to the right.
    MoveTab { tab_id: String, to_tabset: Option<String> },
    /// Make a tab set active without changing its selection.
    SetActiveTabSet(String),
}

impl Action {
    /// Tab the action targets, when it targets an existing one.
    #[must_use]
    pub fn tab_id(&self) -> Option<&str> {
        match self {
            Self::SelectTab(id) | Self::DeleteTab(id) => Some(id),
            Self::MoveTab { tab_id, .. } => Some(tab_id),
            Self::AddTab { .. } | Self::SetActiveTabSet(_) => None,
        }
    }
}
