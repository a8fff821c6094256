use super::*;

// =============================================================
// Helpers
// =============================================================

fn layout_with(ids: &[&str]) -> Layout {
    let mut layout = Layout::new();
    for id in ids {
        layout
            .do_action(Action::AddTab { tab: TabNode::new(*id, *id, "view"), tabset: None })
            .unwrap();
    }
    layout
}

fn ids(set: &TabSet) -> Vec<&str> {
    set.tabs.iter().map(|t| t.id.as_str()).collect()
}

// =============================================================
// AddTab / SelectTab
// =============================================================

#[test]
fn new_layout_has_one_empty_active_set() {
    let layout = Layout::new();
    assert_eq!(layout.tabsets().len(), 1);
    assert_eq!(layout.active_tabset().map(|s| s.id.as_str()), Some(MAIN_TABSET));
    assert_eq!(layout.active_tab_id(), None);
}

#[test]
fn add_tab_appends_and_selects() {
    let layout = layout_with(&["a", "b", "c"]);
    assert_eq!(ids(&layout.tabsets()[0]), ["a", "b", "c"]);
    assert_eq!(layout.active_tab_id(), Some("c"));
}

#[test]
fn add_duplicate_tab_is_rejected() {
    let mut layout = layout_with(&["a"]);
    let err = layout.do_action(Action::AddTab { tab: TabNode::new("a", "A", "view"), tabset: None });
    assert!(matches!(err, Err(LayoutError::DuplicateTab(id)) if id == "a"));
    assert_eq!(layout.tabs().count(), 1);
}

#[test]
fn select_tab_changes_active_tab() {
    let mut layout = layout_with(&["a", "b", "c"]);
    layout.do_action(Action::SelectTab("a".into())).unwrap();
    assert_eq!(layout.active_tab_id(), Some("a"));
}

#[test]
fn select_unknown_tab_fails() {
    let mut layout = layout_with(&["a"]);
    assert!(matches!(layout.do_action(Action::SelectTab("zz".into())), Err(LayoutError::UnknownTab(_))));
    assert_eq!(layout.active_tab_id(), Some("a"));
}

// =============================================================
// DeleteTab
// =============================================================

#[test]
fn deleting_selected_tab_selects_left_neighbour() {
    let mut layout = layout_with(&["a", "b", "c"]);
    layout.do_action(Action::SelectTab("b".into())).unwrap();
    layout.do_action(Action::DeleteTab("b".into())).unwrap();
    assert_eq!(layout.active_tab_id(), Some("a"));
}

#[test]
fn deleting_leftmost_selected_tab_selects_new_first() {
    let mut layout = layout_with(&["a", "b"]);
    layout.do_action(Action::SelectTab("a".into())).unwrap();
    layout.do_action(Action::DeleteTab("a".into())).unwrap();
    assert_eq!(layout.active_tab_id(), Some("b"));
}

#[test]
fn deleting_unselected_tab_keeps_selection() {
    let mut layout = layout_with(&["a", "b", "c"]);
    layout.do_action(Action::DeleteTab("a".into())).unwrap();
    assert_eq!(layout.active_tab_id(), Some("c"));
    assert_eq!(layout.tabsets()[0].selected, Some(1));
}

#[test]
fn deleting_last_tab_leaves_empty_set() {
    let mut layout = layout_with(&["a"]);
    layout.do_action(Action::DeleteTab("a".into())).unwrap();
    assert_eq!(layout.tabsets().len(), 1);
    assert_eq!(layout.active_tab_id(), None);
}

#[test]
fn pinned_tab_cannot_be_deleted() {
    let mut layout = Layout::new();
    layout
        .do_action(Action::AddTab { tab: TabNode::new("home", "Home", "portfolio").pinned(), tabset: None })
        .unwrap();
    assert!(matches!(layout.do_action(Action::DeleteTab("home".into())), Err(LayoutError::NotCloseable(_))));
    assert!(layout.contains_tab("home"));
}

// =============================================================
// MoveTab / tab sets
// =============================================================

#[test]
fn move_tab_to_new_set_splits_right() {
    let mut layout = layout_with(&["a", "b"]);
    layout.do_action(Action::MoveTab { tab_id: "b".into(), to_tabset: None }).unwrap();
    assert_eq!(layout.tabsets().len(), 2);
    assert_eq!(ids(&layout.tabsets()[0]), ["a"]);
    assert_eq!(ids(&layout.tabsets()[1]), ["b"]);
    assert_eq!(layout.active_tab_id(), Some("b"));
}

#[test]
fn emptied_set_is_removed_and_active_moves_to_first() {
    let mut layout = layout_with(&["a", "b"]);
    layout.do_action(Action::MoveTab { tab_id: "b".into(), to_tabset: None }).unwrap();
    layout.do_action(Action::DeleteTab("b".into())).unwrap();
    assert_eq!(layout.tabsets().len(), 1);
    assert_eq!(layout.active_tab_id(), Some("a"));
}

#[test]
fn add_tab_targets_active_set() {
    let mut layout = layout_with(&["a", "b"]);
    layout.do_action(Action::MoveTab { tab_id: "b".into(), to_tabset: None }).unwrap();
    layout.do_action(Action::AddTab { tab: TabNode::new("c", "C", "view"), tabset: None }).unwrap();
    assert_eq!(ids(&layout.tabsets()[1]), ["b", "c"]);
}

#[test]
fn set_active_tabset_requires_known_id() {
    let mut layout = layout_with(&["a"]);
    assert!(matches!(
        layout.do_action(Action::SetActiveTabSet("nope".into())),
        Err(LayoutError::UnknownTabSet(_))
    ));
    layout.do_action(Action::SetActiveTabSet(MAIN_TABSET.into())).unwrap();
}

// =============================================================
// JSON
// =============================================================

#[test]
fn json_round_trip_preserves_layout() {
    let layout = layout_with(&["a", "b"]);
    let raw = layout.to_json().unwrap();
    assert_eq!(Layout::from_json(&raw).unwrap(), layout);
}

#[test]
fn from_json_repairs_selection_and_active_set() {
    let raw = r#"{
        "tabsets": [
            { "id": "left", "tabs": [{ "id": "a", "name": "A", "component": "v" }], "selected": 7 }
        ],
        "activeTabset": "missing"
    }"#;
    let layout = Layout::from_json(raw).unwrap();
    assert_eq!(layout.active_tab_id(), Some("a"));
    assert!(layout.tab("a").unwrap().closeable);
}

#[test]
fn from_json_rejects_duplicate_tabs() {
    let raw = r#"{ "tabsets": [
        { "id": "l", "tabs": [{ "id": "a", "name": "A", "component": "v" }] },
        { "id": "r", "tabs": [{ "id": "a", "name": "A", "component": "v" }] }
    ] }"#;
    assert!(matches!(Layout::from_json(raw), Err(LayoutError::DuplicateTab(_))));
}

#[test]
fn action_reports_target_tab() {
    assert_eq!(Action::DeleteTab("x".into()).tab_id(), Some("x"));
    assert_eq!(Action::SetActiveTabSet("s".into()).tab_id(), None);
}
