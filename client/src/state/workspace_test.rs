use super::*;
use schema::{AssetCommon, AssetType, Bond, Stock};

// =============================================================
// Helpers
// =============================================================

fn common(id: &str, ticker: &str) -> AssetCommon {
    AssetCommon {
        id: id.to_owned(),
        name: format!("{ticker} name"),
        ticker: ticker.to_owned(),
        region: "US".into(),
        sector: "Tech".into(),
        is_held: false,
    }
}

fn stock(id: &str) -> Asset {
    Asset::Stocks(Stock {
        common: common(id, &id.to_uppercase()),
        price: 10.0,
        pe_ratio: None,
        market_cap: 1.0e9,
        dividend_yield: None,
    })
}

fn bond(id: &str) -> Asset {
    Asset::Bonds(Bond {
        common: common(id, &id.to_uppercase()),
        price_of_par: 99.0,
        yield_to_maturity: 4.0,
        coupon_rate: 3.5,
        maturity_date: "2030-01-01".into(),
        rating: "AA".into(),
    })
}

fn tab_ids(ws: &WorkspaceState) -> Vec<String> {
    ws.layout().tabs().map(|t| t.id.clone()).collect()
}

// =============================================================
// Sidebar views
// =============================================================

#[test]
fn default_workspace_opens_pinned_home_tab() {
    let ws = WorkspaceState::default();
    assert_eq!(ws.active_tab_id.as_deref(), Some(HOME_VIEW_ID));
    assert!(!ws.layout().tab(HOME_VIEW_ID).unwrap().closeable);
}

#[test]
fn opening_view_appends_to_active_group_and_selects() {
    let mut ws = WorkspaceState::default();
    assert!(ws.open_view("news").unwrap());
    assert_eq!(tab_ids(&ws), ["portfolio", "news"]);
    assert_eq!(ws.active_tab_id.as_deref(), Some("news"));
    assert_eq!(ws.view_for_tab("news"), Some(ViewKind::News));
}

#[test]
fn reopening_view_selects_existing_tab() {
    let mut ws = WorkspaceState::default();
    ws.open_view("news").unwrap();
    ws.open_view("bonds").unwrap();
    ws.open_view("news").unwrap();
    assert_eq!(tab_ids(&ws), ["portfolio", "news", "bonds"]);
    assert_eq!(ws.active_tab_id.as_deref(), Some("news"));
}

#[test]
fn unknown_view_is_silent_noop() {
    let mut ws = WorkspaceState::default();
    assert!(!ws.open_view("does-not-exist").unwrap());
    assert_eq!(tab_ids(&ws), ["portfolio"]);
    assert_eq!(ws.active_tab_id.as_deref(), Some("portfolio"));
}

// =============================================================
// Asset tabs
// =============================================================

#[test]
fn asset_tab_id_combines_view_and_asset_id() {
    let mut ws = WorkspaceState::default();
    let tab = ws.open_asset(stock("acme")).unwrap();
    assert_eq!(tab, "stock-detail-acme");
    assert_eq!(ws.view_for_tab(&tab), Some(ViewKind::AssetDetail(AssetType::Stocks)));
    assert_eq!(ws.selected_asset.as_ref().map(Asset::id), Some("acme"));
}

#[test]
fn opening_same_asset_twice_reuses_tab() {
    let mut ws = WorkspaceState::default();
    ws.open_asset(stock("acme")).unwrap();
    ws.open_view("news").unwrap();
    ws.open_asset(stock("acme")).unwrap();

    let count = tab_ids(&ws).iter().filter(|id| *id == "stock-detail-acme").count();
    assert_eq!(count, 1);
    assert_eq!(ws.active_tab_id.as_deref(), Some("stock-detail-acme"));
}

#[test]
fn same_view_shows_different_assets_per_tab() {
    let mut ws = WorkspaceState::default();
    let a = ws.open_asset(stock("acme")).unwrap();
    let b = ws.open_asset(stock("globex")).unwrap();
    assert_eq!(ws.asset_for_tab(&a).map(Asset::id), Some("acme"));
    assert_eq!(ws.asset_for_tab(&b).map(Asset::id), Some("globex"));

    ws.dispatch(Action::SelectTab(a.clone())).unwrap();
    assert_eq!(ws.selected_asset.as_ref().map(Asset::id), Some("acme"));
    assert_eq!(ws.current_tab_id.as_deref(), Some(a.as_str()));
}

#[test]
fn switching_to_non_asset_tab_clears_selected_asset() {
    let mut ws = WorkspaceState::default();
    ws.open_asset(bond("ust10")).unwrap();
    ws.dispatch(Action::SelectTab(HOME_VIEW_ID.into())).unwrap();
    assert!(ws.selected_asset.is_none());
}

// =============================================================
// Closing tabs
// =============================================================

#[test]
fn closing_active_tab_selects_left_neighbour_and_republishes_asset() {
    let mut ws = WorkspaceState::default();
    let a = ws.open_asset(stock("acme")).unwrap();
    let b = ws.open_asset(bond("ust10")).unwrap();
    assert!(ws.is_active(&b));

    ws.dispatch(Action::DeleteTab(b.clone())).unwrap();

    assert_eq!(ws.active_tab_id.as_deref(), Some(a.as_str()));
    assert_eq!(ws.current_tab_id.as_deref(), Some(a.as_str()));
    assert_eq!(ws.selected_asset.as_ref().map(Asset::id), Some("acme"));
    assert!(ws.asset_for_tab(&b).is_none());
}

#[test]
fn closing_down_to_sole_tab_selects_it() {
    let mut ws = WorkspaceState::default();
    let a = ws.open_asset(stock("acme")).unwrap();
    ws.dispatch(Action::DeleteTab(a)).unwrap();
    assert_eq!(ws.active_tab_id.as_deref(), Some(HOME_VIEW_ID));
    assert!(ws.selected_asset.is_none());
}

#[test]
fn failed_asset_open_leaves_no_asset_mapping() {
    // Deserialized directly so the dangling active tab set is not repaired.
    let layout: Layout =
        serde_json::from_value(serde_json::json!({ "tabsets": [{ "id": "main" }], "activeTabset": "gone" })).unwrap();
    let mut ws = WorkspaceState::new(layout);
    let err = ws.open_asset(stock("acme")).unwrap_err();
    assert!(matches!(err, LayoutError::UnknownTabSet(id) if id == "gone"));
    assert!(ws.asset_for_tab("stock-detail-acme").is_none());
    assert!(ws.selected_asset.is_none());
    assert_eq!(ws.layout().tabs().count(), 0);
}

#[test]
fn closing_inactive_tab_keeps_active_tab() {
    let mut ws = WorkspaceState::default();
    let a = ws.open_asset(stock("acme")).unwrap();
    ws.open_view("news").unwrap();
    ws.dispatch(Action::DeleteTab(a.clone())).unwrap();
    assert_eq!(ws.active_tab_id.as_deref(), Some("news"));
    assert!(ws.asset_for_tab(&a).is_none());
}

#[test]
fn closing_pinned_home_tab_fails_without_changes() {
    let mut ws = WorkspaceState::default();
    assert!(ws.dispatch(Action::DeleteTab(HOME_VIEW_ID.into())).is_err());
    assert_eq!(ws.active_tab_id.as_deref(), Some(HOME_VIEW_ID));
}

#[test]
fn split_keeps_mirrored_selection() {
    let mut ws = WorkspaceState::default();
    ws.open_view("news").unwrap();
    ws.dispatch(Action::MoveTab { tab_id: "news".into(), to_tabset: None }).unwrap();
    assert_eq!(ws.layout().tabsets().len(), 2);
    assert_eq!(ws.active_tab_id.as_deref(), Some("news"));

    ws.open_view("bonds").unwrap();
    assert_eq!(ws.layout().tabsets()[1].tabs.len(), 2);
}
