use super::*;

#[test]
fn sidebar_ids_are_unique() {
    let mut ids: Vec<_> = SIDEBAR_ITEMS.iter().map(|i| i.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), SIDEBAR_ITEMS.len());
}

#[test]
fn view_map_covers_sidebar_and_detail_views() {
    assert_eq!(view_map().len(), SIDEBAR_ITEMS.len() + AssetType::ALL.len());
    assert_eq!(view_kind("bonds"), Some(ViewKind::Explore(AssetType::Bonds)));
    assert_eq!(view_kind("stock-detail"), Some(ViewKind::AssetDetail(AssetType::Stocks)));
    assert_eq!(view_kind("nope"), None);
}

#[test]
fn home_view_is_pinned() {
    let home = sidebar_item(HOME_VIEW_ID).unwrap();
    assert!(!home.closeable);
}

#[test]
fn sections_keep_declaration_order() {
    let names: Vec<_> = sidebar_sections().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["Overview", "Explore", "Trade", "Research"]);
}
