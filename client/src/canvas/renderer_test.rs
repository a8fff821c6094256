use super::*;
use serde_json::json;

fn entry(id: &str, kind: &str) -> ComponentEntry {
    ComponentEntry { id: id.to_owned(), kind: kind.to_owned(), data: json!({ "slot": id }) }
}

#[test]
fn one_unknown_among_four_known_yields_one_placeholder_in_place() {
    let entries = vec![
        entry("a", "PortfolioSummary"),
        entry("b", "HoldingsTable"),
        entry("c", "Sparkline3D"),
        entry("d", "NewsFeed"),
        entry("e", "KpiCard"),
    ];
    let slots = plan_canvas(&entries);

    assert_eq!(slots.len(), 5);
    let keys: Vec<_> = slots.iter().map(CanvasSlot::key).collect();
    assert_eq!(keys, ["a", "b", "c", "d", "e"]);

    let missing: Vec<_> = slots.iter().filter(|s| matches!(s, CanvasSlot::Missing { .. })).collect();
    assert_eq!(missing.len(), 1);
    assert_eq!(
        slots[2],
        CanvasSlot::Missing { key: "c".into(), type_name: "Sparkline3D".into(), position: 2 }
    );
    assert!(matches!(slots[4], CanvasSlot::Widget { kind: WidgetKind::MetricCard, .. }));
}

#[test]
fn alerts_then_unknown() {
    let slots = plan_canvas(&[entry("1", "AlertsInsights"), entry("2", "Unknown")]);
    assert!(matches!(&slots[0], CanvasSlot::Widget { kind: WidgetKind::AlertsInsights, .. }));
    assert!(matches!(&slots[1], CanvasSlot::Missing { type_name, .. } if type_name == "Unknown"));
}

#[test]
fn duplicates_are_kept_and_data_is_passed_through() {
    let slots = plan_canvas(&[entry("x", "Watchlist"), entry("x", "Watchlist")]);
    assert_eq!(slots.len(), 2);
    let CanvasSlot::Widget { data, .. } = &slots[1] else { panic!("expected widget") };
    assert_eq!(data, &json!({ "slot": "x" }));
}

#[test]
fn empty_schema_plans_nothing() {
    assert!(plan_canvas(&[]).is_empty());
}
