use super::*;
use serde_json::json;

#[test]
fn decodes_with_defaults_and_unknown_severity() {
    let data: AlertsInsightsData = serde_json::from_value(json!({
        "alerts": [{ "title": "Concentration", "severity": "critical" }],
    }))
    .unwrap();
    assert_eq!(data.alerts[0].severity, Severity::Info);
    assert!(data.insights.is_empty());
    assert!(data.title.is_none());
}

#[test]
fn alerts_sorted_by_severity_then_insights() {
    let item = |id: &str, severity| AlertItem { id: id.into(), severity, ..AlertItem::default() };
    let data = AlertsInsightsData {
        title: None,
        alerts: vec![item("low", Severity::Low), item("high", Severity::High), item("med", Severity::Medium)],
        insights: vec![item("i1", Severity::High)],
    };
    let ids: Vec<_> = ordered_items(&data).into_iter().map(|i| i.id).collect();
    assert_eq!(ids, ["high", "med", "low", "i1"]);
}
