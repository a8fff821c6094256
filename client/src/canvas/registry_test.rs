use super::*;
use serde_json::json;

#[test]
fn every_kind_is_registered_under_its_canonical_name() {
    for kind in WidgetKind::ALL {
        assert_eq!(lookup(kind.name()), Some(kind));
    }
}

#[test]
fn aliases_resolve_to_the_same_widget() {
    assert_eq!(lookup("AlertInsights"), lookup("AlertsInsights"));
    assert_eq!(lookup("PortfolioOverview"), Some(WidgetKind::PortfolioSummary));
    assert_eq!(lookup("AllocationChart"), Some(WidgetKind::AllocationDonut));
    assert_eq!(lookup("PerformanceLineChart"), Some(WidgetKind::PerformanceChart));
    assert_eq!(lookup("KpiCard"), Some(WidgetKind::MetricCard));
    assert_eq!(lookup("WatchList"), Some(WidgetKind::Watchlist));
}

#[test]
fn unknown_names_are_none() {
    assert_eq!(lookup("Unknown"), None);
    assert_eq!(lookup("alertsinsights"), None);
    assert_eq!(lookup(""), None);
}

#[test]
fn registry_names_are_unique() {
    assert_eq!(registry().len(), REGISTRY.len());
}

#[derive(Debug, Default, PartialEq, serde::Deserialize)]
struct Probe {
    #[serde(default)]
    title: String,
}

#[test]
fn null_data_decodes_to_defaults() {
    assert_eq!(decode_widget_data::<Probe>(&Value::Null).unwrap(), Probe::default());
}

#[test]
fn mismatched_data_is_an_error() {
    assert!(decode_widget_data::<Probe>(&json!({"title": 5})).is_err());
    assert_eq!(decode_widget_data::<Probe>(&json!({"title": "x"})).unwrap().title, "x");
}
