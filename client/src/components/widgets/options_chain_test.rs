use super::*;

fn contract(side: OptionSide, strike: f64, expiry: &str) -> OptionContract {
    OptionContract { side, strike, expiry: expiry.into(), ..OptionContract::default() }
}

fn chain() -> Vec<OptionContract> {
    vec![
        contract(OptionSide::Put, 110.0, "2025-01-17"),
        contract(OptionSide::Call, 100.0, "2025-01-17"),
        contract(OptionSide::Call, 110.0, "2025-01-17"),
        contract(OptionSide::Put, 100.0, "2025-02-21"),
    ]
}

#[test]
fn expiries_keep_first_seen_order() {
    assert_eq!(expiries(&chain()), ["2025-01-17", "2025-02-21"]);
}

#[test]
fn calls_filter_drops_puts() {
    let rows = visible_contracts(&chain(), SideFilter::Calls, None);
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|c| c.side == OptionSide::Call));
}

#[test]
fn rows_sort_by_strike_with_calls_first() {
    let rows = visible_contracts(&chain(), SideFilter::Both, Some("2025-01-17"));
    let keys: Vec<_> = rows.iter().map(|c| (c.strike, c.side)).collect();
    assert_eq!(
        keys,
        [(100.0, OptionSide::Call), (110.0, OptionSide::Call), (110.0, OptionSide::Put)]
    );
}

#[test]
fn moneyness_depends_on_side() {
    assert!(in_the_money(&contract(OptionSide::Call, 95.0, ""), 100.0));
    assert!(!in_the_money(&contract(OptionSide::Put, 95.0, ""), 100.0));
    assert!(in_the_money(&contract(OptionSide::Put, 105.0, ""), 100.0));
}

#[test]
fn side_decodes_from_type_alias() {
    let c: OptionContract = serde_json::from_str(r#"{"type":"put","strike":50}"#).unwrap();
    assert_eq!(c.side, OptionSide::Put);
}
