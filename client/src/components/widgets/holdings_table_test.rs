use super::*;

fn holding(ticker: &str, value: f64, change: f64) -> Holding {
    Holding {
        ticker: ticker.into(),
        market_value: value,
        day_change_percent: change,
        ..Holding::default()
    }
}

fn tickers(rows: &[Holding]) -> Vec<&str> {
    rows.iter().map(|h| h.ticker.as_str()).collect()
}

#[test]
fn value_sort_puts_largest_first_by_default() {
    let mut rows = vec![holding("A", 10.0, 0.0), holding("B", 30.0, 0.0), holding("C", 20.0, 0.0)];
    sort_holdings(&mut rows, HoldingColumn::MarketValue, true);
    assert_eq!(tickers(&rows), ["B", "C", "A"]);
    sort_holdings(&mut rows, HoldingColumn::MarketValue, false);
    assert_eq!(tickers(&rows), ["A", "C", "B"]);
}

#[test]
fn ticker_sort_is_alphabetical() {
    let mut rows = vec![holding("MSFT", 0.0, 0.0), holding("AAPL", 0.0, 0.0)];
    sort_holdings(&mut rows, HoldingColumn::Ticker, true);
    assert_eq!(tickers(&rows), ["AAPL", "MSFT"]);
}

#[test]
fn decodes_camel_case_rows() {
    let data: HoldingsTableData = serde_json::from_str(
        r#"{"holdings":[{"ticker":"AAPL","marketValue":1200.5,"dayChangePercent":-0.4}]}"#,
    )
    .unwrap();
    assert_eq!(data.holdings[0].market_value, 1200.5);
    assert_eq!(data.holdings[0].day_change_percent, -0.4);
}
