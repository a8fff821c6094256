//! Static demo data for views that have no backend feed.

use crate::components::widgets::alerts_insights::{AlertItem, AlertsInsightsData, Severity};
use crate::components::widgets::allocation_donut::{AllocationDonutData, AllocationSlice};
use crate::components::widgets::commodity_ticker::{CommodityQuote, CommodityTickerData};
use crate::components::widgets::holdings_table::{Holding, HoldingsTableData};
use crate::components::widgets::options_chain::{OptionContract, OptionSide, OptionsChainData};
use crate::components::widgets::performance_chart::{PerformanceChartData, PerformancePoint};
use crate::components::widgets::portfolio_summary::PortfolioSummaryData;
use crate::components::widgets::watchlist::{WatchItem, WatchlistData};

pub fn portfolio_summary() -> PortfolioSummaryData {
    PortfolioSummaryData {
        total_value: 1_284_530.42,
        day_change: 6_412.18,
        day_change_percent: 0.50,
        total_return_percent: 14.82,
        cash: 48_200.0,
        as_of: Some("2026-10-16".to_owned()),
    }
}

fn holding(ticker: &str, name: &str, quantity: f64, price: f64, weight: f64, day_change_percent: f64) -> Holding {
    Holding {
        ticker: ticker.to_owned(),
        name: name.to_owned(),
        quantity,
        price,
        market_value: quantity * price,
        weight,
        day_change_percent,
    }
}

pub fn holdings() -> HoldingsTableData {
    HoldingsTableData {
        title: Some("Holdings".to_owned()),
        holdings: vec![
            holding("AAPL", "Apple Inc.", 850.0, 228.40, 15.1, 0.84),
            holding("MSFT", "Microsoft Corp.", 420.0, 431.12, 14.1, -0.32),
            holding("JPM", "JPMorgan Chase & Co.", 600.0, 221.75, 10.4, 1.12),
            holding("SPY", "SPDR S&P 500 ETF", 700.0, 571.30, 31.1, 0.41),
            holding("AGG", "iShares Core US Aggregate Bond", 1_900.0, 99.84, 14.8, -0.05),
            holding("GLD", "SPDR Gold Shares", 260.0, 246.10, 5.0, 0.77),
        ],
    }
}

fn slice(label: &str, value: f64) -> AllocationSlice {
    AllocationSlice { label: label.to_owned(), value, color: None }
}

pub fn allocation() -> AllocationDonutData {
    AllocationDonutData {
        title: Some("Allocation".to_owned()),
        slices: vec![
            slice("Equities", 58.0),
            slice("Fixed income", 24.0),
            slice("Commodities", 7.0),
            slice("Cash", 4.0),
            slice("Alternatives", 7.0),
        ],
    }
}

/// Roughly a year of weekly closes with a gentle upward drift.
pub fn performance() -> PerformanceChartData {
    let series = |base: f64, drift: f64, wobble: f64| -> Vec<PerformancePoint> {
        (0..52u32)
            .map(|week| {
                let t = f64::from(week);
                PerformancePoint {
                    date: format!("2025-W{:02}", week + 1),
                    value: base * (1.0 + drift * t) + wobble * (t * 0.7).sin(),
                }
            })
            .collect()
    };
    PerformanceChartData {
        title: Some("Performance".to_owned()),
        points: series(1_120_000.0, 0.0028, 18_000.0),
        benchmark: series(1_120_000.0, 0.0022, 9_000.0),
    }
}

fn alert(id: &str, title: &str, description: &str, severity: Severity, kind: &str) -> AlertItem {
    AlertItem {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        severity,
        kind: kind.to_owned(),
    }
}

pub fn alerts() -> AlertsInsightsData {
    AlertsInsightsData {
        title: Some("Alerts & insights".to_owned()),
        alerts: vec![
            alert("a1", "Equity overweight", "Equities are 6pp above the 52% target.", Severity::High, "allocation"),
            alert("a2", "Bond maturing", "UST 2Y matures within 12 months.", Severity::Medium, "maturity"),
        ],
        insights: vec![alert(
            "i1",
            "Dividend income up",
            "Trailing dividend income rose 8% quarter over quarter.",
            Severity::Info,
            "income",
        )],
    }
}

fn contract(side: OptionSide, strike: f64, expiry: &str, mid: f64, iv: f64, delta: f64, rank: u64) -> OptionContract {
    OptionContract {
        side,
        strike,
        expiry: expiry.to_owned(),
        bid: mid - 0.05,
        ask: mid + 0.05,
        last: mid,
        volume: 1_000 + rank * 113,
        open_interest: 5_000 + rank * 411,
        implied_volatility: iv,
        delta,
    }
}

pub fn options_chain() -> OptionsChainData {
    let mut contracts = Vec::new();
    for (expiry, time_value) in [("2026-11-20", 1.0), ("2026-12-18", 1.6)] {
        for (strike, rank) in [210.0_f64, 220.0, 230.0, 240.0, 250.0].into_iter().zip(0u32..) {
            let moneyness = (228.40 - strike) / 10.0;
            let iv = 0.24 + 0.01 * (f64::from(rank) - 2.0).abs();
            let call_delta = (0.5 + moneyness * 0.15).clamp(0.05, 0.95);
            let call_mid = (228.40_f64 - strike).max(0.0) + 2.5 * time_value;
            let put_mid = (strike - 228.40_f64).max(0.0) + 2.3 * time_value;
            let rank = u64::from(rank);
            contracts.push(contract(OptionSide::Call, strike, expiry, call_mid, iv, call_delta, rank));
            contracts.push(contract(OptionSide::Put, strike, expiry, put_mid, iv, call_delta - 1.0, rank));
        }
    }
    OptionsChainData { underlying: "AAPL".to_owned(), underlying_price: 228.40, contracts }
}

fn quote(name: &str, ticker: &str, price: f64, unit: &str, change_percent: f64) -> CommodityQuote {
    CommodityQuote {
        name: name.to_owned(),
        ticker: ticker.to_owned(),
        price,
        unit: unit.to_owned(),
        change_percent,
    }
}

pub fn commodities() -> CommodityTickerData {
    CommodityTickerData {
        commodities: vec![
            quote("Gold", "XAU", 2_655.30, "oz", 0.42),
            quote("Silver", "XAG", 31.24, "oz", -0.61),
            quote("WTI crude", "CL", 71.08, "bbl", 1.35),
            quote("Natural gas", "NG", 2.41, "MMBtu", -2.10),
        ],
    }
}

fn watch(ticker: &str, name: &str, price: f64, change_percent: f64, starred: bool) -> WatchItem {
    WatchItem { ticker: ticker.to_owned(), name: name.to_owned(), price, change_percent, starred }
}

pub fn watchlist() -> WatchlistData {
    WatchlistData {
        title: Some("Watchlist".to_owned()),
        items: vec![
            watch("NVDA", "NVIDIA Corp.", 138.00, 2.31, true),
            watch("ASML", "ASML Holding", 702.15, -1.04, false),
            watch("TSLA", "Tesla Inc.", 219.16, 0.88, false),
            watch("QQQ", "Invesco QQQ Trust", 493.36, 0.57, true),
        ],
    }
}
