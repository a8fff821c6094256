//! Component registry: canvas type names → widgets.
//!
//! DESIGN
//! ======
//! The widget set is closed ([`WidgetKind`]), but canvas schemas name widgets
//! by string and the backend has used more than one spelling for some of
//! them. [`REGISTRY`] lists every accepted spelling; lookup is a single map
//! access and an unknown name is simply `None`.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::HashMap;
use std::sync::OnceLock;

use leptos::prelude::*;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::components::widgets::alerts_insights::{AlertsInsights, AlertsInsightsData};
use crate::components::widgets::allocation_donut::{AllocationDonut, AllocationDonutData};
use crate::components::widgets::bond_table::{BondTable, BondTableData};
use crate::components::widgets::commodity_ticker::{CommodityTicker, CommodityTickerData};
use crate::components::widgets::holdings_table::{HoldingsTable, HoldingsTableData};
use crate::components::widgets::metric_card::{MetricCard, MetricCardData};
use crate::components::widgets::news_feed::{NewsFeed, NewsFeedData};
use crate::components::widgets::options_chain::{OptionsChain, OptionsChainData};
use crate::components::widgets::performance_chart::{PerformanceChart, PerformanceChartData};
use crate::components::widgets::portfolio_summary::{PortfolioSummary, PortfolioSummaryData};
use crate::components::widgets::stock_quote::{StockQuote, StockQuoteData};
use crate::components::widgets::watchlist::{Watchlist, WatchlistData};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    AlertsInsights,
    PortfolioSummary,
    HoldingsTable,
    AllocationDonut,
    PerformanceChart,
    MetricCard,
    NewsFeed,
    BondTable,
    StockQuote,
    OptionsChain,
    CommodityTicker,
    Watchlist,
}

impl WidgetKind {
    pub const ALL: [Self; 12] = [
        Self::AlertsInsights,
        Self::PortfolioSummary,
        Self::HoldingsTable,
        Self::AllocationDonut,
        Self::PerformanceChart,
        Self::MetricCard,
        Self::NewsFeed,
        Self::BondTable,
        Self::StockQuote,
        Self::OptionsChain,
        Self::CommodityTicker,
        Self::Watchlist,
    ];

    /// Canonical registry name.
    pub fn name(self) -> &'static str {
        match self {
            Self::AlertsInsights => "AlertsInsights",
            Self::PortfolioSummary => "PortfolioSummary",
            Self::HoldingsTable => "HoldingsTable",
            Self::AllocationDonut => "AllocationDonut",
            Self::PerformanceChart => "PerformanceChart",
            Self::MetricCard => "MetricCard",
            Self::NewsFeed => "NewsFeed",
            Self::BondTable => "BondTable",
            Self::StockQuote => "StockQuote",
            Self::OptionsChain => "OptionsChain",
            Self::CommodityTicker => "CommodityTicker",
            Self::Watchlist => "Watchlist",
        }
    }
}

/// Every accepted type name, canonical names first, then aliases.
pub const REGISTRY: &[(&str, WidgetKind)] = &[
    ("AlertsInsights", WidgetKind::AlertsInsights),
    ("PortfolioSummary", WidgetKind::PortfolioSummary),
    ("HoldingsTable", WidgetKind::HoldingsTable),
    ("AllocationDonut", WidgetKind::AllocationDonut),
    ("PerformanceChart", WidgetKind::PerformanceChart),
    ("MetricCard", WidgetKind::MetricCard),
    ("NewsFeed", WidgetKind::NewsFeed),
    ("BondTable", WidgetKind::BondTable),
    ("StockQuote", WidgetKind::StockQuote),
    ("OptionsChain", WidgetKind::OptionsChain),
    ("CommodityTicker", WidgetKind::CommodityTicker),
    ("Watchlist", WidgetKind::Watchlist),
    // aliases
    ("AlertInsights", WidgetKind::AlertsInsights),
    ("PortfolioOverview", WidgetKind::PortfolioSummary),
    ("AllocationChart", WidgetKind::AllocationDonut),
    ("PerformanceLineChart", WidgetKind::PerformanceChart),
    ("KpiCard", WidgetKind::MetricCard),
    ("WatchList", WidgetKind::Watchlist),
];

pub fn registry() -> &'static HashMap<&'static str, WidgetKind> {
    static MAP: OnceLock<HashMap<&'static str, WidgetKind>> = OnceLock::new();
    MAP.get_or_init(|| REGISTRY.iter().copied().collect())
}

/// Resolve a canvas `type`. Case-sensitive; unknown names are `None`.
pub fn lookup(type_name: &str) -> Option<WidgetKind> {
    registry().get(type_name).copied()
}

/// Decode a widget's input. `null` (or a missing `data` key) means "use
/// defaults".
///
/// # Errors
///
/// Returns the serde error when `data` does not match the widget's shape.
pub fn decode_widget_data<T: DeserializeOwned + Default>(data: &Value) -> Result<T, serde_json::Error> {
    if data.is_null() {
        return Ok(T::default());
    }
    T::deserialize(data)
}

fn with_data<T, V>(kind: WidgetKind, data: &Value, render: impl FnOnce(T) -> V) -> AnyView
where
    T: DeserializeOwned + Default,
    V: IntoView + 'static,
{
    match decode_widget_data::<T>(data) {
        Ok(decoded) => render(decoded).into_any(),
        Err(err) => {
            leptos::logging::warn!("{} received invalid data: {err}", kind.name());
            let message = format!("{}: invalid data ({err})", kind.name());
            view! { <div class="canvas-widget canvas-widget--invalid">{message}</div> }.into_any()
        }
    }
}

/// Render `kind` with its raw canvas input.
pub fn render_widget(kind: WidgetKind, data: &Value) -> AnyView {
    match kind {
        WidgetKind::AlertsInsights => with_data(kind, data, |data: AlertsInsightsData| view! { <AlertsInsights data/> }),
        WidgetKind::PortfolioSummary => with_data(kind, data, |data: PortfolioSummaryData| view! { <PortfolioSummary data/> }),
        WidgetKind::HoldingsTable => with_data(kind, data, |data: HoldingsTableData| view! { <HoldingsTable data/> }),
        WidgetKind::AllocationDonut => with_data(kind, data, |data: AllocationDonutData| view! { <AllocationDonut data/> }),
        WidgetKind::PerformanceChart => with_data(kind, data, |data: PerformanceChartData| view! { <PerformanceChart data/> }),
        WidgetKind::MetricCard => with_data(kind, data, |data: MetricCardData| view! { <MetricCard data/> }),
        WidgetKind::NewsFeed => with_data(kind, data, |data: NewsFeedData| view! { <NewsFeed data/> }),
        WidgetKind::BondTable => with_data(kind, data, |data: BondTableData| view! { <BondTable data/> }),
        WidgetKind::StockQuote => with_data(kind, data, |data: StockQuoteData| view! { <StockQuote data/> }),
        WidgetKind::OptionsChain => with_data(kind, data, |data: OptionsChainData| view! { <OptionsChain data/> }),
        WidgetKind::CommodityTicker => with_data(kind, data, |data: CommodityTickerData| view! { <CommodityTicker data/> }),
        WidgetKind::Watchlist => with_data(kind, data, |data: WatchlistData| view! { <Watchlist data/> }),
    }
}
