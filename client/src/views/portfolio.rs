//! Home tab: portfolio overview built from the canvas widgets and demo data.

use leptos::prelude::*;

use super::mock;
use crate::components::widgets::alerts_insights::AlertsInsights;
use crate::components::widgets::allocation_donut::AllocationDonut;
use crate::components::widgets::commodity_ticker::CommodityTicker;
use crate::components::widgets::holdings_table::HoldingsTable;
use crate::components::widgets::performance_chart::PerformanceChart;
use crate::components::widgets::portfolio_summary::PortfolioSummary;
use crate::components::widgets::watchlist::Watchlist;

#[component]
pub fn PortfolioView() -> impl IntoView {
    view! {
        <div class="view view--portfolio">
            <CommodityTicker data=mock::commodities()/>
            <div class="portfolio__grid">
                <PortfolioSummary data=mock::portfolio_summary()/>
                <AllocationDonut data=mock::allocation()/>
                <PerformanceChart data=mock::performance()/>
                <AlertsInsights data=mock::alerts()/>
            </div>
            <div class="portfolio__grid">
                <HoldingsTable data=mock::holdings()/>
                <Watchlist data=mock::watchlist()/>
            </div>
        </div>
    }
}
