//! Presentational canvas widgets.
//!
//! Each widget takes one fully-formed, `Deserialize`-able data struct (the
//! canvas entry's `data`) and keeps any interaction state local. Widgets
//! never read shared context.

pub mod alerts_insights;
pub mod allocation_donut;
pub mod bond_table;
pub mod commodity_ticker;
pub mod holdings_table;
pub mod metric_card;
pub mod news_feed;
pub mod options_chain;
pub mod performance_chart;
pub mod portfolio_summary;
pub mod stock_quote;
pub mod watchlist;
