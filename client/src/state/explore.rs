//! Explore view state: filtering and sorting of the asset catalog.
//!
//! The catalog is static mock data; the filter and sort are UI-local and live
//! in per-view signals, so this module is plain functions over slices.

#[cfg(test)]
#[path = "explore_test.rs"]
mod explore_test;

use std::cmp::Ordering;
use std::collections::BTreeSet;

use schema::{Asset, AssetCommon, AssetType, Bond, Commodity, Etf, Stock};

/// Filter controls shown above the explore table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExploreFilter {
    /// Case-insensitive match against name and ticker.
    pub search: String,
    /// Empty means any region.
    pub region: String,
    /// Empty means any sector.
    pub sector: String,
    pub held_only: bool,
}

impl ExploreFilter {
    #[must_use]
    pub fn matches(&self, asset: &Asset) -> bool {
        let common = asset.common();
        if self.held_only && !common.is_held {
            return false;
        }
        if !self.region.is_empty() && common.region != self.region {
            return false;
        }
        if !self.sector.is_empty() && common.sector != self.sector {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || common.name.to_lowercase().contains(&needle)
            || common.ticker.to_lowercase().contains(&needle)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    Ticker,
    Region,
    Sector,
    Price,
}

impl SortKey {
    pub const ALL: [Self; 5] = [Self::Name, Self::Ticker, Self::Region, Self::Sector, Self::Price];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Ticker => "Ticker",
            Self::Region => "Region",
            Self::Sector => "Sector",
            Self::Price => "Price",
        }
    }

    fn compare(self, a: &Asset, b: &Asset) -> Ordering {
        let (ca, cb) = (a.common(), b.common());
        match self {
            Self::Name => ca.name.cmp(&cb.name),
            Self::Ticker => ca.ticker.cmp(&cb.ticker),
            Self::Region => ca.region.cmp(&cb.region),
            Self::Sector => ca.sector.cmp(&cb.sector),
            Self::Price => a.price().total_cmp(&b.price()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Column sort; clicking the active column flips direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExploreSort {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl ExploreSort {
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
        } else {
            self.key = key;
            self.direction = SortDirection::Ascending;
        }
    }

    /// Indicator for the column header.
    #[must_use]
    pub fn marker(self, key: SortKey) -> &'static str {
        match (self.key == key, self.direction) {
            (false, _) => "",
            (true, SortDirection::Ascending) => " ▲",
            (true, SortDirection::Descending) => " ▼",
        }
    }
}

/// Assets of `asset_type` passing `filter`, ordered by `sort`. Ties keep
/// catalog order.
#[must_use]
pub fn filter_and_sort(assets: &[Asset], asset_type: AssetType, filter: &ExploreFilter, sort: ExploreSort) -> Vec<Asset> {
    let mut rows: Vec<Asset> =
        assets.iter().filter(|a| a.asset_type() == asset_type && filter.matches(a)).cloned().collect();
    rows.sort_by(|a, b| {
        let ord = sort.key.compare(a, b);
        match sort.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    rows
}

/// Sorted distinct non-empty values of one header field, for filter dropdowns.
#[must_use]
pub fn distinct_values(assets: &[Asset], asset_type: AssetType, field: fn(&AssetCommon) -> &str) -> Vec<String> {
    assets
        .iter()
        .filter(|a| a.asset_type() == asset_type)
        .map(|a| field(a.common()))
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn common(id: &str, name: &str, ticker: &str, region: &str, sector: &str, is_held: bool) -> AssetCommon {
    AssetCommon {
        id: id.to_owned(),
        name: name.to_owned(),
        ticker: ticker.to_owned(),
        region: region.to_owned(),
        sector: sector.to_owned(),
        is_held,
    }
}

fn bond(c: AssetCommon, price_of_par: f64, ytm: f64, coupon: f64, maturity: &str, rating: &str) -> Asset {
    Asset::Bonds(Bond {
        common: c,
        price_of_par,
        yield_to_maturity: ytm,
        coupon_rate: coupon,
        maturity_date: maturity.to_owned(),
        rating: rating.to_owned(),
    })
}

fn stock(c: AssetCommon, price: f64, pe: Option<f64>, market_cap: f64, dividend: Option<f64>) -> Asset {
    Asset::Stocks(Stock { common: c, price, pe_ratio: pe, market_cap, dividend_yield: dividend })
}

fn etf(c: AssetCommon, price: f64, expense_ratio: f64, aum: f64) -> Asset {
    Asset::Etfs(Etf { common: c, price, expense_ratio, aum })
}

fn commodity(c: AssetCommon, price: f64, unit: &str, change_percent: f64) -> Asset {
    Asset::Commodities(Commodity { common: c, price, unit: unit.to_owned(), change_percent })
}

/// Mock catalog backing the explore views.
#[must_use]
pub fn sample_assets() -> Vec<Asset> {
    vec![
        bond(common("ust-10y", "US Treasury 10Y", "UST10", "North America", "Government", true), 97.85, 4.21, 3.875, "2034-08-15", "AA+"),
        bond(common("ust-2y", "US Treasury 2Y", "UST2", "North America", "Government", false), 99.62, 4.62, 4.375, "2026-07-31", "AA+"),
        bond(common("bund-10y", "German Bund 10Y", "DBR10", "Europe", "Government", false), 101.10, 2.28, 2.6, "2034-02-15", "AAA"),
        bond(common("aapl-2030", "Apple 3.25% 2030", "AAPL30", "North America", "Corporate", true), 95.40, 4.35, 3.25, "2030-05-10", "AA+"),
        bond(common("vw-2029", "Volkswagen 4.5% 2029", "VOW29", "Europe", "Corporate", false), 98.75, 4.82, 4.5, "2029-03-22", "BBB+"),
        stock(common("aapl", "Apple Inc.", "AAPL", "North America", "Technology", true), 189.84, Some(29.4), 2.95e12, Some(0.51)),
        stock(common("msft", "Microsoft Corp.", "MSFT", "North America", "Technology", true), 415.50, Some(35.8), 3.09e12, Some(0.72)),
        stock(common("jpm", "JPMorgan Chase & Co.", "JPM", "North America", "Financials", false), 198.47, Some(11.9), 5.70e11, Some(2.33)),
        stock(common("asml", "ASML Holding", "ASML", "Europe", "Technology", false), 912.30, Some(44.1), 3.60e11, Some(0.71)),
        stock(common("tsla", "Tesla Inc.", "TSLA", "North America", "Consumer Discretionary", false), 177.29, None, 5.65e11, None),
        stock(common("toyota", "Toyota Motor Corp.", "TM", "Asia Pacific", "Consumer Discretionary", true), 232.10, Some(9.8), 3.10e11, Some(2.05)),
        etf(common("spy", "SPDR S&P 500 ETF", "SPY", "North America", "Broad Market", true), 512.34, 0.0945, 5.1e11),
        etf(common("qqq", "Invesco QQQ Trust", "QQQ", "North America", "Technology", false), 438.27, 0.20, 2.5e11),
        etf(common("vea", "Vanguard FTSE Developed Markets", "VEA", "Global", "Broad Market", true), 49.88, 0.05, 1.3e11),
        etf(common("agg", "iShares Core US Aggregate Bond", "AGG", "North America", "Fixed Income", false), 97.12, 0.03, 1.1e11),
        commodity(common("gold", "Gold", "XAU", "Global", "Metals", true), 2_345.60, "oz", 0.84),
        commodity(common("silver", "Silver", "XAG", "Global", "Metals", false), 28.14, "oz", -1.12),
        commodity(common("wti", "WTI Crude Oil", "CL", "North America", "Energy", false), 78.45, "bbl", -0.63),
        commodity(common("natgas", "Natural Gas", "NG", "North America", "Energy", false), 2.18, "MMBtu", 3.41),
        commodity(common("wheat", "Wheat", "ZW", "Global", "Agriculture", false), 612.25, "bu", 0.27),
    ]
}
