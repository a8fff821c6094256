//! Tradable assets shown in the explore and asset-detail views.
//!
//! Assets are discriminated by `assetType` on the wire and share a common
//! header ([`AssetCommon`]); everything else is type-specific.

#[cfg(test)]
#[path = "asset_test.rs"]
mod asset_test;

use serde::{Deserialize, Serialize};

/// Asset discriminant, matching the `assetType` wire tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Bonds,
    Stocks,
    Etfs,
    Commodities,
}

impl AssetType {
    pub const ALL: [Self; 4] = [Self::Bonds, Self::Stocks, Self::Etfs, Self::Commodities];

    /// Wire tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bonds => "bonds",
            Self::Stocks => "stocks",
            Self::Etfs => "etfs",
            Self::Commodities => "commodities",
        }
    }

    /// Human label for headings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Bonds => "Bonds",
            Self::Stocks => "Stocks",
            Self::Etfs => "ETFs",
            Self::Commodities => "Commodities",
        }
    }
}

/// Fields every asset carries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetCommon {
    pub id: String,
    pub name: String,
    pub ticker: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub is_held: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bond {
    #[serde(flatten)]
    pub common: AssetCommon,
    /// Clean price as a percentage of par.
    pub price_of_par: f64,
    /// Yield to maturity, in percent.
    pub yield_to_maturity: f64,
    #[serde(default)]
    pub coupon_rate: f64,
    #[serde(default)]
    pub maturity_date: String,
    #[serde(default)]
    pub rating: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    #[serde(flatten)]
    pub common: AssetCommon,
    pub price: f64,
    pub pe_ratio: Option<f64>,
    #[serde(default)]
    pub market_cap: f64,
    pub dividend_yield: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Etf {
    #[serde(flatten)]
    pub common: AssetCommon,
    pub price: f64,
    /// Annual expense ratio, in percent.
    #[serde(default)]
    pub expense_ratio: f64,
    /// Assets under management.
    #[serde(default)]
    pub aum: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commodity {
    #[serde(flatten)]
    pub common: AssetCommon,
    pub price: f64,
    /// Quote unit, e.g. `"bbl"` or `"oz"`.
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub change_percent: f64,
}

/// A tradable instrument.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "assetType", rename_all = "lowercase")]
pub enum Asset {
    Bonds(Bond),
    Stocks(Stock),
    Etfs(Etf),
    Commodities(Commodity),
}

impl Asset {
    #[must_use]
    pub fn asset_type(&self) -> AssetType {
        match self {
            Self::Bonds(_) => AssetType::Bonds,
            Self::Stocks(_) => AssetType::Stocks,
            Self::Etfs(_) => AssetType::Etfs,
            Self::Commodities(_) => AssetType::Commodities,
        }
    }

    #[must_use]
    pub fn common(&self) -> &AssetCommon {
        match self {
            Self::Bonds(b) => &b.common,
            Self::Stocks(s) => &s.common,
            Self::Etfs(e) => &e.common,
            Self::Commodities(c) => &c.common,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.common().id
    }

    /// Headline price used for sorting across types. Bonds report percent of par.
    #[must_use]
    pub fn price(&self) -> f64 {
        match self {
            Self::Bonds(b) => b.price_of_par,
            Self::Stocks(s) => s.price,
            Self::Etfs(e) => e.price,
            Self::Commodities(c) => c.price,
        }
    }
}
