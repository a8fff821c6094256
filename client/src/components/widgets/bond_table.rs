//! Bond table with an investment-grade toggle.

#[cfg(test)]
#[path = "bond_table_test.rs"]
mod bond_table_test;

use leptos::prelude::*;
use serde::Deserialize;

use crate::util::format::{format_number, format_percent};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BondRow {
    pub name: String,
    pub ticker: String,
    pub price_of_par: f64,
    pub yield_to_maturity: f64,
    pub coupon_rate: f64,
    pub maturity_date: String,
    pub rating: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BondTableData {
    pub title: Option<String>,
    pub bonds: Vec<BondRow>,
}

/// S&P-style ratings of BBB- and above.
pub fn is_investment_grade(rating: &str) -> bool {
    let grade = rating.trim().trim_end_matches(['+', '-']).to_ascii_uppercase();
    matches!(grade.as_str(), "AAA" | "AA" | "A" | "BBB")
}

#[component]
pub fn BondTable(data: BondTableData) -> impl IntoView {
    let title = data.title.unwrap_or_else(|| "Bonds".to_owned());
    let bonds = data.bonds;
    let ig_only = RwSignal::new(false);

    let rows = move || {
        let only = ig_only.get();
        bonds
            .iter()
            .filter(|b| !only || is_investment_grade(&b.rating))
            .map(|b| {
                view! {
                    <tr>
                        <td>{b.name.clone()}</td>
                        <td class="ticker">{b.ticker.clone()}</td>
                        <td class="num">{format_number(b.price_of_par, 2)}</td>
                        <td class="num">{format_percent(b.yield_to_maturity)}</td>
                        <td class="num">{format_percent(b.coupon_rate)}</td>
                        <td>{b.maturity_date.clone()}</td>
                        <td>{b.rating.clone()}</td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="widget widget--table">
            <header class="widget__header">
                <h3>{title}</h3>
                <label class="toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || ig_only.get()
                        on:change=move |ev| ig_only.set(event_target_checked(&ev))
                    />
                    "Investment grade only"
                </label>
            </header>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Ticker"</th>
                        <th class="num">"Price"</th>
                        <th class="num">"YTM"</th>
                        <th class="num">"Coupon"</th>
                        <th>"Maturity"</th>
                        <th>"Rating"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
