//! Holdings table with click-to-sort columns.

#[cfg(test)]
#[path = "holdings_table_test.rs"]
mod holdings_table_test;

use leptos::prelude::*;
use serde::Deserialize;

use crate::util::format::{change_class, format_currency, format_number, format_percent, format_signed_percent};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Holding {
    pub ticker: String,
    pub name: String,
    pub quantity: f64,
    pub price: f64,
    pub market_value: f64,
    /// Share of the portfolio, in percent.
    pub weight: f64,
    pub day_change_percent: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HoldingsTableData {
    pub title: Option<String>,
    pub holdings: Vec<Holding>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoldingColumn {
    Ticker,
    MarketValue,
    Weight,
    DayChange,
}

/// Sort rows by `column`; numeric columns sort largest first.
pub fn sort_holdings(rows: &mut [Holding], column: HoldingColumn, ascending: bool) {
    rows.sort_by(|a, b| {
        let ord = match column {
            HoldingColumn::Ticker => a.ticker.cmp(&b.ticker),
            HoldingColumn::MarketValue => b.market_value.total_cmp(&a.market_value),
            HoldingColumn::Weight => b.weight.total_cmp(&a.weight),
            HoldingColumn::DayChange => b.day_change_percent.total_cmp(&a.day_change_percent),
        };
        if ascending { ord } else { ord.reverse() }
    });
}

#[component]
pub fn HoldingsTable(data: HoldingsTableData) -> impl IntoView {
    let title = data.title.unwrap_or_else(|| "Holdings".to_owned());
    let holdings = data.holdings;
    let sort = RwSignal::new((HoldingColumn::MarketValue, true));

    let on_sort = move |column: HoldingColumn| {
        sort.update(|(current, ascending)| {
            if *current == column {
                *ascending = !*ascending;
            } else {
                *current = column;
                *ascending = true;
            }
        });
    };

    let header = move |column: HoldingColumn, label: &'static str| {
        view! {
            <th
                class="table__sortable"
                class:table__sorted=move || sort.get().0 == column
                on:click=move |_| on_sort(column)
            >
                {label}
            </th>
        }
    };

    let rows = move || {
        let (column, ascending) = sort.get();
        let mut rows = holdings.clone();
        sort_holdings(&mut rows, column, ascending);
        rows.into_iter()
            .map(|h| {
                let change = format!("num {}", change_class(h.day_change_percent));
                view! {
                    <tr>
                        <td class="ticker">{h.ticker}</td>
                        <td>{h.name}</td>
                        <td class="num">{format_number(h.quantity, 0)}</td>
                        <td class="num">{format_currency(h.price)}</td>
                        <td class="num">{format_currency(h.market_value)}</td>
                        <td class="num">{format_percent(h.weight)}</td>
                        <td class=change>{format_signed_percent(h.day_change_percent)}</td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="widget widget--table">
            <h3 class="widget__title">{title}</h3>
            <table class="table">
                <thead>
                    <tr>
                        {header(HoldingColumn::Ticker, "Ticker")}
                        <th>"Name"</th>
                        <th class="num">"Qty"</th>
                        <th class="num">"Price"</th>
                        {header(HoldingColumn::MarketValue, "Value")}
                        {header(HoldingColumn::Weight, "Weight")}
                        {header(HoldingColumn::DayChange, "Day")}
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
