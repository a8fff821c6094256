//! Single stock quote card with an expandable fundamentals panel.

use leptos::prelude::*;
use serde::Deserialize;

use crate::util::format::{change_class, format_compact, format_currency, format_number, format_percent, format_signed_percent};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StockQuoteData {
    #[serde(alias = "symbol")]
    pub ticker: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub volume: Option<f64>,
    pub market_cap: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub dividend_yield: Option<f64>,
}

fn stat(label: &'static str, value: Option<String>) -> impl IntoView {
    view! {
        <div class="quote__stat">
            <dt>{label}</dt>
            <dd>{value.unwrap_or_else(|| "—".to_owned())}</dd>
        </div>
    }
}

#[component]
pub fn StockQuote(data: StockQuoteData) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let change_cls = format!("quote__change {}", change_class(data.change));
    let change = format!("{} ({})", format_currency(data.change), format_signed_percent(data.change_percent));
    let stats = StoredValue::new(vec![
        ("Open", data.open.map(format_currency)),
        ("High", data.high.map(format_currency)),
        ("Low", data.low.map(format_currency)),
        ("Volume", data.volume.map(format_compact)),
        ("Market cap", data.market_cap.map(format_compact)),
        ("P/E", data.pe_ratio.map(|v| format_number(v, 1))),
        ("Dividend", data.dividend_yield.map(format_percent)),
    ]);

    view! {
        <div class="widget widget--quote">
            <header class="quote__header">
                <span class="ticker">{data.ticker}</span>
                <span class="quote__name">{data.name}</span>
            </header>
            <div class="quote__price">{format_currency(data.price)}</div>
            <div class=change_cls>{change}</div>
            <button class="quote__more" on:click=move |_| expanded.update(|v| *v = !*v)>
                {move || if expanded.get() { "Less" } else { "Fundamentals" }}
            </button>
            {move || {
                expanded
                    .get()
                    .then(|| {
                        view! {
                            <dl class="quote__stats">
                                {stats
                                    .get_value()
                                    .into_iter()
                                    .map(|(label, value)| stat(label, value))
                                    .collect::<Vec<_>>()}
                            </dl>
                        }
                    })
            }}
        </div>
    }
}
