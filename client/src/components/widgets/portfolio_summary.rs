//! Portfolio headline: total value, day change, and cash.

use leptos::prelude::*;
use serde::Deserialize;

use crate::util::format::{change_class, format_currency, format_signed_percent};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioSummaryData {
    pub total_value: f64,
    pub day_change: f64,
    pub day_change_percent: f64,
    pub total_return_percent: f64,
    pub cash: f64,
    pub as_of: Option<String>,
}

#[component]
pub fn PortfolioSummary(data: PortfolioSummaryData) -> impl IntoView {
    let show_cash = RwSignal::new(false);
    let day_class = format!("summary__change {}", change_class(data.day_change));
    let total_class = format!("summary__change {}", change_class(data.total_return_percent));
    let cash = format_currency(data.cash);

    view! {
        <div class="widget widget--summary">
            <div class="summary__value">
                <span class="summary__label">"Portfolio value"</span>
                <span class="summary__amount">{format_currency(data.total_value)}</span>
            </div>
            <div class="summary__row">
                <span class=day_class>
                    {format!("{} ({}) today", format_currency(data.day_change), format_signed_percent(data.day_change_percent))}
                </span>
                <span class=total_class>{format!("{} all time", format_signed_percent(data.total_return_percent))}</span>
            </div>
            <button class="summary__toggle" on:click=move |_| show_cash.update(|v| *v = !*v)>
                {move || if show_cash.get() { "Hide cash" } else { "Show cash" }}
            </button>
            {move || show_cash.get().then(|| view! { <div class="summary__cash">{format!("Cash: {cash}")}</div> })}
            {data.as_of.map(|ts| view! { <footer class="widget__footer">{format!("As of {ts}")}</footer> })}
        </div>
    }
}
