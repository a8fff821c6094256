//! Horizontal commodity ticker strip; hover pauses the scroll.

use leptos::prelude::*;
use serde::Deserialize;

use crate::util::format::{change_class, format_currency, format_signed_percent};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommodityQuote {
    pub name: String,
    #[serde(alias = "symbol")]
    pub ticker: String,
    pub price: f64,
    pub unit: String,
    pub change_percent: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommodityTickerData {
    #[serde(alias = "items")]
    pub commodities: Vec<CommodityQuote>,
}

#[component]
pub fn CommodityTicker(data: CommodityTickerData) -> impl IntoView {
    let paused = RwSignal::new(false);

    view! {
        <div
            class="widget widget--ticker"
            class:ticker--paused=move || paused.get()
            on:mouseenter=move |_| paused.set(true)
            on:mouseleave=move |_| paused.set(false)
        >
            <ul class="ticker__track">
                {data
                    .commodities
                    .into_iter()
                    .map(|c| {
                        let unit = if c.unit.is_empty() { String::new() } else { format!("/{}", c.unit) };
                        view! {
                            <li class="ticker__item" title=c.name>
                                <span class="ticker">{c.ticker}</span>
                                <span class="ticker__price">{format!("{}{unit}", format_currency(c.price))}</span>
                                <span class=format!("ticker__change {}", change_class(c.change_percent))>
                                    {format_signed_percent(c.change_percent)}
                                </span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
