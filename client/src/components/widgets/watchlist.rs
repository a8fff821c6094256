//! Watchlist with local star/unstar and a starred-only toggle.

use std::collections::HashSet;

use leptos::prelude::*;
use serde::Deserialize;

use crate::util::format::{change_class, format_currency, format_signed_percent};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WatchItem {
    #[serde(alias = "symbol")]
    pub ticker: String,
    pub name: String,
    pub price: f64,
    pub change_percent: f64,
    pub starred: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WatchlistData {
    pub title: Option<String>,
    pub items: Vec<WatchItem>,
}

#[component]
pub fn Watchlist(data: WatchlistData) -> impl IntoView {
    let title = data.title.unwrap_or_else(|| "Watchlist".to_owned());
    let starred = RwSignal::new(data.items.iter().filter(|i| i.starred).map(|i| i.ticker.clone()).collect::<HashSet<_>>());
    let starred_only = RwSignal::new(false);
    let items = data.items;

    let rows = move || {
        let only = starred_only.get();
        let stars = starred.get();
        items
            .iter()
            .filter(|i| !only || stars.contains(&i.ticker))
            .map(|i| {
                let ticker = i.ticker.clone();
                let is_starred = stars.contains(&ticker);
                view! {
                    <li class="watch__row">
                        <button
                            class="watch__star"
                            class:watch__star--on=is_starred
                            on:click=move |_| {
                                let ticker = ticker.clone();
                                starred.update(|s| {
                                    if !s.remove(&ticker) {
                                        s.insert(ticker);
                                    }
                                });
                            }
                        >
                            {if is_starred { "★" } else { "☆" }}
                        </button>
                        <span class="ticker">{i.ticker.clone()}</span>
                        <span class="watch__name">{i.name.clone()}</span>
                        <span class="num">{format_currency(i.price)}</span>
                        <span class=format!("num {}", change_class(i.change_percent))>
                            {format_signed_percent(i.change_percent)}
                        </span>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="widget widget--watchlist">
            <header class="widget__header">
                <h3>{title}</h3>
                <label class="toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || starred_only.get()
                        on:change=move |ev| starred_only.set(event_target_checked(&ev))
                    />
                    "Starred only"
                </label>
            </header>
            <ul class="watch">{rows}</ul>
        </div>
    }
}
