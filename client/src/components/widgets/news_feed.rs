//! Headline list with a sentiment filter.

use leptos::prelude::*;
use serde::Deserialize;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsFeedItem {
    #[serde(alias = "title")]
    pub headline: String,
    pub source: Option<String>,
    pub url: Option<String>,
    pub published_at: Option<String>,
    /// `positive`, `negative`, or `neutral`.
    pub sentiment: Option<String>,
    pub summary: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsFeedData {
    pub title: Option<String>,
    #[serde(alias = "articles", alias = "news")]
    pub items: Vec<NewsFeedItem>,
}

const FILTERS: [&str; 4] = ["all", "positive", "neutral", "negative"];

#[component]
pub fn NewsFeed(data: NewsFeedData) -> impl IntoView {
    let title = data.title.unwrap_or_else(|| "News".to_owned());
    let items = data.items;
    let filter = RwSignal::new("all");

    let visible = move || {
        let wanted = filter.get();
        items
            .iter()
            .filter(|item| wanted == "all" || item.sentiment.as_deref() == Some(wanted))
            .cloned()
            .map(|item| {
                let sentiment = item.sentiment.clone().unwrap_or_else(|| "neutral".to_owned());
                let meta = [item.source.clone(), item.published_at.clone()].into_iter().flatten().collect::<Vec<_>>().join(" · ");
                view! {
                    <li class="news-item">
                        <span class=format!("sentiment-dot sentiment-dot--{sentiment}")></span>
                        <div class="news-item__body">
                            {match item.url {
                                Some(url) => view! { <a href=url target="_blank" rel="noopener">{item.headline}</a> }.into_any(),
                                None => view! { <span>{item.headline}</span> }.into_any(),
                            }}
                            {item.summary.map(|s| view! { <p class="news-item__summary">{s}</p> })}
                            <span class="news-item__meta">{meta}</span>
                        </div>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="widget widget--news">
            <header class="widget__header">
                <h3>{title}</h3>
                <div class="segmented">
                    {FILTERS
                        .into_iter()
                        .map(|f| {
                            view! {
                                <button
                                    class="segmented__item"
                                    class:segmented__item--active=move || filter.get() == f
                                    on:click=move |_| filter.set(f)
                                >
                                    {f}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </header>
            <ul class="news-list">{visible}</ul>
        </div>
    }
}
