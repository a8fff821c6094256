//! News feed: filters, paginated articles, story clusters, and a stats header.

use leptos::prelude::*;
use schema::{NewsArticle, NewsCluster};

use crate::components::error_banner::ErrorBanner;
use crate::net::feeds::{load_news, load_news_stats};
use crate::state::news::{NewsFilters, NewsState};

const SENTIMENTS: [&str; 3] = ["positive", "neutral", "negative"];

fn sentiment_class(sentiment: Option<&str>) -> String {
    format!("sentiment sentiment--{}", sentiment.unwrap_or("unknown"))
}

fn article_row(article: NewsArticle) -> impl IntoView {
    let meta = [article.source.clone(), article.published_at.clone(), article.factor_type.clone()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");
    let title = match article.url {
        Some(url) => view! { <a href=url target="_blank" rel="noopener">{article.title}</a> }.into_any(),
        None => view! { <span>{article.title}</span> }.into_any(),
    };
    let sentiment_css = sentiment_class(article.sentiment.as_deref());
    let sentiment = article.sentiment.unwrap_or_default();
    view! {
        <li class="news__article">
            <div class="news__headline">
                {title}
                <span class=sentiment_css>{sentiment}</span>
            </div>
            <div class="news__meta">{meta}</div>
            {(!article.summary.is_empty()).then(|| view! { <p class="news__summary">{article.summary}</p> })}
        </li>
    }
}

fn cluster_row(cluster: NewsCluster) -> impl IntoView {
    let sentiment_css = sentiment_class(cluster.sentiment.as_deref());
    let sentiment = cluster.sentiment.unwrap_or_default();
    view! {
        <li class="news__cluster">
            <div class="news__headline">
                {cluster.headline}
                <span class=sentiment_css>{sentiment}</span>
            </div>
            <div class="news__meta">
                {format!("{} articles", cluster.article_count)}
                {cluster.company.map(|c| format!(" · {c}"))}
            </div>
            <p class="news__summary">{cluster.summary}</p>
        </li>
    }
}

#[component]
fn StatsHeader() -> impl IntoView {
    let news = expect_context::<RwSignal<NewsState>>();
    move || {
        news.with(|s| s.stats.clone()).map(|stats| {
            let sentiments = stats
                .by_sentiment
                .iter()
                .map(|(label, count)| format!("{label}: {count}"))
                .collect::<Vec<_>>()
                .join(" · ");
            view! {
                <div class="news__stats">
                    <span>{format!("{} articles", stats.total_articles)}</span>
                    <span>{format!("{} stories", stats.total_clusters)}</span>
                    <span>{sentiments}</span>
                </div>
            }
        })
    }
}

#[component]
pub fn NewsView() -> impl IntoView {
    let news = expect_context::<RwSignal<NewsState>>();
    let draft = RwSignal::new(news.with_untracked(|s| s.filters.clone()));

    load_news(news);
    load_news_stats(news);

    let apply = move || {
        news.update(|s| s.set_filters(draft.get_untracked()));
        load_news(news);
    };
    let reset = move |_| {
        draft.set(NewsFilters::default());
        apply();
    };
    let prev = move |_| {
        if news.try_update(NewsState::prev_page).unwrap_or(false) {
            load_news(news);
        }
    };
    let next = move |_| {
        if news.try_update(NewsState::next_page).unwrap_or(false) {
            load_news(news);
        }
    };

    view! {
        <div class="view view--news">
            <h2 class="view__title">"News"</h2>
            <StatsHeader/>
            <ErrorBanner
                message=Signal::derive(move || news.with(|s| s.error.clone()))
                on_dismiss=Callback::new(move |()| news.update(|s| s.error = None))
            />
            <form
                class="news__filters"
                on:submit=move |ev| {
                    ev.prevent_default();
                    apply();
                }
            >
                <input
                    type="text"
                    placeholder="Company"
                    prop:value=move || draft.with(|f| f.company.clone())
                    on:input=move |ev| draft.update(|f| f.company = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Factor type"
                    prop:value=move || draft.with(|f| f.factor_type.clone())
                    on:input=move |ev| draft.update(|f| f.factor_type = event_target_value(&ev))
                />
                <select
                    prop:value=move || draft.with(|f| f.sentiment.clone())
                    on:change=move |ev| draft.update(|f| f.sentiment = event_target_value(&ev))
                >
                    <option value="">"Any sentiment"</option>
                    {SENTIMENTS.into_iter().map(|s| view! { <option value=s>{s}</option> }).collect::<Vec<_>>()}
                </select>
                <button type="submit" class="btn btn--primary">"Apply"</button>
                <button type="button" class="btn" on:click=reset>"Reset"</button>
            </form>
            <div class="news__columns">
                <section class="news__articles">
                    {move || {
                        let (loading, articles) = news.with(|s| (s.is_loading, s.articles.clone()));
                        if loading && articles.is_empty() {
                            return view! { <div class="news__empty">"Loading…"</div> }.into_any();
                        }
                        if articles.is_empty() {
                            return view! { <div class="news__empty">"No articles"</div> }.into_any();
                        }
                        view! { <ul>{articles.into_iter().map(article_row).collect::<Vec<_>>()}</ul> }.into_any()
                    }}
                    <nav class="news__pager">
                        <button class="btn" disabled=move || news.with(|s| s.page == 0 || s.is_loading) on:click=prev>
                            "Previous"
                        </button>
                        <span>
                            {move || news.with(|s| format!("Page {} of {}", u64::from(s.page) + 1, s.page_count()))}
                        </span>
                        <button class="btn" disabled=move || news.with(|s| !s.has_more || s.is_loading) on:click=next>
                            "Next"
                        </button>
                    </nav>
                </section>
                <aside class="news__clusters">
                    <h3>"Top stories"</h3>
                    {move || {
                        let clusters = news.with(|s| s.clusters.clone());
                        if clusters.is_empty() {
                            return view! { <div class="news__empty">"No stories"</div> }.into_any();
                        }
                        view! { <ul>{clusters.into_iter().map(cluster_row).collect::<Vec<_>>()}</ul> }.into_any()
                    }}
                </aside>
            </div>
        </div>
    }
}
