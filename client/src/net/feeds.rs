//! Loaders for the news and daily-briefing views.
//!
//! Unlike chat selection these fetches are not cancelled; the news state's
//! generation counter drops pages that were superseded by a newer load.

use leptos::prelude::*;

use super::{api, spawn};
use crate::state::briefing::BriefingState;
use crate::state::news::NewsState;

/// Load the page and clusters the current filters describe.
pub fn load_news(news: RwSignal<NewsState>) {
    let Some((generation, articles_query, clusters_query)) =
        news.try_update(|s| (s.begin_load(), s.article_query(), s.cluster_query()))
    else {
        return;
    };
    spawn(async move {
        let result = api::fetch_news_articles(&articles_query).await;
        if let Err(err) = &result {
            leptos::logging::warn!("news page fetch failed: {err}");
        }
        news.update(|s| s.apply_articles(generation, result));
    });
    spawn(async move {
        let result = api::fetch_news_clusters(&clusters_query).await;
        news.update(|s| s.apply_clusters(generation, result));
    });
}

/// Load the stats header. Independent of filters.
pub fn load_news_stats(news: RwSignal<NewsState>) {
    spawn(async move {
        let result = api::fetch_news_stats().await;
        news.update(|s| s.apply_stats(result));
    });
}

pub fn load_briefing(briefing: RwSignal<BriefingState>) {
    briefing.update(BriefingState::begin_load);
    spawn(async move {
        let result = api::fetch_latest_video().await;
        if let Err(err) = &result {
            leptos::logging::warn!("briefing fetch failed: {err}");
        }
        briefing.update(|s| s.apply_latest(result));
    });
}

/// Request a new render. Ignored while a request is already outstanding.
pub fn generate_briefing(briefing: RwSignal<BriefingState>, force: bool) {
    if !briefing.try_update(BriefingState::begin_generate).unwrap_or(false) {
        return;
    }
    spawn(async move {
        let result = api::generate_video(force).await;
        briefing.update(|s| s.finish_generate(result));
    });
}

/// Re-read the latest status every few seconds while a render is in flight.
pub fn poll_briefing(briefing: RwSignal<BriefingState>) {
    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(crate::config::BRIEFING_POLL_SECS)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if briefing.with_untracked(BriefingState::should_poll) {
                    let result = api::fetch_latest_video().await;
                    briefing.update(|s| s.apply_latest(result));
                }
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = briefing;
    }
}
