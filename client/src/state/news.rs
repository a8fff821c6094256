//! News view state: filters, pagination, and the latest fetched page.
//!
//! Every load bumps a generation counter. Results carry the generation they
//! were requested under and are dropped when a newer load has started, so a
//! slow page can never replace the one the filters now describe.

#[cfg(test)]
#[path = "news_test.rs"]
mod news_test;

use schema::{ApiError, ArticleQuery, ClusterQuery, NewsArticle, NewsCluster, NewsStats, Page};

use crate::config::{NEWS_CLUSTER_LIMIT, NEWS_PAGE_SIZE};

pub const NEWS_LOAD_FAILED: &str = "Failed to load news";

/// Filter inputs; empty strings mean "any".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsFilters {
    pub company: String,
    pub factor_type: String,
    pub sentiment: String,
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

#[derive(Clone, Debug, Default)]
pub struct NewsState {
    pub filters: NewsFilters,
    /// Zero-based page index.
    pub page: u32,
    pub articles: Vec<NewsArticle>,
    pub total: u64,
    pub has_more: bool,
    pub clusters: Vec<NewsCluster>,
    pub stats: Option<NewsStats>,
    pub is_loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl NewsState {
    #[must_use]
    pub fn article_query(&self) -> ArticleQuery {
        ArticleQuery {
            company: non_empty(&self.filters.company),
            factor_type: non_empty(&self.filters.factor_type),
            sentiment: non_empty(&self.filters.sentiment),
            limit: Some(NEWS_PAGE_SIZE),
            skip: Some(self.page.saturating_mul(NEWS_PAGE_SIZE)),
            ..ArticleQuery::default()
        }
    }

    #[must_use]
    pub fn cluster_query(&self) -> ClusterQuery {
        ClusterQuery {
            company: non_empty(&self.filters.company),
            factor_type: non_empty(&self.filters.factor_type),
            limit: Some(NEWS_CLUSTER_LIMIT),
            skip: Some(0),
            ..ClusterQuery::default()
        }
    }

    /// Replace the filters and return to the first page.
    pub fn set_filters(&mut self, filters: NewsFilters) {
        self.filters = filters;
        self.page = 0;
    }

    /// Mark a load as started and return its generation.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.is_loading = true;
        self.error = None;
        self.generation
    }

    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    pub fn apply_articles(&mut self, generation: u64, result: Result<Page<NewsArticle>, ApiError>) {
        if !self.is_current(generation) {
            return;
        }
        self.is_loading = false;
        match result {
            Ok(page) => {
                self.has_more = page.has_more();
                self.total = page.total;
                self.articles = page.items;
            }
            Err(_) => {
                self.articles.clear();
                self.has_more = false;
                self.error = Some(NEWS_LOAD_FAILED.to_owned());
            }
        }
    }

    /// Clusters are supplementary; a failure just empties the list.
    pub fn apply_clusters(&mut self, generation: u64, result: Result<Page<NewsCluster>, ApiError>) {
        if self.is_current(generation) {
            self.clusters = result.map(|page| page.items).unwrap_or_default();
        }
    }

    pub fn apply_stats(&mut self, result: Result<NewsStats, ApiError>) {
        self.stats = result.ok();
    }

    /// Advance one page. Returns `false` at the end.
    pub fn next_page(&mut self) -> bool {
        if !self.has_more {
            return false;
        }
        self.page += 1;
        true
    }

    /// Go back one page. Returns `false` on the first page.
    pub fn prev_page(&mut self) -> bool {
        if self.page == 0 {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Pages needed for `total`, at least one.
    #[must_use]
    pub fn page_count(&self) -> u64 {
        self.total.div_ceil(u64::from(NEWS_PAGE_SIZE)).max(1)
    }
}
