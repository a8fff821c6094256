//! News and daily-briefing video payloads.
//!
//! The news service is a separate backend from the chat service and speaks
//! snake_case JSON, matching its query parameters.

#[cfg(test)]
#[path = "news_test.rs"]
mod news_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::normalize::{deserialize_id, deserialize_opt_id};

/// One page of a paginated listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(alias = "clusters", alias = "articles")]
    pub items: Vec<T>,
    /// Total matching rows across all pages; zero when the server omits it.
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
}

impl<T> Page<T> {
    /// Whether another page exists after this one.
    #[must_use]
    pub fn has_more(&self) -> bool {
        u64::from(self.skip) + (self.items.len() as u64) < self.total
    }
}

/// A group of related articles about one company/factor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsCluster {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub summary: String,
    pub company: Option<String>,
    pub factor_type: Option<String>,
    #[serde(default)]
    pub article_count: u32,
    pub sentiment: Option<String>,
    pub published_at: Option<String>,
}

/// An article enriched with sentiment and liquidity classification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub url: Option<String>,
    pub source: Option<String>,
    pub company: Option<String>,
    pub factor_type: Option<String>,
    pub sentiment: Option<String>,
    pub liquidity_impact: Option<String>,
    #[serde(default)]
    pub summary: String,
    pub published_at: Option<String>,
    #[serde(default)]
    pub is_relevant: bool,
}

/// Aggregate counts for the news header.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsStats {
    #[serde(default)]
    pub total_articles: u64,
    #[serde(default)]
    pub total_clusters: u64,
    #[serde(default)]
    pub by_sentiment: BTreeMap<String, u64>,
    #[serde(default)]
    pub by_factor_type: BTreeMap<String, u64>,
}

/// Lifecycle of a daily-briefing video render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoState {
    #[default]
    Pending,
    Processing,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

impl VideoState {
    /// Whether the render has reached a final state.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// Latest daily-briefing video as reported by `/api/video/latest`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VideoStatus {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub status: VideoState,
    pub video_url: Option<String>,
    pub created_at: Option<String>,
    pub error: Option<String>,
}

/// Body for `POST /api/video/generate`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateVideo {
    /// Regenerate even when today's briefing already exists.
    pub force: bool,
}
