//! Shared wire model for the dashboard backend API.
//!
//! This crate owns the JSON representation used by both the browser `client`
//! and the `cli`. It knows nothing about transport: callers perform the HTTP
//! request, then hand the decoded body to [`normalize`] / [`decode_record`] and
//! friends to get typed values with a single canonical `id`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`chat`] | Chats, versions, canvas component entries, messages |
//! | [`news`] | News clusters, enriched articles, stats, daily-briefing video |
//! | [`asset`] | Tradable assets shown in explore/detail views |
//! | [`query`] | Query-string builders for the paginated news endpoints |
//! | [`endpoints`] | Path builders and base-URL joining |
//! | [`normalize`] | Id aliasing (`_id` → `id`) and record decoding |

pub mod asset;
pub mod chat;
pub mod endpoints;
pub mod news;
pub mod normalize;
pub mod query;

pub use asset::{Asset, AssetCommon, AssetType, Bond, Commodity, Etf, Stock};
pub use chat::{Chat, ComponentEntry, Message, NewChat, NewVersion, Version};
pub use news::{GenerateVideo, NewsArticle, NewsCluster, NewsStats, Page, VideoState, VideoStatus};
pub use normalize::{NormalizeError, decode_list, decode_record, decode_record_opt_id, normalize};
pub use query::{ArticleQuery, ClusterQuery};

/// Error returned by every API call, regardless of transport.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The request never produced a response (DNS, connection reset, CORS).
    #[error("network error: {0}")]
    Transport(String),
    /// The response body was not the JSON shape we expected.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// A chat or version record carried neither `id` nor `_id`.
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
    /// The request was aborted because its owning selection was superseded.
    #[error("request cancelled")]
    Cancelled,
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;
