//! REST API helpers for the chat and news backends.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`. Non-2xx answers become
//! `ApiError::Status`; every record body passes through `_id` normalization
//! before decoding. Nothing retries and nothing is cached.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use schema::endpoints;
use schema::{
    ApiError, ArticleQuery, Chat, ClusterQuery, Message, NewsArticle, NewsCluster, NewsStats, Page, Version,
    VideoStatus,
};
#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;
#[cfg(any(test, feature = "hydrate"))]
use serde_json::Value;

use super::cancel::CancelToken;
#[cfg(any(test, feature = "hydrate"))]
use crate::config::{CHAT_API_BASE, NEWS_API_BASE};

#[cfg(any(test, feature = "hydrate"))]
fn chat_url(path: &str) -> String {
    endpoints::join(CHAT_API_BASE, path)
}

#[cfg(any(test, feature = "hydrate"))]
fn news_url(path: &str, query: &str) -> String {
    endpoints::join_with_query(NEWS_API_BASE, path, query)
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ApiError::Status(status)) }
}

/// Decode a paginated body. Bare arrays are accepted too; a full page then
/// reports one extra row of `total` so callers keep offering "next".
#[cfg(any(test, feature = "hydrate"))]
fn decode_page<T: DeserializeOwned>(value: Value, limit: u32, skip: u32) -> Result<Page<T>, ApiError> {
    if value.is_array() {
        let items: Vec<T> = schema::decode_list(value)?;
        let extra = u64::from(items.len() as u64 >= u64::from(limit) && limit > 0);
        let total = u64::from(skip) + items.len() as u64 + extra;
        return Ok(Page { items, total, limit, skip });
    }
    let raw: Page<Value> = serde_json::from_value(value)?;
    let items = raw.items.into_iter().map(schema::decode_record).collect::<Result<Vec<T>, _>>()?;
    let mut page = Page { items, total: raw.total, limit: raw.limit, skip: raw.skip };
    if page.limit == 0 {
        page.limit = limit;
    }
    if page.skip == 0 {
        page.skip = skip;
    }
    Ok(page)
}

/// `/api/video/latest` answers `null` when no briefing exists yet.
#[cfg(any(test, feature = "hydrate"))]
fn decode_latest_video(value: Value) -> Result<Option<VideoStatus>, ApiError> {
    if value.is_null() {
        return Ok(None);
    }
    schema::decode_record_opt_id(value).map(Some)
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::Transport("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
async fn read_response(
    result: Result<gloo_net::http::Response, gloo_net::Error>,
    cancel: Option<&CancelToken>,
) -> Result<Value, ApiError> {
    if cancel.is_some_and(CancelToken::is_cancelled) {
        return Err(ApiError::Cancelled);
    }
    let resp = result.map_err(|e| ApiError::Transport(e.to_string()))?;
    check_status(resp.status())?;
    resp.json::<Value>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn get_value(url: &str, cancel: Option<&CancelToken>) -> Result<Value, ApiError> {
    let signal = cancel.and_then(CancelToken::signal);
    let result = gloo_net::http::Request::get(url).abort_signal(signal.as_ref()).send().await;
    read_response(result, cancel).await
}

#[cfg(feature = "hydrate")]
async fn post_value<B: serde::Serialize>(url: &str, body: &B) -> Result<Value, ApiError> {
    let request = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_response(request.send().await, None).await
}

/// Fetch every chat via `GET /chats/`.
///
/// # Errors
///
/// Fails on transport errors, non-2xx status, or a record without an id.
pub async fn fetch_chats() -> Result<Vec<Chat>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let value = get_value(&chat_url(endpoints::CHATS), None).await?;
        schema::decode_list(value)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}

/// Create a chat via `POST /chats/`.
///
/// # Errors
///
/// Fails on transport errors, non-2xx status, or a record without an id.
pub async fn create_chat(title: &str) -> Result<Chat, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = schema::NewChat { title: title.to_owned() };
        let value = post_value(&chat_url(endpoints::CHATS), &body).await?;
        schema::decode_record(value)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = title;
        Err(unavailable())
    }
}

/// List a chat's versions via `GET /chats/{chatId}/versions`.
///
/// # Errors
///
/// Fails on transport errors, non-2xx status, a record without an id, or
/// [`ApiError::Cancelled`] once `cancel` fires.
pub async fn fetch_versions(chat_id: &str, cancel: Option<&CancelToken>) -> Result<Vec<Version>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let value = get_value(&chat_url(&endpoints::versions(chat_id)), cancel).await?;
        schema::decode_list(value)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chat_id, cancel);
        Err(unavailable())
    }
}

/// Create a version via `POST /chats/{chatId}/versions`.
///
/// # Errors
///
/// Fails on transport errors, non-2xx status, or a record without an id.
pub async fn create_version(chat_id: &str, prompt: &str, version_number: u32) -> Result<Version, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = schema::NewVersion { prompt: prompt.to_owned(), version_number };
        let value = post_value(&chat_url(&endpoints::versions(chat_id)), &body).await?;
        schema::decode_record(value)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chat_id, prompt, version_number);
        Err(unavailable())
    }
}

/// Fetch the newest version via `GET /chats/{chatId}/versions/latest`.
///
/// # Errors
///
/// Fails on transport errors, non-2xx status, or a record without an id.
pub async fn fetch_latest_version(chat_id: &str) -> Result<Version, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let value = get_value(&chat_url(&endpoints::latest_version(chat_id)), None).await?;
        schema::decode_record(value)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = chat_id;
        Err(unavailable())
    }
}

/// List a chat's messages via `GET /chats/{chatId}/messages`.
///
/// # Errors
///
/// Fails on transport errors, non-2xx status, undecodable bodies, or
/// [`ApiError::Cancelled`] once `cancel` fires.
pub async fn fetch_messages(chat_id: &str, cancel: Option<&CancelToken>) -> Result<Vec<Message>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let value = get_value(&chat_url(&endpoints::messages(chat_id)), cancel).await?;
        schema::decode_list(value)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chat_id, cancel);
        Err(unavailable())
    }
}

/// Fetch one page of clusters via `GET /api/news/clusters`.
///
/// # Errors
///
/// Fails on transport errors, non-2xx status, or undecodable bodies.
pub async fn fetch_news_clusters(query: &ClusterQuery) -> Result<Page<NewsCluster>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = news_url(endpoints::NEWS_CLUSTERS, &query.to_query_string());
        let value = get_value(&url, None).await?;
        decode_page(value, query.limit.unwrap_or(schema::query::DEFAULT_LIMIT), query.skip.unwrap_or(0))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(unavailable())
    }
}

/// Fetch one page of enriched articles via `GET /api/news/summarized`.
///
/// # Errors
///
/// Fails on transport errors, non-2xx status, or undecodable bodies.
pub async fn fetch_news_articles(query: &ArticleQuery) -> Result<Page<NewsArticle>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = news_url(endpoints::NEWS_SUMMARIZED, &query.to_query_string());
        let value = get_value(&url, None).await?;
        decode_page(value, query.limit.unwrap_or(schema::query::DEFAULT_LIMIT), query.skip.unwrap_or(0))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(unavailable())
    }
}

/// Fetch aggregate counts via `GET /api/news/stats`.
///
/// # Errors
///
/// Fails on transport errors, non-2xx status, or undecodable bodies.
pub async fn fetch_news_stats() -> Result<NewsStats, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let value = get_value(&news_url(endpoints::NEWS_STATS, ""), None).await?;
        Ok(serde_json::from_value(value)?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}

/// Fetch the latest daily-briefing video via `GET /api/video/latest`.
///
/// Returns `Ok(None)` when no briefing exists (404 or `null` body).
///
/// # Errors
///
/// Fails on transport errors, other non-2xx statuses, or undecodable bodies.
pub async fn fetch_latest_video() -> Result<Option<VideoStatus>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        match get_value(&news_url(endpoints::VIDEO_LATEST, ""), None).await {
            Err(ApiError::Status(404)) => Ok(None),
            Err(err) => Err(err),
            Ok(value) => decode_latest_video(value),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}

/// Trigger a briefing render via `POST /api/video/generate`.
///
/// # Errors
///
/// Fails on transport errors, non-2xx status, or undecodable bodies.
pub async fn generate_video(force: bool) -> Result<VideoStatus, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = schema::GenerateVideo { force };
        let value = post_value(&news_url(endpoints::VIDEO_GENERATE, ""), &body).await?;
        schema::decode_record_opt_id(value)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = force;
        Err(unavailable())
    }
}
