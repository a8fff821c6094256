//! Build-time configuration.
//!
//! Base URLs are baked in at compile time so the WASM bundle needs no runtime
//! config fetch. Override with `LEDGERLINE_CHAT_API` / `LEDGERLINE_NEWS_API`
//! when building.

pub const CHAT_API_BASE: &str = match option_env!("LEDGERLINE_CHAT_API") {
    Some(url) => url,
    None => "http://localhost:8000",
};

pub const NEWS_API_BASE: &str = match option_env!("LEDGERLINE_NEWS_API") {
    Some(url) => url,
    None => "http://localhost:8001",
};

/// How long an error banner stays up before clearing itself.
pub const BANNER_AUTO_CLEAR_MS: u32 = 6_000;

/// Articles per page in the news view.
pub const NEWS_PAGE_SIZE: u32 = 20;

/// Clusters shown alongside the article list.
pub const NEWS_CLUSTER_LIMIT: u32 = 8;

/// Poll interval while a daily-briefing render is in progress.
pub const BRIEFING_POLL_SECS: u64 = 5;
