//! Endpoint paths for the chat and news services.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

pub const CHATS: &str = "/chats/";
pub const NEWS_CLUSTERS: &str = "/api/news/clusters";
pub const NEWS_SUMMARIZED: &str = "/api/news/summarized";
pub const NEWS_STATS: &str = "/api/news/stats";
pub const VIDEO_LATEST: &str = "/api/video/latest";
pub const VIDEO_GENERATE: &str = "/api/video/generate";

#[must_use]
pub fn versions(chat_id: &str) -> String {
    format!("/chats/{chat_id}/versions")
}

#[must_use]
pub fn latest_version(chat_id: &str) -> String {
    format!("/chats/{chat_id}/versions/latest")
}

#[must_use]
pub fn messages(chat_id: &str) -> String {
    format!("/chats/{chat_id}/messages")
}

/// Join a base URL and an absolute path, collapsing the slash between them.
#[must_use]
pub fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Join a base URL, a path, and an encoded query string.
#[must_use]
pub fn join_with_query(base: &str, path: &str, query: &str) -> String {
    let url = join(base, path);
    if query.is_empty() { url } else { format!("{url}?{query}") }
}
