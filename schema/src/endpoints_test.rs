use super::*;

#[test]
fn chat_scoped_paths() {
    assert_eq!(versions("c1"), "/chats/c1/versions");
    assert_eq!(latest_version("c1"), "/chats/c1/versions/latest");
    assert_eq!(messages("c1"), "/chats/c1/messages");
}

#[test]
fn join_collapses_duplicate_slashes() {
    assert_eq!(join("http://localhost:8000/", CHATS), "http://localhost:8000/chats/");
    assert_eq!(join("http://localhost:8000", "chats/"), "http://localhost:8000/chats/");
}

#[test]
fn join_with_query_skips_empty_query() {
    assert_eq!(join_with_query("http://h", NEWS_STATS, ""), "http://h/api/news/stats");
    assert_eq!(
        join_with_query("http://h", NEWS_CLUSTERS, "limit=20&skip=0"),
        "http://h/api/news/clusters?limit=20&skip=0"
    );
}
