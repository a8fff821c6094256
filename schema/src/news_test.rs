use super::*;
use serde_json::json;

#[test]
fn page_accepts_clusters_alias_and_missing_total() {
    let page: Page<NewsCluster> = serde_json::from_value(json!({
        "clusters": [{ "id": "k1", "headline": "Rates up", "article_count": 4 }]
    }))
    .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, "k1");
    assert_eq!(page.items[0].article_count, 4);
    assert_eq!(page.total, 0);
    assert!(!page.has_more());
}

#[test]
fn page_has_more_when_total_exceeds_window() {
    let page = Page { items: vec![1, 2], total: 5, limit: 2, skip: 2 };
    assert!(page.has_more());
    let last = Page { items: vec![5], total: 5, limit: 2, skip: 4 };
    assert!(!last.has_more());
}

#[test]
fn article_defaults_relevance_to_false() {
    let a: NewsArticle = serde_json::from_value(json!({ "id": "a1", "title": "t" })).unwrap();
    assert!(!a.is_relevant);
    assert!(a.sentiment.is_none());
}

#[test]
fn stats_decode_breakdowns() {
    let stats: NewsStats = serde_json::from_value(json!({
        "total_articles": 120,
        "by_sentiment": { "positive": 70, "negative": 50 }
    }))
    .unwrap();
    assert_eq!(stats.total_articles, 120);
    assert_eq!(stats.by_sentiment.get("negative"), Some(&50));
    assert!(stats.by_factor_type.is_empty());
}

#[test]
fn video_state_tolerates_unknown_values() {
    let v: VideoStatus = serde_json::from_value(json!({ "status": "queued" })).unwrap();
    assert_eq!(v.status, VideoState::Unknown);
    assert!(v.id.is_none());
}

#[test]
fn article_with_both_ids_keeps_explicit_id() {
    let a: NewsArticle = crate::decode_record(json!({ "id": "a1", "_id": "native", "title": "t" })).unwrap();
    assert_eq!(a.id, "a1");
}

#[test]
fn cluster_with_only_native_id_decodes_after_normalizing() {
    let c: NewsCluster = crate::decode_record(json!({ "_id": { "$oid": "65f0" }, "headline": "h" })).unwrap();
    assert_eq!(c.id, "65f0");
}

#[test]
fn video_with_both_ids_keeps_explicit_id() {
    let v: VideoStatus =
        crate::decode_record_opt_id(json!({ "id": "v1", "_id": "native", "status": "processing" })).unwrap();
    assert_eq!(v.id.as_deref(), Some("v1"));
    assert_eq!(v.status, VideoState::Processing);
}

#[test]
fn video_with_only_native_id_is_promoted() {
    let v: VideoStatus = crate::decode_record_opt_id(json!({ "_id": 12, "status": "completed" })).unwrap();
    assert_eq!(v.id.as_deref(), Some("12"));
}

#[test]
fn video_without_any_id_still_decodes() {
    let v: VideoStatus = crate::decode_record_opt_id(json!({ "status": "pending" })).unwrap();
    assert!(v.id.is_none());
}

#[test]
fn video_state_terminality() {
    assert!(VideoState::Completed.is_terminal());
    assert!(VideoState::Failed.is_terminal());
    assert!(!VideoState::Processing.is_terminal());
    assert!(!VideoState::Pending.is_terminal());
}
