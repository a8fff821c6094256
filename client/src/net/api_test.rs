use super::*;
use serde_json::json;

#[test]
fn chat_url_joins_base_and_path() {
    assert_eq!(chat_url("/chats/c1/versions"), format!("{CHAT_API_BASE}/chats/c1/versions"));
}

#[test]
fn news_url_appends_query() {
    let query = ClusterQuery { company: Some("Acme".into()), limit: Some(10), ..ClusterQuery::default() };
    assert_eq!(
        news_url(endpoints::NEWS_CLUSTERS, &query.to_query_string()),
        format!("{NEWS_API_BASE}/api/news/clusters?company=Acme&limit=10&skip=0")
    );
}

#[test]
fn check_status_accepts_2xx_only() {
    assert!(check_status(200).is_ok());
    assert!(check_status(204).is_ok());
    assert_eq!(check_status(404), Err(ApiError::Status(404)));
    assert_eq!(check_status(500), Err(ApiError::Status(500)));
    assert_eq!(check_status(302), Err(ApiError::Status(302)));
}

#[test]
fn decode_page_reads_envelope() {
    let page: Page<NewsCluster> = decode_page(
        json!({ "items": [{ "id": "k1", "headline": "h" }], "total": 40, "limit": 20, "skip": 20 }),
        20,
        20,
    )
    .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total, 40);
}

#[test]
fn decode_page_fills_window_from_request() {
    let page: Page<NewsCluster> = decode_page(json!({ "items": [], "total": 0 }), 10, 30).unwrap();
    assert_eq!((page.limit, page.skip), (10, 30));
}

#[test]
fn decode_page_bare_full_array_offers_next_page() {
    let page: Page<NewsArticle> =
        decode_page(json!([{ "id": "a" }, { "id": "b" }]), 2, 0).unwrap();
    assert!(page.has_more());
    let short: Page<NewsArticle> = decode_page(json!([{ "id": "a" }]), 2, 0).unwrap();
    assert!(!short.has_more());
}

#[test]
fn decode_page_items_with_both_ids_keep_explicit_id() {
    let page: Page<NewsArticle> = decode_page(
        json!({ "articles": [{ "id": "a1", "_id": "native-1" }, { "_id": "native-2" }], "total": 2 }),
        20,
        0,
    )
    .unwrap();
    let ids: Vec<_> = page.items.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["a1", "native-2"]);
}

#[test]
fn decode_page_bare_array_promotes_native_ids() {
    let page: Page<NewsCluster> =
        decode_page(json!([{ "_id": { "$oid": "65f0" } }, { "id": "k2", "_id": "x" }]), 20, 0).unwrap();
    let ids: Vec<_> = page.items.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["65f0", "k2"]);
}

#[test]
fn decode_page_rejects_item_without_any_id() {
    let err = decode_page::<NewsCluster>(json!({ "items": [{ "headline": "h" }] }), 20, 0).unwrap_err();
    assert_eq!(err, ApiError::Normalize(schema::NormalizeError::MissingId));
}

#[test]
fn decode_latest_video_keeps_explicit_id_over_native() {
    let video = decode_latest_video(json!({ "id": "v1", "_id": "native", "status": "processing" }))
        .unwrap()
        .unwrap();
    assert_eq!(video.id.as_deref(), Some("v1"));
}

#[test]
fn decode_latest_video_handles_null() {
    assert_eq!(decode_latest_video(Value::Null), Ok(None));
    let video = decode_latest_video(json!({ "id": "v1", "status": "completed", "video_url": "/v.mp4" }))
        .unwrap()
        .unwrap();
    assert_eq!(video.status, schema::VideoState::Completed);
}
