use super::*;

#[test]
fn cluster_query_applies_default_skip_and_omits_unset_filters() {
    let q = ClusterQuery { company: Some("Acme".into()), limit: Some(10), ..ClusterQuery::default() };
    assert_eq!(q.to_query_string(), "company=Acme&limit=10&skip=0");
}

#[test]
fn cluster_query_defaults_limit() {
    assert_eq!(ClusterQuery::default().to_query_string(), "limit=20&skip=0");
}

#[test]
fn cluster_query_keeps_documented_order() {
    let q = ClusterQuery {
        company: Some("Acme".into()),
        factor_type: Some("macro".into()),
        start_date: Some("2026-01-01".into()),
        limit: Some(5),
        skip: Some(15),
    };
    assert_eq!(
        q.to_query_string(),
        "company=Acme&factor_type=macro&start_date=2026-01-01&limit=5&skip=15"
    );
}

#[test]
fn cluster_query_encodes_values() {
    let q = ClusterQuery { company: Some("Smith & Co".into()), ..ClusterQuery::default() };
    assert_eq!(q.to_query_string(), "company=Smith+%26+Co&limit=20&skip=0");
}

#[test]
fn empty_filter_strings_are_omitted() {
    let q = ClusterQuery { company: Some(String::new()), ..ClusterQuery::default() };
    assert_eq!(q.to_query_string(), "limit=20&skip=0");
}

#[test]
fn article_query_emits_all_filters_in_order() {
    let q = ArticleQuery {
        company: Some("Acme".into()),
        factor_type: Some("credit".into()),
        sentiment: Some("negative".into()),
        liquidity_impact: Some("high".into()),
        start_date: Some("2026-01-01".into()),
        end_date: Some("2026-02-01".into()),
        source: Some("wire".into()),
        is_relevant: Some(true),
        limit: Some(50),
        skip: Some(100),
    };
    assert_eq!(
        q.to_query_string(),
        "company=Acme&factor_type=credit&sentiment=negative&liquidity_impact=high\
         &start_date=2026-01-01&end_date=2026-02-01&source=wire&is_relevant=true&limit=50&skip=100"
    );
}

#[test]
fn article_query_emits_false_relevance() {
    let q = ArticleQuery { is_relevant: Some(false), ..ArticleQuery::default() };
    assert_eq!(q.to_query_string(), "is_relevant=false&limit=20&skip=0");
}
