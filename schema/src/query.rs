//! Query-string builders for the paginated news endpoints.
//!
//! Filters are emitted only when set and always in the order the news service
//! documents them; `limit` and `skip` are always present, falling back to
//! [`DEFAULT_LIMIT`] and zero.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use url::form_urlencoded::Serializer;

/// Page size used when a query leaves `limit` unset.
pub const DEFAULT_LIMIT: u32 = 20;

/// Filters for `GET /api/news/clusters`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClusterQuery {
    pub company: Option<String>,
    pub factor_type: Option<String>,
    pub start_date: Option<String>,
    pub limit: Option<u32>,
    pub skip: Option<u32>,
}

impl ClusterQuery {
    /// Encode as `key=value&...` without a leading `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut out = Serializer::new(String::new());
        append_opt(&mut out, "company", self.company.as_deref());
        append_opt(&mut out, "factor_type", self.factor_type.as_deref());
        append_opt(&mut out, "start_date", self.start_date.as_deref());
        append_paging(&mut out, self.limit, self.skip);
        out.finish()
    }
}

/// Filters for `GET /api/news/summarized`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    pub company: Option<String>,
    pub factor_type: Option<String>,
    pub sentiment: Option<String>,
    pub liquidity_impact: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub source: Option<String>,
    pub is_relevant: Option<bool>,
    pub limit: Option<u32>,
    pub skip: Option<u32>,
}

impl ArticleQuery {
    /// Encode as `key=value&...` without a leading `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut out = Serializer::new(String::new());
        append_opt(&mut out, "company", self.company.as_deref());
        append_opt(&mut out, "factor_type", self.factor_type.as_deref());
        append_opt(&mut out, "sentiment", self.sentiment.as_deref());
        append_opt(&mut out, "liquidity_impact", self.liquidity_impact.as_deref());
        append_opt(&mut out, "start_date", self.start_date.as_deref());
        append_opt(&mut out, "end_date", self.end_date.as_deref());
        append_opt(&mut out, "source", self.source.as_deref());
        if let Some(flag) = self.is_relevant {
            out.append_pair("is_relevant", if flag { "true" } else { "false" });
        }
        append_paging(&mut out, self.limit, self.skip);
        out.finish()
    }
}

fn append_opt(out: &mut Serializer<'_, String>, key: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        out.append_pair(key, value);
    }
}

fn append_paging(out: &mut Serializer<'_, String>, limit: Option<u32>, skip: Option<u32>) {
    out.append_pair("limit", &limit.unwrap_or(DEFAULT_LIMIT).to_string());
    out.append_pair("skip", &skip.unwrap_or(0).to_string());
}
