//! Thin HTTP client over the chat and news services.

use reqwest::Method;
use schema::endpoints;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{method} {url} returned HTTP {status}: {body}")]
    Status { method: Method, url: String, status: u16, body: String },
    #[error(transparent)]
    Api(#[from] schema::ApiError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    chat_base: String,
    news_base: String,
}

/// Which backend a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Chat,
    News,
}

impl ApiClient {
    pub fn new(chat_base: impl Into<String>, news_base: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), chat_base: chat_base.into(), news_base: news_base.into() }
    }

    /// Absolute URL for `path` (plus optional encoded `query`) on `service`.
    pub fn url(&self, service: Service, path: &str, query: &str) -> String {
        let base = match service {
            Service::Chat => &self.chat_base,
            Service::News => &self.news_base,
        };
        endpoints::join_with_query(base, path, query)
    }

    pub async fn get(&self, service: Service, path: &str, query: &str) -> Result<Value, CliError> {
        self.send::<()>(Method::GET, self.url(service, path, query), None).await
    }

    pub async fn post<B: Serialize>(&self, service: Service, path: &str, body: &B) -> Result<Value, CliError> {
        self.send(Method::POST, self.url(service, path, ""), Some(body)).await
    }

    async fn send<B: Serialize>(&self, method: Method, url: String, body: Option<&B>) -> Result<Value, CliError> {
        let request = self.http.request(method.clone(), &url);
        let request = if let Some(json) = body { request.json(json) } else { request };

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(CliError::Status { method, url, status: status.as_u16(), body: text });
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}
