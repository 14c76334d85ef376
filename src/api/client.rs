//! HTTP client wrapper for the webhook service.

use super::error::ApiError;
use super::url_builder::{build_api_url, QueryParams};
use crate::config::ApiConfig;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::time::Duration;

/// Per-request options passed through to the HTTP client.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    /// `None` means the caller supplied no headers, which is the only case
    /// where `Content-Type: application/json` is added. A supplied map, even
    /// an empty one, is sent as-is.
    pub headers: Option<HeaderMap>,
    pub body: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: None,
            body: None,
        }
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Client bound to one service base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    /// Shared HTTP client for connection pooling
    http: Client,
}

impl ApiClient {
    /// Create a client from configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self::with_client(config.base_url.clone(), http))
    }

    /// Create a client with a custom HTTP client (for testing).
    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for `path` against this client's base.
    pub fn url(&self, path: &str, query: &QueryParams) -> String {
        build_api_url(&self.base_url, path, query)
    }

    /// GET `path` and decode the JSON response.
    pub async fn get<T>(&self, path: &str, query: &QueryParams) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        self.fetch(path, RequestOptions::default(), query).await
    }

    /// Send a request and decode the JSON response.
    ///
    /// - Non-2xx: the error message is the body's `detail` field when present,
    ///   otherwise `HTTP error: <code>`.
    /// - 204: `T` decoded from an empty object, whatever the body holds.
    pub async fn fetch<T>(
        &self,
        path: &str,
        options: RequestOptions,
        query: &QueryParams,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path, query);
        let method = options.method.clone();

        let result = self.send(&url, options).await;
        if let Err(ref e) = result {
            tracing::error!(method = %method, url = %url, error = %e, "API fetch error");
        }
        result
    }

    async fn send<T>(&self, url: &str, options: RequestOptions) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let headers = options.headers.unwrap_or_else(default_headers);

        let mut request = self.http.request(options.method, url).headers(headers);
        if let Some(body) = options.body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(url = %url, status = status.as_u16(), "Received response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &body));
        }

        if status == StatusCode::NO_CONTENT {
            return serde_json::from_value(Value::Object(Map::new())).map_err(|e| {
                ApiError::new(format!("Failed to decode empty response: {}", e))
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ApiError::new(format!("Invalid JSON response: {}", e)))
    }
}
