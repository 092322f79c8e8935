//! HTTP client for the back-office REST API.
//!
//! All resources follow the same conventions: list endpoints answer
//! `GET /<resource>?<filters>` with `{ "data": [...] }`, mutations use
//! `PATCH`/`PUT`/`DELETE` with JSON bodies and ingestion endpoints accept
//! multipart uploads. Requests carry the stored access token as a bearer
//! token.
//!
//! ## Failure Handling
//!
//! A failed request is reported once and the operation is abandoned; the
//! operator re-runs the command to retry. The single exception is an
//! authentication that is not ready yet: a `401` on the first attempt of a
//! `GET` waits for the configured delay and retries exactly once.
//!
//! ## Caching
//!
//! `GET` list responses are cached for a short window (see [`cache`]) and
//! every mutation drops the cached entries of the resource it touched.

pub mod cache;
pub mod resources;

use crate::libs::config::Config;
use crate::libs::records::{ApiItem, ApiList};
use crate::libs::secret::Secret;
use cache::{request_key, Query, ResponseCache};
use reqwest::{multipart, Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

pub const TOKEN_FILE: &str = ".api_token";
pub const TOKEN_PROMPT: &str = "Enter your API access token";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{method} {endpoint} failed with status {status}: {message}")]
    Status {
        method: String,
        endpoint: String,
        status: u16,
        message: String,
    },
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("the server API URL is not configured, run `paydesk init`")]
    NotConfigured,
}

/// Whether a response status warrants the single authentication retry.
pub fn should_retry(status: StatusCode, attempt: u32) -> bool {
    status == StatusCode::UNAUTHORIZED && attempt == 0
}

/// Extracts a readable message from an error body, which is either
/// `{ "message": "..." }`, `{ "error": "..." }` or plain text.
pub fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(Value::as_str) {
                return text.to_string();
            }
        }
    }
    let body = body.trim();
    if body.is_empty() {
        "no details provided".to_string()
    } else {
        body.to_string()
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    cache: Arc<ResponseCache>,
    retry_delay: Duration,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>, cache_ttl: Duration, retry_delay: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            token,
            cache: Arc::new(ResponseCache::new(cache_ttl)),
            retry_delay,
        }
    }

    /// Builds a client from the saved configuration and the stored token.
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let server = config.server.clone().ok_or(ApiError::NotConfigured)?;
        if server.api_url.trim().is_empty() {
            return Err(ApiError::NotConfigured);
        }
        let token = Secret::new(TOKEN_FILE, TOKEN_PROMPT).get();
        Ok(Self::new(
            &server.api_url,
            token,
            Duration::from_secs(config.cache_or_default().ttl_secs),
            Duration::from_millis(server.auth_retry_delay_ms),
        ))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(endpoint));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends a request built by `build`. Reads rejected with an early `401`
    /// are retried once after the configured delay; nothing else is retried.
    async fn send<F>(&self, method: Method, endpoint: &str, build: F) -> Result<reqwest::Response, ApiError>
    where
        F: Fn(RequestBuilder) -> RequestBuilder,
    {
        let mut attempt = 0;
        loop {
            let response = build(self.request(method.clone(), endpoint)).send().await?;
            if method == Method::GET && should_retry(response.status(), attempt) {
                warn!(%endpoint, delay_ms = self.retry_delay.as_millis() as u64, "authentication not ready, retrying once");
                tokio::time::sleep(self.retry_delay).await;
                attempt += 1;
                continue;
            }
            return Self::check(&method, endpoint, response).await;
        }
    }

    async fn check(method: &Method, endpoint: &str, response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            method: method.to_string(),
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            message: error_message(&body),
        })
    }

    async fn fetch_json(&self, endpoint: &str, query: &Query) -> Result<Value, ApiError> {
        let response = self.send(Method::GET, endpoint, |req| req.query(query)).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Cached `GET`, de-duplicated per endpoint and query.
    pub async fn get_cached(&self, endpoint: &str, query: &Query) -> Result<Value, ApiError> {
        let key = request_key(endpoint, query);
        if let Some(hit) = self.cache.get(&key) {
            debug!(%key, "cache hit");
            return Ok(hit);
        }

        let lock = self.cache.request_lock(&key);
        let result = {
            let _guard = lock.lock().await;
            match self.cache.get(&key) {
                Some(hit) => Ok(hit),
                None => {
                    debug!(%key, "cache miss");
                    let value = self.fetch_json(endpoint, query).await;
                    if let Ok(value) = &value {
                        self.cache.insert(&key, value.clone());
                    }
                    value
                }
            }
        };
        drop(lock);
        self.cache.release_lock(&key);
        result
    }

    /// Fetches a list endpoint and unwraps its `data` array.
    pub async fn list<T: DeserializeOwned>(&self, endpoint: &str, query: &Query) -> Result<Vec<T>, ApiError> {
        let value = self.get_cached(endpoint, query).await?;
        let list: ApiList<T> = serde_json::from_value(value)?;
        Ok(list.data)
    }

    /// Fetches a single resource and unwraps its `data` object.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let value = self.get_cached(endpoint, &Query::new()).await?;
        let item: ApiItem<T> = serde_json::from_value(value)?;
        Ok(item.data)
    }

    async fn mutate<B: Serialize + ?Sized>(&self, method: Method, endpoint: &str, body: Option<&B>) -> Result<Value, ApiError> {
        let response = self
            .send(method, endpoint, |req| match body {
                Some(body) => req.json(body),
                None => req,
            })
            .await?;
        self.cache.invalidate(endpoint);

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    pub async fn patch<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<Value, ApiError> {
        self.mutate(Method::PATCH, endpoint, Some(body)).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<Value, ApiError> {
        self.mutate(Method::PUT, endpoint, Some(body)).await
    }

    pub async fn delete<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<Value, ApiError> {
        self.mutate(Method::DELETE, endpoint, Some(body)).await
    }

    /// Posts a multipart form to an ingestion endpoint.
    pub async fn upload(&self, endpoint: &str, form: multipart::Form) -> Result<Value, ApiError> {
        let response = self.request(Method::POST, endpoint).multipart(form).send().await?;
        let response = Self::check(&Method::POST, endpoint, response).await?;
        self.cache.invalidate(endpoint);
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Raw bytes of a server-generated file.
    pub async fn download(&self, endpoint: &str, query: &Query) -> Result<Vec<u8>, ApiError> {
        let response = self.send(Method::GET, endpoint, |req| req.query(query)).await?;
        Ok(response.bytes().await?.to_vec())
    }
}
