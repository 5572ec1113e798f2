//! HTTP transport.
//!
//! A [`Transport`] moves one request to the server and hands back the raw
//! status and body. It knows nothing about envelopes or DTOs; that happens in
//! [`ApiResult::from_response`](crate::ApiResult::from_response).
//! [`HttpTransport`] is the reqwest-backed implementation used by default.

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{PmError, Result};

const USER_AGENT: &str = concat!("pmapi/", env!("CARGO_PKG_VERSION"));

/// A request described as plain data.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the configured base URL (e.g. `api/data/tasks`).
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Append query pairs serialized from `query`.
    ///
    /// `None` fields are skipped by the query type's own serde attributes.
    ///
    /// # Errors
    ///
    /// Returns an error if `query` does not serialize to a flat object.
    pub fn with_query<Q: Serialize + ?Sized>(mut self, query: &Q) -> Result<Self> {
        match serde_json::to_value(query).map_err(PmError::Serialize)? {
            Value::Object(map) => {
                for (key, value) in map {
                    let value = match value {
                        Value::Null => continue,
                        Value::String(s) => s,
                        other => other.to_string(),
                    };
                    self.query.push((key, value));
                }
                Ok(self)
            }
            Value::Null => Ok(self),
            other => Err(PmError::InvalidConfig(format!(
                "query parameters must serialize to an object, got {other}"
            ))),
        }
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if `body` cannot be serialized.
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body).map_err(PmError::Serialize)?);
        Ok(self)
    }
}

/// Status and body of a response, undecoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Sends requests to the API.
///
/// Implementations return `Err` only when no response was received; every
/// HTTP status, including 4xx and 5xx, is an `Ok` [`RawResponse`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse>;
}

/// reqwest-backed transport with bearer authentication.
///
/// Cheap to clone; clones share a connection pool.
#[derive(Clone)]
pub struct HttpTransport {
    http: Client,
    base_url: Url,
    token: String,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Build a transport from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(config.timeout())
            .build()
            .map_err(PmError::Transport)?;

        Ok(Self {
            http,
            base_url: config.base_url().clone(),
            token: config.api_key().to_string(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[tracing::instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    async fn send(&self, request: ApiRequest) -> Result<RawResponse> {
        let url = self.base_url.join(&request.path)?;

        let mut builder = self
            .http
            .request(request.method, url)
            .bearer_auth(&self.token);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(PmError::Transport)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(PmError::Transport)?;
        tracing::debug!(status, bytes = body.len(), "response received");

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}
