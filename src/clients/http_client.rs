//! HTTP transport for Swell backend communication.
//!
//! This module provides the [`Transport`] seam and the default
//! [`HttpClient`] implementation backed by `reqwest`.

use async_trait::async_trait;
use std::fmt;

use crate::clients::errors::TransportError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::SwellConfig;
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sends one [`HttpRequest`] and hands back the raw [`HttpResponse`].
///
/// Implementations perform exactly one attempt per call. Non-2xx responses
/// are returned as `Ok`; interpreting the status is left to the caller.
///
/// Swap the transport to run resources against a stub:
///
/// ```rust
/// use async_trait::async_trait;
/// use swell_api::clients::{HttpRequest, HttpResponse, Transport, TransportError};
///
/// #[derive(Debug)]
/// struct Canned;
///
/// #[async_trait]
/// impl Transport for Canned {
///     async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
///         Ok(HttpResponse::new(request.http_method, request.url, 200, None, "{}"))
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Sends the request.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no response could be obtained.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// HTTP client for making requests to the Swell backend.
///
/// The client handles:
/// - Default headers including User-Agent and `Accept: application/json`
/// - Basic authentication taken from the credentials embedded in request URLs
/// - An optional per-request timeout
///
/// It never retries; a failed request surfaces immediately.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The User-Agent sent with every request.
    user_agent: String,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the underlying reqwest client
    /// cannot be created (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use swell_api::{ApiKey, StoreId, SwellConfig};
    /// use swell_api::clients::HttpClient;
    ///
    /// let config = SwellConfig::builder()
    ///     .store_id(StoreId::new("my-store").unwrap())
    ///     .api_key(ApiKey::new("secret").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config).unwrap();
    /// assert!(client.user_agent().contains("swell-api-rust"));
    /// ```
    pub fn new(config: &SwellConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}swell-api-rust v{SDK_VERSION} | Rust {rust_version}");

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(user_agent.clone())
            .default_headers(headers);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| ConfigError::HttpClient {
            reason: e.to_string(),
        })?;

        Ok(Self { client, user_agent })
    }

    /// Returns the User-Agent header value sent with each request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        request.verify()?;

        let redacted = request.redacted_url().into_owned();
        tracing::debug!(method = %request.http_method, url = %redacted, "sending request");

        let mut req_builder = self
            .client
            .request(request.http_method.into(), request.url.as_str());

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.json(body);
        }

        let res = req_builder.send().await.map_err(|e| {
            tracing::debug!(method = %request.http_method, url = %redacted, error = %e, "request failed");
            TransportError::Network(e.without_url())
        })?;

        let status = res.status();
        let reason = status.canonical_reason().map(String::from);
        let body = res
            .text()
            .await
            .map_err(|e| TransportError::Network(e.without_url()))?;

        Ok(HttpResponse::new(
            request.http_method,
            request.url,
            status.as_u16(),
            reason,
            body,
        ))
    }
}
