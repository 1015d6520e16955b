//! Shared state behind every resource of one client.

use std::fmt;
use std::sync::Arc;

use crate::clients::{redact_url, HttpClient, RateLimiter, SlidingWindowLimiter, Transport};
use crate::config::SwellConfig;
use crate::error::ConfigError;
use crate::rest::observer::{Observer, TracingObserver};

/// The authenticated base URL plus the collaborators every request goes
/// through: one transport, one rate limiter, one observer.
///
/// Built once per client and shared by reference between all resources, so
/// the rate limit applies to the client as a whole.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use swell_api::{ApiKey, StoreId, SwellConfig};
/// use swell_api::rest::ClientContext;
///
/// let config = SwellConfig::builder()
///     .store_id(StoreId::new("s").unwrap())
///     .api_key(ApiKey::new("k").unwrap())
///     .build()
///     .unwrap();
///
/// let context = ClientContext::from_config(&config).unwrap();
/// assert_eq!(context.url("products"), "https://s:k@api.swell.store/products");
/// ```
#[derive(Clone)]
pub struct ClientContext {
    base_url: Arc<str>,
    transport: Arc<dyn Transport>,
    rate_limiter: Arc<dyn RateLimiter>,
    observer: Arc<dyn Observer>,
}

// Verify ClientContext is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientContext>();
};

impl ClientContext {
    /// Creates a context from explicit collaborators.
    ///
    /// Diagnostics go to a [`TracingObserver`] until replaced with
    /// [`with_observer`](Self::with_observer).
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        transport: Arc<dyn Transport>,
        rate_limiter: Arc<dyn RateLimiter>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: Arc::from(base_url.trim_end_matches('/')),
            transport,
            rate_limiter,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Creates a context with the default `reqwest` transport and a
    /// sliding-window limiter built from the configured rate limit.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the HTTP client cannot be built.
    pub fn from_config(config: &SwellConfig) -> Result<Self, ConfigError> {
        let transport = HttpClient::new(config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a context for `config` that sends through `transport`.
    #[must_use]
    pub fn with_transport(config: &SwellConfig, transport: Arc<dyn Transport>) -> Self {
        let limiter = SlidingWindowLimiter::new(config.rate_limit());
        Self::new(config.base_url(), transport, Arc::new(limiter))
    }

    /// Replaces the observer.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observer = observer;
        self
    }

    /// Replaces the rate limiter.
    #[must_use]
    pub fn with_rate_limiter(mut self, rate_limiter: Arc<dyn RateLimiter>) -> Self {
        self.rate_limiter = rate_limiter;
        self
    }

    /// Returns the authenticated base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins `path` onto the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    pub(crate) fn rate_limiter(&self) -> &dyn RateLimiter {
        self.rate_limiter.as_ref()
    }

    pub(crate) fn observer(&self) -> &dyn Observer {
        self.observer.as_ref()
    }
}

impl fmt::Debug for ClientContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientContext")
            .field("base_url", &redact_url(&self.base_url))
            .field("transport", &self.transport)
            .field("rate_limiter", &self.rate_limiter)
            .field("observer", &self.observer)
            .finish()
    }
}
