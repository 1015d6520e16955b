//! HTTP response type for the Swell API client.
//!
//! This module provides the [`HttpResponse`] type: the raw result a
//! [`Transport`](crate::clients::Transport) hands back before the body is
//! interpreted.

use std::borrow::Cow;

use crate::clients::http_request::{redact_url, HttpMethod};

/// A raw HTTP response from the backend.
///
/// The body is kept as text; parsing it into structured data is the job of
/// the response normalizer in [`rest`](crate::rest).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The reason phrase, if the status code has a canonical one.
    pub reason: Option<String>,
    /// The response body as text (possibly empty).
    pub body: String,
    /// The method of the request that produced this response.
    pub method: HttpMethod,
    /// The URL of the request that produced this response.
    pub url: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(
        method: HttpMethod,
        url: impl Into<String>,
        code: u16,
        reason: Option<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            code,
            reason,
            body: body.into(),
            method,
            url: url.into(),
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the reason phrase, or `"Unknown"` when none was provided.
    #[must_use]
    pub fn reason_phrase(&self) -> &str {
        self.reason.as_deref().unwrap_or("Unknown")
    }

    /// Returns the request URL with credentials masked.
    #[must_use]
    pub fn redacted_url(&self) -> Cow<'_, str> {
        redact_url(&self.url)
    }

    /// Formats `METHOD url [HTTP code]` for diagnostics.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} {} [HTTP {}]", self.method, self.redacted_url(), self.code)
    }
}
