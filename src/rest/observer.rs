//! Diagnostic hooks for the response pipeline.
//!
//! The library never installs a subscriber or holds a global logger. Each
//! client carries an [`Observer`]; the default [`TracingObserver`] forwards
//! to `tracing`, and tests can substitute one that records what it sees.

use std::fmt;

use serde_json::Value;

use crate::clients::HttpResponse;

/// Receives diagnostics from the response normalizer.
///
/// All hooks default to doing nothing.
pub trait Observer: Send + Sync + fmt::Debug {
    /// Called for every response, successful or not.
    fn response_received(&self, _response: &HttpResponse) {}

    /// Called when a successful response body could not be parsed as JSON.
    fn unparseable_body(&self, _response: &HttpResponse, _error: &serde_json::Error) {}

    /// Called when a successful response carries an `errors` key.
    fn application_errors(&self, _response: &HttpResponse, _errors: &Value) {}
}

/// Forwards diagnostics to `tracing`.
///
/// URLs are logged with credentials masked.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn response_received(&self, response: &HttpResponse) {
        tracing::debug!(
            method = %response.method,
            url = %response.redacted_url(),
            status = response.code,
            "response received"
        );
    }

    fn unparseable_body(&self, response: &HttpResponse, error: &serde_json::Error) {
        tracing::debug!(
            request = %response.summary(),
            error = %error,
            "response body is not JSON, returning an empty object"
        );
    }

    fn application_errors(&self, response: &HttpResponse, errors: &Value) {
        tracing::warn!(
            request = %response.summary(),
            errors = %errors,
            "backend reported errors"
        );
    }
}
