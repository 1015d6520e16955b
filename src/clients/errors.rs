//! Transport-level error types for the Swell API client.
//!
//! This module contains error types for HTTP operations:
//!
//! - [`HttpResponseError`]: The backend answered with a non-2xx status
//! - [`InvalidHttpRequestError`]: A request failed validation before sending
//! - [`TransportError`]: No usable response could be obtained at all
//!
//! # Example
//!
//! ```rust,ignore
//! use swell_api::clients::{Transport, TransportError};
//!
//! match transport.send(request).await {
//!     Ok(response) => println!("HTTP {}", response.code),
//!     Err(TransportError::Network(e)) => println!("Network error: {e}"),
//!     Err(TransportError::NoResponse { method, url }) => println!("{method} {url} got nothing"),
//!     Err(TransportError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::http_request::HttpMethod;

/// Error returned when the backend responds with a non-success status.
///
/// # Example
///
/// ```rust
/// use swell_api::clients::{HttpMethod, HttpResponseError};
///
/// let error = HttpResponseError {
///     code: 404,
///     reason: "Not Found".to_string(),
///     method: HttpMethod::Get,
///     url: "https://***@api.swell.store/products/x".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "HTTP Error 404: Not Found");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP Error {code}: {reason}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The reason phrase for the status code.
    pub reason: String,
    /// The method of the failed request.
    pub method: HttpMethod,
    /// The URL of the failed request, credentials masked.
    pub url: String,
}

/// Error returned when an HTTP request fails validation.
///
/// Raised before a request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request has no URL.
    #[error("Cannot send a request without a URL.")]
    EmptyUrl,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: HttpMethod,
    },

    /// A GET or DELETE request carried a body.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that does not accept a body.
        method: HttpMethod,
    },
}

/// Error type for failures below the HTTP status level.
///
/// None of these are retried automatically.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The transport produced no response object.
    #[error("No response received for {method} {url}")]
    NoResponse {
        /// The method of the request.
        method: HttpMethod,
        /// The URL of the request, credentials masked.
        url: String,
    },

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),
}
