//! HTTP client types for Swell backend communication.
//!
//! This module provides the transport layer underneath every resource. It
//! knows how to send one request and how to pace requests; it knows nothing
//! about resources, required fields, or response bodies.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Transport`]: The seam a resource sends requests through
//! - [`HttpClient`]: The default `reqwest`-backed transport
//! - [`HttpRequest`]: A request to be sent to the backend
//! - [`HttpResponse`]: A raw response from the backend
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`RateLimiter`]: The seam that paces outbound requests
//! - [`SlidingWindowLimiter`]: The default `calls` per `period` limiter
//!
//! # Example
//!
//! ```rust,ignore
//! use swell_api::clients::{HttpClient, HttpMethod, HttpRequest, Transport};
//!
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, format!("{}/products", config.base_url()))
//!     .query_param("limit", "10")
//!     .build()?;
//!
//! let response = client.send(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! There is none. Each call performs exactly one attempt, and any failure
//! surfaces to the caller unchanged.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod rate_limit;

pub use errors::{HttpResponseError, InvalidHttpRequestError, TransportError};
pub use http_client::{HttpClient, Transport, SDK_VERSION};
pub use http_request::{encode_query, redact_url, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use rate_limit::{RateLimiter, SlidingWindowLimiter, Unlimited};
