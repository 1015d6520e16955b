//! # Swell API Rust Client
//!
//! An async client for the Swell backend API: every backend collection
//! (accounts, products, carts, orders, ...) is exposed with the same five
//! operations, with local validation of required fields, centralized
//! response handling and a client-wide rate limit.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`SwellConfig`] and [`SwellConfigBuilder`]
//! - Validated newtypes for credentials ([`StoreId`], [`ApiKey`]) and the backend host ([`HostUrl`])
//! - The [`Swell`] client with one member per resource, plus sub-resources
//! - A generic [`Resource`] with `list`, `get`, `create`, `update` and `delete`
//! - A sliding-window [`RateLimiter`] shared by every resource of a client
//! - Pluggable [`Transport`] and [`Observer`] seams for testing and diagnostics
//!
//! ## Quick Start
//!
//! ```rust
//! use swell_api::{ApiKey, RateLimit, StoreId, Swell, SwellConfig};
//!
//! let config = SwellConfig::builder()
//!     .store_id(StoreId::new("my-store").unwrap())
//!     .api_key(ApiKey::new("sk_live_secret").unwrap())
//!     .rate_limit(RateLimit::new(4, 1.0).unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = Swell::new(&config).unwrap();
//! assert_eq!(client.cards.collection_url(), client.accounts.cards.collection_url());
//! ```
//!
//! ## Making Requests
//!
//! Payloads and responses are [`serde_json::Value`]s:
//!
//! ```rust,ignore
//! use serde_json::json;
//! use swell_api::{ResourceError, Swell, ValidationError};
//!
//! let client = Swell::from_env()?;
//!
//! // List with filters, expansion and paging
//! let page = client
//!     .orders
//!     .list(Some(&json!({"limit": 25, "expand": ["account"], "date_created": {"$gte": "2024-01-01"}})))
//!     .await?;
//! println!("{} orders", page["count"]);
//!
//! // Required fields are checked before anything is sent
//! match client.accounts.create(&json!({"first_name": "Ada"})).await {
//!     Err(ResourceError::Validation(ValidationError::MissingField { field, .. })) => {
//!         assert_eq!(field, "email");
//!     }
//!     other => unreachable!("{other:?}"),
//! }
//!
//! // Convert a staged cart into an order
//! let order = client.orders.convert_cart_to_order(cart_id).await?;
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns `Result<Value, ResourceError>`. Validation and
//! type errors are raised locally before any network call. Non-2xx statuses
//! become [`ResourceError::Http`]; connection failures become
//! [`ResourceError::Transport`]. Nothing is retried.
//!
//! A successful response whose body carries an `errors` key is returned as
//! is and reported to the [`Observer`].
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration, rate limiting and diagnostics belong to a client instance
//! - **Fail-fast validation**: Newtypes validate on construction; operations validate before sending
//! - **Thread-safe**: All client types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
mod swell;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, HostUrl, RateLimit, StoreId, SwellConfig, SwellConfigBuilder};
pub use error::ConfigError;
pub use swell::Swell;

// Re-export transport types at crate root
pub use clients::{
    HttpClient, HttpMethod, HttpRequest, HttpResponse, HttpResponseError, RateLimiter,
    SlidingWindowLimiter, Transport, TransportError,
};

// Re-export resource types at crate root
pub use rest::{
    ClientContext, Observer, Resource, ResourceDescriptor, ResourceError, ResourceOperation,
    TracingObserver, ValidationError,
};
