//! Resource infrastructure for the Swell backend.
//!
//! This module maps named backend collections onto one generic set of
//! operations:
//!
//! - **[`ResourceDescriptor`]**: name, endpoint and required create fields
//! - **[`Resource`]**: `list`, `get`, `create`, `update` and `delete` over a descriptor
//! - **[`ClientContext`]**: base URL, transport, rate limiter and observer shared by all resources
//! - **[`normalize`]**: turns raw responses into JSON payloads or typed errors
//! - **[`Observer`]**: diagnostic hooks, forwarded to `tracing` by default
//! - **[`ResourceError`]**: the closed set of failures an operation can return
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use serde_json::json;
//! use swell_api::rest::{ClientContext, Resource, ResourceDescriptor};
//!
//! const BRANDS: ResourceDescriptor = ResourceDescriptor::new("brands")
//!     .with_endpoint("content/brands")
//!     .with_required_fields(&["name"]);
//!
//! let context = Arc::new(ClientContext::from_config(&config)?);
//! let brands = Resource::new(BRANDS, context);
//!
//! let page = brands.list(Some(&json!({"limit": 25, "page": 2}))).await?;
//! println!("{} brands", page["count"]);
//! ```
//!
//! # Payloads
//!
//! Payloads and responses are untyped [`serde_json::Value`]s. Only three
//! things are ever inspected locally: the presence of required fields on
//! create, the `id` of an update payload, and an `errors` key in responses.

mod context;
mod descriptor;
mod errors;
mod observer;
mod resource;
mod response;

pub mod resources;

pub use context::ClientContext;
pub use descriptor::{Capabilities, ResourceDescriptor, ResourceOperation};
pub use errors::{ResourceError, ValidationError};
pub use observer::{Observer, TracingObserver};
pub use resource::Resource;
pub use response::normalize;
