//! Resource-specific error types for REST operations.
//!
//! Every resource operation returns `Result<Value, ResourceError>`. The
//! variants split into failures detected locally, before any network call,
//! and failures reported by the transport or the backend:
//!
//! - [`ResourceError::Validation`]: Missing payload, required field, or id
//! - [`ResourceError::TypeMismatch`]: An argument had the wrong JSON type
//! - [`ResourceError::UnsupportedOperation`]: The resource disables the operation
//! - [`ResourceError::Http`]: The backend answered with a non-2xx status
//! - [`ResourceError::Transport`]: No response could be obtained
//!
//! # Example
//!
//! ```rust,ignore
//! use swell_api::rest::{ResourceError, ValidationError};
//!
//! match client.accounts.create(&json!({"first_name": "Ada"})).await {
//!     Ok(account) => println!("Created {}", account["id"]),
//!     Err(ResourceError::Validation(ValidationError::MissingField { field, .. })) => {
//!         println!("Please provide {field}");
//!     }
//!     Err(ResourceError::Http(e)) => println!("Backend said {}", e.code),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

use crate::clients::{HttpResponseError, TransportError};
use crate::rest::descriptor::ResourceOperation;

/// Input rejected before any request was made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The payload was absent or an empty object.
    #[error("Payload must be provided to {operation} a {resource}")]
    EmptyPayload {
        /// The resource name.
        resource: &'static str,
        /// The operation that needed a payload.
        operation: ResourceOperation,
    },

    /// A required field was absent from a create payload.
    ///
    /// Only the first missing field, in declaration order, is reported.
    #[error("'{field}' must be provided to create a {resource}")]
    MissingField {
        /// The resource name.
        resource: &'static str,
        /// The first required field not present in the payload.
        field: &'static str,
    },

    /// The id was absent or empty.
    #[error("id must be included to {operation} a {resource}")]
    MissingId {
        /// The resource name.
        resource: &'static str,
        /// The operation that needed an id.
        operation: ResourceOperation,
    },
}

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Input failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An argument was present but had the wrong JSON type.
    #[error("{field} must be a {expected} for {resource}, got {found}")]
    TypeMismatch {
        /// The resource name.
        resource: &'static str,
        /// The offending argument (`id`, `payload`, or `params`).
        field: &'static str,
        /// The expected JSON type.
        expected: &'static str,
        /// The JSON type that was supplied.
        found: &'static str,
    },

    /// The operation is disabled for this resource.
    #[error("{operation} is not supported for {resource}")]
    UnsupportedOperation {
        /// The resource name.
        resource: &'static str,
        /// The rejected operation.
        operation: ResourceOperation,
    },

    /// The backend responded with a non-success status.
    #[error(transparent)]
    Http(#[from] HttpResponseError),

    /// No response could be obtained.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ResourceError {
    /// Returns the HTTP status code if the backend responded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use swell_api::clients::{HttpMethod, HttpResponseError};
    /// use swell_api::rest::ResourceError;
    ///
    /// let error = ResourceError::from(HttpResponseError {
    ///     code: 400,
    ///     reason: "Bad Request".to_string(),
    ///     method: HttpMethod::Post,
    ///     url: String::new(),
    /// });
    /// assert_eq!(error.status(), Some(400));
    /// ```
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => Some(e.code),
            _ => None,
        }
    }

    /// Returns `true` if the error was raised before any network call.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::TypeMismatch { .. } | Self::UnsupportedOperation { .. }
        )
    }
}

/// Names the JSON type of a value for error messages.
pub(crate) const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
