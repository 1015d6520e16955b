//! Resource descriptors.
//!
//! A [`ResourceDescriptor`] is the fixed configuration that turns the generic
//! [`Resource`](crate::rest::Resource) into a concrete collection: its name,
//! its endpoint path, the fields a create payload must carry, and which
//! operations it allows.
//!
//! # Example
//!
//! ```rust
//! use swell_api::rest::{ResourceDescriptor, ResourceOperation};
//!
//! const CARDS: ResourceDescriptor = ResourceDescriptor::new("cards")
//!     .with_endpoint("accounts:cards")
//!     .with_required_fields(&["parent_id", "token"]);
//!
//! assert_eq!(CARDS.endpoint(), "accounts:cards");
//! assert!(CARDS.supports(ResourceOperation::Delete));
//! ```

use std::fmt;

use serde_json::{Map, Value};

use crate::clients::HttpMethod;

/// Operations that can be performed on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// List the collection (GET /{endpoint}).
    List,
    /// Retrieve a single item (GET /{endpoint}/{id}).
    Get,
    /// Create a new item (POST /{endpoint}).
    Create,
    /// Update an existing item (PUT /{endpoint}/{id}).
    Update,
    /// Delete an item (DELETE /{endpoint}/{id}).
    Delete,
}

impl ResourceOperation {
    /// Returns the HTTP method used by this operation.
    #[must_use]
    pub const fn http_method(&self) -> HttpMethod {
        match self {
            Self::List | Self::Get => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for ResourceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which write operations a resource accepts.
///
/// List and get are always available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    create: bool,
    update: bool,
    delete: bool,
}

impl Capabilities {
    /// Every operation is allowed.
    pub const ALL: Self = Self {
        create: true,
        update: true,
        delete: true,
    };

    /// Only list and get are allowed.
    pub const READ_ONLY: Self = Self {
        create: false,
        update: false,
        delete: false,
    };

    /// Returns `true` if the operation is allowed.
    #[must_use]
    pub const fn allows(&self, operation: ResourceOperation) -> bool {
        match operation {
            ResourceOperation::List | ResourceOperation::Get => true,
            ResourceOperation::Create => self.create,
            ResourceOperation::Update => self.update,
            ResourceOperation::Delete => self.delete,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::ALL
    }
}

/// Immutable configuration of one resource.
///
/// Built with `const fn`s so the resource table can live in constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    name: &'static str,
    endpoint: &'static str,
    required_fields: &'static [&'static str],
    capabilities: Capabilities,
}

impl ResourceDescriptor {
    /// Creates a descriptor whose endpoint is its name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            endpoint: name,
            required_fields: &[],
            capabilities: Capabilities::ALL,
        }
    }

    /// Sets the endpoint path, e.g. `"accounts:cards"`.
    #[must_use]
    pub const fn with_endpoint(mut self, endpoint: &'static str) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Sets the fields a create payload must contain, checked in order.
    #[must_use]
    pub const fn with_required_fields(mut self, fields: &'static [&'static str]) -> Self {
        self.required_fields = fields;
        self
    }

    /// Disables create, update and delete.
    #[must_use]
    pub const fn read_only(mut self) -> Self {
        self.capabilities = Capabilities::READ_ONLY;
        self
    }

    /// Returns the resource name used in error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the endpoint path.
    #[must_use]
    pub const fn endpoint(&self) -> &'static str {
        self.endpoint
    }

    /// Returns the required create fields.
    #[must_use]
    pub const fn required_fields(&self) -> &'static [&'static str] {
        self.required_fields
    }

    /// Returns the allowed operations.
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Returns `true` if the operation is allowed.
    #[must_use]
    pub const fn supports(&self, operation: ResourceOperation) -> bool {
        self.capabilities.allows(operation)
    }

    /// Returns the first required field absent from `payload`.
    ///
    /// Presence is all that is checked; a field set to `null` counts as present.
    #[must_use]
    pub fn first_missing_field(&self, payload: &Map<String, Value>) -> Option<&'static str> {
        self.required_fields
            .iter()
            .copied()
            .find(|field| !payload.contains_key(*field))
    }
}
