//! The generic resource operation core.
//!
//! A [`Resource`] pairs a [`ResourceDescriptor`] with the shared
//! [`ClientContext`] and provides `list`, `get`, `create`, `update` and
//! `delete`. Every concrete collection (products, accounts, cards, ...) is a
//! `Resource` with a different descriptor.
//!
//! # Request lifecycle
//!
//! 1. Check the operation is allowed for this resource
//! 2. Validate ids, payloads and params locally
//! 3. Wait for the shared rate limiter
//! 4. Send exactly one request through the transport
//! 5. Normalize the response
//!
//! Steps 1 and 2 never touch the network; an invalid call costs no rate
//! limit capacity. Nothing is retried.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//!
//! let products = client.products.list(Some(&json!({"limit": 10}))).await?;
//! let product = client.products.get("5f1b2c...", None).await?;
//!
//! let created = client.products.create(&json!({"name": "Socks", "price": 9})).await?;
//! client.products.update(&json!({"id": created["id"], "price": 11})).await?;
//! client.products.delete(created["id"].clone()).await?;
//! ```

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::clients::{HttpMethod, HttpRequest, TransportError};
use crate::rest::context::ClientContext;
use crate::rest::descriptor::{ResourceDescriptor, ResourceOperation};
use crate::rest::errors::{value_kind, ResourceError, ValidationError};
use crate::rest::response::normalize;

/// A named backend collection with uniform CRUD operations.
///
/// Cloning is cheap; clones share the client context.
#[derive(Clone, Debug)]
pub struct Resource {
    descriptor: ResourceDescriptor,
    context: Arc<ClientContext>,
}

impl Resource {
    /// Binds a descriptor to a client context.
    #[must_use]
    pub const fn new(descriptor: ResourceDescriptor, context: Arc<ClientContext>) -> Self {
        Self {
            descriptor,
            context,
        }
    }

    /// Returns the descriptor.
    #[must_use]
    pub const fn descriptor(&self) -> &ResourceDescriptor {
        &self.descriptor
    }

    /// Returns the resource name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.descriptor.name()
    }

    /// Returns the shared client context.
    #[must_use]
    pub fn context(&self) -> &ClientContext {
        &self.context
    }

    /// Returns the collection URL, `{base}/{endpoint}`.
    #[must_use]
    pub fn collection_url(&self) -> String {
        self.context.url(self.descriptor.endpoint())
    }

    /// Returns the item URL, `{base}/{endpoint}/{id}`.
    ///
    /// The id is percent-encoded as a single path segment.
    #[must_use]
    pub fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), urlencoding::encode(id))
    }

    /// Lists the collection.
    ///
    /// `params` is sent as query parameters without inspection; pass filters,
    /// `limit`, `page`, `sort` or `expand` as the backend documents them.
    /// The backend answers with `{"count": ..., "results": [...]}`.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::TypeMismatch`] if `params` is not an object
    /// - [`ResourceError::Http`] / [`ResourceError::Transport`] from the request
    pub async fn list(&self, params: Option<&Value>) -> Result<Value, ResourceError> {
        let query = self.query_params(params)?;
        let request = self.request(HttpMethod::Get, self.collection_url(), query, None)?;
        self.execute(request).await
    }

    /// Retrieves one item by id (or slug, where the backend supports it).
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingId`] if `id` is null or empty
    /// - [`ResourceError::TypeMismatch`] if `id` is not a string, or `params`
    ///   is not an object
    /// - [`ResourceError::Http`] / [`ResourceError::Transport`] from the request
    pub async fn get(
        &self,
        id: impl Into<Value> + Send,
        params: Option<&Value>,
    ) -> Result<Value, ResourceError> {
        let id = self.require_id(&id.into(), ResourceOperation::Get)?;
        let query = self.query_params(params)?;
        let request = self.request(HttpMethod::Get, self.item_url(&id), query, None)?;
        self.execute(request).await
    }

    /// Creates a new item.
    ///
    /// Every required field of the descriptor must be present in `payload`;
    /// the first missing one, in declaration order, is reported.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::UnsupportedOperation`] if the resource is read-only
    /// - [`ValidationError::EmptyPayload`] if `payload` is null or `{}`
    /// - [`ResourceError::TypeMismatch`] if `payload` is not an object
    /// - [`ValidationError::MissingField`] if a required field is absent
    /// - [`ResourceError::Http`] / [`ResourceError::Transport`] from the request
    pub async fn create(&self, payload: &Value) -> Result<Value, ResourceError> {
        self.ensure_supported(ResourceOperation::Create)?;

        let body = self.require_payload(payload, ResourceOperation::Create)?;
        if let Some(field) = self.descriptor.first_missing_field(body) {
            return Err(ValidationError::MissingField {
                resource: self.name(),
                field,
            }
            .into());
        }

        let request = self.request(
            HttpMethod::Post,
            self.collection_url(),
            None,
            Some(payload.clone()),
        )?;
        self.execute(request).await
    }

    /// Updates an item; `payload["id"]` selects it and the whole payload is
    /// sent as the body.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::UnsupportedOperation`] if the resource is read-only
    /// - [`ValidationError::MissingId`] if the payload is empty or has no `id`
    /// - [`ResourceError::TypeMismatch`] if `payload` is not an object or its
    ///   `id` is not a string
    /// - [`ResourceError::Http`] / [`ResourceError::Transport`] from the request
    pub async fn update(&self, payload: &Value) -> Result<Value, ResourceError> {
        self.ensure_supported(ResourceOperation::Update)?;

        let body = match payload {
            Value::Null => None,
            Value::Object(map) => Some(map),
            other => return Err(self.type_mismatch("payload", "object", other)),
        };
        let Some(id) = body.and_then(|map| map.get("id")) else {
            return Err(self.missing_id(ResourceOperation::Update));
        };
        let id = self.require_id(id, ResourceOperation::Update)?;

        let request = self.request(
            HttpMethod::Put,
            self.item_url(&id),
            None,
            Some(payload.clone()),
        )?;
        self.execute(request).await
    }

    /// Deletes an item by id.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::UnsupportedOperation`] if the resource is read-only
    /// - [`ValidationError::MissingId`] if `id` is null or empty
    /// - [`ResourceError::TypeMismatch`] if `id` is not a string
    /// - [`ResourceError::Http`] / [`ResourceError::Transport`] from the request
    pub async fn delete(&self, id: impl Into<Value> + Send) -> Result<Value, ResourceError> {
        self.ensure_supported(ResourceOperation::Delete)?;
        let id = self.require_id(&id.into(), ResourceOperation::Delete)?;
        let request = self.request(HttpMethod::Delete, self.item_url(&id), None, None)?;
        self.execute(request).await
    }

    /// Waits for the rate limiter, sends `request` and normalizes the response.
    pub(crate) async fn execute(&self, request: HttpRequest) -> Result<Value, ResourceError> {
        self.context.rate_limiter().acquire().await;

        tracing::debug!(
            resource = self.name(),
            method = %request.http_method,
            url = %request.redacted_url(),
            "dispatching request"
        );

        let response = self.context.transport().send(request).await?;
        normalize(&response, self.context.observer())
    }

    /// Builds and verifies a request.
    pub(crate) fn request(
        &self,
        method: HttpMethod,
        url: String,
        query: Option<&Map<String, Value>>,
        body: Option<Value>,
    ) -> Result<HttpRequest, ResourceError> {
        let mut builder = HttpRequest::builder(method, url);
        if let Some(query) = query {
            builder = builder.query_params(query);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }
        builder
            .build()
            .map_err(|e| ResourceError::Transport(TransportError::from(e)))
    }

    /// Accepts a non-empty string id.
    pub(crate) fn require_id(
        &self,
        id: &Value,
        operation: ResourceOperation,
    ) -> Result<String, ResourceError> {
        match id {
            Value::Null => Err(self.missing_id(operation)),
            Value::String(s) if s.is_empty() => Err(self.missing_id(operation)),
            Value::String(s) => Ok(s.clone()),
            other => Err(self.type_mismatch("id", "string", other)),
        }
    }

    /// Accepts absent, null, or object params.
    pub(crate) fn query_params<'a>(
        &self,
        params: Option<&'a Value>,
    ) -> Result<Option<&'a Map<String, Value>>, ResourceError> {
        match params {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(other) => Err(self.type_mismatch("params", "object", other)),
        }
    }

    /// Fails if the descriptor disables `operation`.
    pub(crate) fn ensure_supported(
        &self,
        operation: ResourceOperation,
    ) -> Result<(), ResourceError> {
        if self.descriptor.supports(operation) {
            Ok(())
        } else {
            Err(ResourceError::UnsupportedOperation {
                resource: self.name(),
                operation,
            })
        }
    }

    fn require_payload<'a>(
        &self,
        payload: &'a Value,
        operation: ResourceOperation,
    ) -> Result<&'a Map<String, Value>, ResourceError> {
        match payload {
            Value::Object(map) if !map.is_empty() => Ok(map),
            Value::Null | Value::Object(_) => Err(ValidationError::EmptyPayload {
                resource: self.name(),
                operation,
            }
            .into()),
            other => Err(self.type_mismatch("payload", "object", other)),
        }
    }

    fn missing_id(&self, operation: ResourceOperation) -> ResourceError {
        ValidationError::MissingId {
            resource: self.name(),
            operation,
        }
        .into()
    }

    fn type_mismatch(
        &self,
        field: &'static str,
        expected: &'static str,
        found: &Value,
    ) -> ResourceError {
        ResourceError::TypeMismatch {
            resource: self.name(),
            field,
            expected,
            found: value_kind(found),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpResponse, Transport, Unlimited};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct Recording {
        requests: Mutex<Vec<HttpRequest>>,
    }

    #[async_trait]
    impl Transport for Recording {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            let response = HttpResponse::new(
                request.http_method,
                request.url.clone(),
                200,
                Some("OK".to_string()),
                r#"{"id": "abc"}"#,
            );
            self.requests.lock().unwrap().push(request);
            Ok(response)
        }
    }

    fn resource(descriptor: ResourceDescriptor) -> (Resource, Arc<Recording>) {
        let transport = Arc::new(Recording::default());
        let context = ClientContext::new(
            "https://s:k@api.swell.store",
            transport.clone(),
            Arc::new(Unlimited),
        );
        (Resource::new(descriptor, Arc::new(context)), transport)
    }

    fn accounts() -> (Resource, Arc<Recording>) {
        resource(ResourceDescriptor::new("accounts").with_required_fields(&["email"]))
    }

    #[test]
    fn test_urls() {
        let (cards, _) = resource(ResourceDescriptor::new("cards").with_endpoint("accounts:cards"));
        assert_eq!(
            cards.collection_url(),
            "https://s:k@api.swell.store/accounts:cards"
        );
        assert_eq!(
            cards.item_url("abc123"),
            "https://s:k@api.swell.store/accounts:cards/abc123"
        );
        assert_eq!(
            cards.item_url("a b/c"),
            "https://s:k@api.swell.store/accounts:cards/a%20b%2Fc"
        );
    }

    #[tokio::test]
    async fn test_create_reports_first_missing_field() {
        let (accounts, transport) = accounts();

        let error = accounts.create(&json!({"first_name": "Ada"})).await.unwrap_err();

        assert!(matches!(
            error,
            ResourceError::Validation(ValidationError::MissingField {
                resource: "accounts",
                field: "email"
            })
        ));
        assert!(transport.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_empty_and_non_object_payloads() {
        let (accounts, transport) = accounts();

        for payload in [json!({}), Value::Null] {
            let error = accounts.create(&payload).await.unwrap_err();
            assert!(matches!(
                error,
                ResourceError::Validation(ValidationError::EmptyPayload { .. })
            ));
        }

        let error = accounts.create(&json!(["email"])).await.unwrap_err();
        assert!(matches!(
            error,
            ResourceError::TypeMismatch {
                field: "payload",
                found: "array",
                ..
            }
        ));
        assert!(transport.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_posts_payload_to_collection() {
        let (accounts, transport) = accounts();
        let payload = json!({"email": "ada@example.com", "first_name": "Ada"});

        accounts.create(&payload).await.unwrap();

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].http_method, HttpMethod::Post);
        assert_eq!(requests[0].url, "https://s:k@api.swell.store/accounts");
        assert_eq!(requests[0].body.as_ref(), Some(&payload));
    }

    #[tokio::test]
    async fn test_id_must_be_a_non_empty_string() {
        let (accounts, transport) = accounts();

        let error = accounts.get(123, None).await.unwrap_err();
        assert!(matches!(
            error,
            ResourceError::TypeMismatch {
                field: "id",
                expected: "string",
                found: "number",
                ..
            }
        ));

        let error = accounts.delete("").await.unwrap_err();
        assert!(matches!(
            error,
            ResourceError::Validation(ValidationError::MissingId {
                operation: ResourceOperation::Delete,
                ..
            })
        ));

        let error = accounts.get(Value::Null, None).await.unwrap_err();
        assert!(matches!(
            error,
            ResourceError::Validation(ValidationError::MissingId { .. })
        ));

        assert!(transport.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_requires_string_id_in_payload() {
        let (accounts, transport) = accounts();

        let error = accounts.update(&json!({"name": "x"})).await.unwrap_err();
        assert!(matches!(
            error,
            ResourceError::Validation(ValidationError::MissingId {
                operation: ResourceOperation::Update,
                ..
            })
        ));

        let error = accounts.update(&json!({})).await.unwrap_err();
        assert!(matches!(
            error,
            ResourceError::Validation(ValidationError::MissingId { .. })
        ));

        let error = accounts.update(&json!({"id": 7})).await.unwrap_err();
        assert!(matches!(error, ResourceError::TypeMismatch { field: "id", .. }));

        assert!(transport.requests.lock().unwrap().is_empty());

        accounts
            .update(&json!({"id": "abc", "first_name": "Ada"}))
            .await
            .unwrap();
        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].http_method, HttpMethod::Put);
        assert_eq!(requests[0].url, "https://s:k@api.swell.store/accounts/abc");
    }

    #[tokio::test]
    async fn test_list_rejects_non_object_params() {
        let (accounts, transport) = accounts();

        let error = accounts.list(Some(&json!("limit=1"))).await.unwrap_err();
        assert!(matches!(
            error,
            ResourceError::TypeMismatch {
                field: "params",
                found: "string",
                ..
            }
        ));
        assert!(transport.requests.lock().unwrap().is_empty());

        accounts.list(Some(&Value::Null)).await.unwrap();
        assert!(transport.requests.lock().unwrap()[0].query.is_empty());
    }

    #[tokio::test]
    async fn test_read_only_rejects_writes_regardless_of_arguments() {
        let (events, transport) = resource(ResourceDescriptor::new("events").read_only());

        for result in [
            events.create(&json!({"type": "x"})).await,
            events.create(&Value::Null).await,
            events.update(&json!({"id": "abc"})).await,
            events.delete("abc").await,
            events.delete(42).await,
        ] {
            assert!(matches!(
                result,
                Err(ResourceError::UnsupportedOperation {
                    resource: "events",
                    ..
                })
            ));
        }
        assert!(transport.requests.lock().unwrap().is_empty());

        events.list(None).await.unwrap();
        events.get("abc", None).await.unwrap();
        assert_eq!(transport.requests.lock().unwrap().len(), 2);
    }
}
