//! Integration tests for the resource operation core.
//!
//! These tests drive the public client against an in-process transport that
//! records every request, verifying validation, URL building, and the
//! number of network calls each operation makes.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use swell_api::clients::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError, Unlimited};
use swell_api::rest::resources::descriptors;
use swell_api::{ClientContext, ResourceError, ResourceOperation, Swell, ValidationError};

const BASE_URL: &str = "https://s:k@api.swell.store";

/// A transport that records requests and replays queued responses.
///
/// When the queue is empty it answers `200 {}`.
#[derive(Debug, Default)]
struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    replies: Mutex<VecDeque<Reply>>,
}

#[derive(Debug)]
enum Reply {
    Status(u16, Option<&'static str>, &'static str),
    Nothing,
}

impl RecordingTransport {
    fn reply(&self, reply: Reply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn last(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Reply::Status(200, Some("OK"), "{}"));

        match reply {
            Reply::Status(code, reason, body) => Ok(HttpResponse::new(
                request.http_method,
                request.url,
                code,
                reason.map(String::from),
                body,
            )),
            Reply::Nothing => Err(TransportError::NoResponse {
                method: request.http_method,
                url: request.redacted_url().into_owned(),
            }),
        }
    }
}

fn client() -> (Swell, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::default());
    let context = ClientContext::new(BASE_URL, transport.clone(), Arc::new(Unlimited));
    (Swell::from_context(context), transport)
}

// ============================================================================
// Create Validation
// ============================================================================

#[tokio::test]
async fn test_create_with_empty_payload_names_email_and_sends_nothing() {
    let (client, transport) = client();

    let error = client.accounts.create(&json!({})).await.unwrap_err();
    assert!(matches!(
        error,
        ResourceError::Validation(ValidationError::EmptyPayload { .. })
    ));

    let error = client
        .accounts
        .create(&json!({"first_name": "Ada"}))
        .await
        .unwrap_err();
    assert!(error.to_string().contains("email"));
    assert!(error.is_local());

    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_create_fails_iff_a_required_field_is_absent() {
    for (member, descriptor) in descriptors::ALL {
        let fields = descriptor.required_fields();
        if fields.is_empty() || *member == "events" {
            continue;
        }
        let (client, transport) = client();
        let resource = client.resource(member).unwrap();

        let mut complete = serde_json::Map::new();
        for field in fields {
            complete.insert((*field).to_string(), json!("value"));
        }
        complete.insert("extra".to_string(), json!(true));

        for skipped in fields.iter() {
            let mut partial = complete.clone();
            partial.remove(*skipped);
            if partial.is_empty() {
                continue;
            }
            let error = resource.create(&Value::Object(partial)).await.unwrap_err();
            match error {
                ResourceError::Validation(ValidationError::MissingField { field, .. }) => {
                    assert_eq!(field, *skipped, "{member}");
                }
                other => panic!("{member}: expected MissingField, got {other:?}"),
            }
        }
        assert_eq!(transport.calls(), 0, "{member}");

        resource.create(&Value::Object(complete)).await.unwrap();
        assert_eq!(transport.calls(), 1, "{member}");
        assert_eq!(transport.last().http_method, HttpMethod::Post);
        assert_eq!(transport.last().url, resource.collection_url());
    }
}

#[tokio::test]
async fn test_resources_without_required_fields_accept_any_non_empty_payload() {
    let (client, transport) = client();

    client.carts.create(&json!({"currency": "USD"})).await.unwrap();
    client.orders.create(&json!({"items": []})).await.unwrap();

    assert_eq!(transport.calls(), 2);
}

// ============================================================================
// Id Validation
// ============================================================================

#[tokio::test]
async fn test_non_string_id_is_a_type_mismatch_before_any_call() {
    let (client, transport) = client();

    for result in [
        client.products.get(123, None).await,
        client.products.delete(123).await,
        client.products.update(&json!({"id": 123})).await,
        client.orders.convert_cart_to_order(123).await,
        client.cards.get(json!(["a"]), None).await,
    ] {
        assert!(
            matches!(
                result,
                Err(ResourceError::TypeMismatch {
                    field: "id",
                    expected: "string",
                    ..
                })
            ),
            "{result:?}"
        );
    }

    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_update_id_rules() {
    let (client, transport) = client();

    let error = client
        .products
        .update(&json!({"name": "Socks"}))
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        ResourceError::Validation(ValidationError::MissingId {
            operation: ResourceOperation::Update,
            ..
        })
    ));
    assert_eq!(transport.calls(), 0);

    let payload = json!({"id": "p1", "name": "Socks"});
    client.products.update(&payload).await.unwrap();

    let request = transport.last();
    assert_eq!(request.http_method, HttpMethod::Put);
    assert_eq!(request.url, format!("{BASE_URL}/products/p1"));
    assert_eq!(request.body, Some(payload));
}

// ============================================================================
// Request Shape
// ============================================================================

#[tokio::test]
async fn test_list_without_params_hits_bare_collection() {
    let (client, transport) = client();

    client.products.list(None).await.unwrap();

    let request = transport.last();
    assert_eq!(request.http_method, HttpMethod::Get);
    assert_eq!(request.url, format!("{BASE_URL}/products"));
    assert!(request.query.is_empty());
    assert!(request.body.is_none());
}

#[tokio::test]
async fn test_list_forwards_limit_unchanged() {
    let (client, transport) = client();

    client.products.list(Some(&json!({"limit": 1}))).await.unwrap();

    assert_eq!(
        transport.last().query,
        vec![("limit".to_string(), "1".to_string())]
    );
}

#[tokio::test]
async fn test_get_forwards_params() {
    let (client, transport) = client();

    client
        .carts
        .get("c1", Some(&json!({"expand": ["items", "account"]})))
        .await
        .unwrap();

    let request = transport.last();
    assert_eq!(request.url, format!("{BASE_URL}/carts/c1"));
    assert_eq!(
        request.query,
        vec![
            ("expand".to_string(), "items".to_string()),
            ("expand".to_string(), "account".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_delete_sends_one_bodyless_request() {
    let (client, transport) = client();

    client.products.delete("abc123").await.unwrap();

    assert_eq!(transport.calls(), 1);
    let request = transport.last();
    assert_eq!(request.http_method, HttpMethod::Delete);
    assert_eq!(request.url, format!("{BASE_URL}/products/abc123"));
    assert!(request.body.is_none());
}

#[tokio::test]
async fn test_parent_and_alias_build_identical_requests() {
    let (client, transport) = client();

    client.accounts.cards.get("card1", None).await.unwrap();
    let nested = transport.last();
    client.cards.get("card1", None).await.unwrap();
    let flat = transport.last();

    assert_eq!(nested, flat);
    assert_eq!(nested.url, format!("{BASE_URL}/accounts:cards/card1"));
}

#[tokio::test]
async fn test_convert_cart_to_order() {
    let (client, transport) = client();

    client.orders.convert_cart_to_order("cart1").await.unwrap();

    let request = transport.last();
    assert_eq!(request.http_method, HttpMethod::Post);
    assert_eq!(request.url, format!("{BASE_URL}/orders"));
    assert_eq!(
        request.query,
        vec![("cart_id".to_string(), "cart1".to_string())]
    );
    assert_eq!(request.body, Some(json!({})));

    let error = client.orders.convert_cart_to_order("").await.unwrap_err();
    assert!(matches!(
        error,
        ResourceError::Validation(ValidationError::MissingId { .. })
    ));
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn test_webhooks_list_events() {
    let (client, transport) = client();

    client
        .webhooks
        .list_events(Some(&json!({"limit": 5})))
        .await
        .unwrap();

    let request = transport.last();
    assert_eq!(request.url, format!("{BASE_URL}/events:webhooks"));
    assert_eq!(request.query, vec![("limit".to_string(), "5".to_string())]);

    client.webhooks.list(None).await.unwrap();
    assert_eq!(transport.last().url, format!("{BASE_URL}/:webhooks"));
}

// ============================================================================
// Read-only Resources
// ============================================================================

#[tokio::test]
async fn test_events_reject_writes_but_allow_reads() {
    let (client, transport) = client();

    for result in [
        client.events.create(&json!({"type": "order.created"})).await,
        client.events.update(&json!({"id": "e1"})).await,
        client.events.delete("e1").await,
    ] {
        assert!(matches!(
            result,
            Err(ResourceError::UnsupportedOperation {
                resource: "events",
                ..
            })
        ));
    }
    assert_eq!(transport.calls(), 0);

    client.events.list(Some(&json!({"limit": 1}))).await.unwrap();
    client.events.get("e1", None).await.unwrap();
    assert_eq!(transport.calls(), 2);
}

// ============================================================================
// Response Handling
// ============================================================================

#[tokio::test]
async fn test_status_400_is_an_http_error_regardless_of_body() {
    let (client, transport) = client();
    transport.reply(Reply::Status(
        400,
        Some("Bad Request"),
        r#"{"count": 0, "results": []}"#,
    ));

    let error = client.products.list(None).await.unwrap_err();

    assert_eq!(error.status(), Some(400));
    assert_eq!(error.to_string(), "HTTP Error 400: Bad Request");
}

#[tokio::test]
async fn test_missing_response_is_a_transport_error() {
    let (client, transport) = client();
    transport.reply(Reply::Nothing);

    let error = client.products.get("p1", None).await.unwrap_err();

    assert!(matches!(
        error,
        ResourceError::Transport(TransportError::NoResponse {
            method: HttpMethod::Get,
            ..
        })
    ));
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn test_errors_key_is_returned_not_raised() {
    let (client, transport) = client();
    transport.reply(Reply::Status(
        200,
        Some("OK"),
        r#"{"errors": {"email": {"code": "UNIQUE", "message": "Already exists"}}}"#,
    ));

    let payload = client
        .accounts
        .create(&json!({"email": "ada@example.com"}))
        .await
        .unwrap();

    assert_eq!(payload["errors"]["email"]["code"], "UNIQUE");
}

#[tokio::test]
async fn test_unparseable_success_body_is_an_empty_object() {
    let (client, transport) = client();
    transport.reply(Reply::Status(200, Some("OK"), "not json"));

    let payload = client.products.list(None).await.unwrap();

    assert_eq!(payload, json!({}));
}
