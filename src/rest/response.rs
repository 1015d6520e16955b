//! Response normalization.
//!
//! Turns a raw [`HttpResponse`] into the JSON payload handed back to callers.
//!
//! # Rules
//!
//! - A non-2xx status fails with [`ResourceError::Http`] regardless of the body.
//! - A 2xx body that is not valid JSON (including an empty body) becomes `{}`.
//! - A 2xx body that is valid JSON but not an object (`null`, an array, a
//!   scalar) is returned as parsed.
//! - A 2xx payload with an `errors` key is returned unchanged; the observer
//!   is told about it, but no error is raised.
//!
//! A missing response never reaches this module; the transport reports it
//! as [`TransportError::NoResponse`](crate::clients::TransportError::NoResponse).

use serde_json::{Map, Value};

use crate::clients::{HttpResponse, HttpResponseError};
use crate::rest::errors::ResourceError;
use crate::rest::observer::Observer;

/// Normalizes a raw response into a JSON payload.
///
/// # Errors
///
/// Returns [`ResourceError::Http`] if the status code is outside 2xx.
///
/// # Example
///
/// ```rust
/// use swell_api::clients::{HttpMethod, HttpResponse};
/// use swell_api::rest::{normalize, TracingObserver};
///
/// let response = HttpResponse::new(
///     HttpMethod::Get,
///     "https://s:k@api.swell.store/products",
///     200,
///     Some("OK".to_string()),
///     r#"{"count": 0, "results": []}"#,
/// );
///
/// let payload = normalize(&response, &TracingObserver).unwrap();
/// assert_eq!(payload["count"], 0);
/// ```
pub fn normalize(response: &HttpResponse, observer: &dyn Observer) -> Result<Value, ResourceError> {
    observer.response_received(response);

    if !response.is_ok() {
        return Err(HttpResponseError {
            code: response.code,
            reason: response.reason_phrase().to_string(),
            method: response.method,
            url: response.redacted_url().into_owned(),
        }
        .into());
    }

    let payload = match serde_json::from_str::<Value>(&response.body) {
        Ok(payload) => payload,
        Err(e) => {
            observer.unparseable_body(response, &e);
            Value::Object(Map::new())
        }
    };

    if let Some(errors) = payload.get("errors") {
        observer.application_errors(response, errors);
    }

    Ok(payload)
}
