//! Webhooks.
//!
//! Webhooks notify an external URL about store events. Deliveries are
//! themselves recorded as events under the `events:webhooks` namespace,
//! which [`Webhooks::list_events`] reads.

use std::ops::Deref;
use std::sync::Arc;

use serde_json::Value;

use crate::clients::HttpMethod;
use crate::rest::resources::descriptors::WEBHOOKS;
use crate::rest::{ClientContext, Resource, ResourceError};

/// Endpoint listing webhook delivery events.
pub const WEBHOOK_EVENTS_ENDPOINT: &str = "events:webhooks";

/// The `webhooks` collection.
#[derive(Clone, Debug)]
pub struct Webhooks {
    resource: Resource,
}

impl Webhooks {
    pub(crate) fn new(context: &Arc<ClientContext>) -> Self {
        Self {
            resource: Resource::new(WEBHOOKS, Arc::clone(context)),
        }
    }

    /// Lists webhook delivery events, filtered by `params`.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::TypeMismatch`] if `params` is not an object
    /// - [`ResourceError::Http`] / [`ResourceError::Transport`] from the request
    pub async fn list_events(&self, params: Option<&Value>) -> Result<Value, ResourceError> {
        let query = self.resource.query_params(params)?;
        let url = self.resource.context().url(WEBHOOK_EVENTS_ENDPOINT);
        let request = self.resource.request(HttpMethod::Get, url, query, None)?;
        self.resource.execute(request).await
    }
}

impl Deref for Webhooks {
    type Target = Resource;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}
