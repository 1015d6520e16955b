//! Orders.
//!
//! Besides the standard operations, an order can be produced from a staged
//! cart with [`Orders::convert_cart_to_order`].

use std::ops::Deref;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::clients::HttpMethod;
use crate::rest::resources::descriptors::ORDERS;
use crate::rest::{ClientContext, Resource, ResourceError, ResourceOperation};

/// The `orders` collection.
#[derive(Clone, Debug)]
pub struct Orders {
    resource: Resource,
}

impl Orders {
    pub(crate) fn new(context: &Arc<ClientContext>) -> Self {
        Self {
            resource: Resource::new(ORDERS, Arc::clone(context)),
        }
    }

    /// Converts a cart into an order.
    ///
    /// Sends `POST {base}/orders?cart_id={cart_id}` with an empty JSON
    /// object as the body. The backend rejects carts that are missing
    /// required order properties or reference out-of-stock products; that
    /// surfaces as [`ResourceError::Http`].
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingId`](crate::rest::ValidationError::MissingId)
    ///   if `cart_id` is null or empty
    /// - [`ResourceError::TypeMismatch`] if `cart_id` is not a string
    /// - [`ResourceError::Http`] / [`ResourceError::Transport`] from the request
    pub async fn convert_cart_to_order(
        &self,
        cart_id: impl Into<Value> + Send,
    ) -> Result<Value, ResourceError> {
        let cart_id = self
            .resource
            .require_id(&cart_id.into(), ResourceOperation::Create)?;

        let query = json!({ "cart_id": cart_id });
        let request = self.resource.request(
            HttpMethod::Post,
            self.resource.collection_url(),
            query.as_object(),
            Some(json!({})),
        )?;
        self.resource.execute(request).await
    }
}

impl Deref for Orders {
    type Target = Resource;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}
