//! Products.
//!
//! Stock adjustments need `parent_id`, `quantity` and a `message` explaining
//! the change.

use std::ops::Deref;
use std::sync::Arc;

use crate::rest::resources::descriptors::{PRODUCTS, PRODUCT_STOCK, PRODUCT_VARIANTS};
use crate::rest::{ClientContext, Resource};

/// The `products` collection with its sub-resources.
///
/// Dereferences to the parent [`Resource`], so `products.list(None)` works directly.
#[derive(Clone, Debug)]
pub struct Products {
    resource: Resource,
    /// Stock adjustments (`products:stock`).
    pub stock: Resource,
    /// Variants (`products:variants`).
    pub variants: Resource,
}

impl Products {
    pub(crate) fn new(context: &Arc<ClientContext>) -> Self {
        Self {
            resource: Resource::new(PRODUCTS, Arc::clone(context)),
            stock: Resource::new(PRODUCT_STOCK, Arc::clone(context)),
            variants: Resource::new(PRODUCT_VARIANTS, Arc::clone(context)),
        }
    }
}

impl Deref for Products {
    type Target = Resource;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}
