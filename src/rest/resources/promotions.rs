//! Promotions and promotion uses.

use std::ops::Deref;
use std::sync::Arc;

use crate::rest::resources::descriptors::{PROMOTIONS, PROMOTION_USES};
use crate::rest::{ClientContext, Resource};

/// The `promotions` collection.
#[derive(Clone, Debug)]
pub struct Promotions {
    resource: Resource,
    /// Recorded promotion uses (`promotions:uses`).
    pub uses: Resource,
}

impl Promotions {
    pub(crate) fn new(context: &Arc<ClientContext>) -> Self {
        Self {
            resource: Resource::new(PROMOTIONS, Arc::clone(context)),
            uses: Resource::new(PROMOTION_USES, Arc::clone(context)),
        }
    }
}

impl Deref for Promotions {
    type Target = Resource;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}
