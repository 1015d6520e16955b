//! Coupons, code generations and coupon uses.

use std::ops::Deref;
use std::sync::Arc;

use crate::rest::resources::descriptors::{COUPONS, COUPON_GENERATIONS, COUPON_USES};
use crate::rest::{ClientContext, Resource};

/// The `coupons` collection with its sub-resources.
///
/// Dereferences to the parent [`Resource`], so `coupons.list(None)` works directly.
#[derive(Clone, Debug)]
pub struct Coupons {
    resource: Resource,
    /// Bulk code generations (`coupons:generations`).
    pub generations: Resource,
    /// Recorded coupon uses (`coupons:uses`).
    pub uses: Resource,
}

impl Coupons {
    pub(crate) fn new(context: &Arc<ClientContext>) -> Self {
        Self {
            resource: Resource::new(COUPONS, Arc::clone(context)),
            generations: Resource::new(COUPON_GENERATIONS, Arc::clone(context)),
            uses: Resource::new(COUPON_USES, Arc::clone(context)),
        }
    }
}

impl Deref for Coupons {
    type Target = Resource;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}
