//! Payments and refunds.

use std::ops::Deref;
use std::sync::Arc;

use crate::rest::resources::descriptors::{PAYMENTS, PAYMENT_REFUNDS};
use crate::rest::{ClientContext, Resource};

/// The `payments` collection and its refunds.
#[derive(Clone, Debug)]
pub struct Payments {
    resource: Resource,
    /// Refunds against a payment (`payments:refunds`).
    pub refunds: Resource,
}

impl Payments {
    pub(crate) fn new(context: &Arc<ClientContext>) -> Self {
        Self {
            resource: Resource::new(PAYMENTS, Arc::clone(context)),
            refunds: Resource::new(PAYMENT_REFUNDS, Arc::clone(context)),
        }
    }
}

impl Deref for Payments {
    type Target = Resource;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}
