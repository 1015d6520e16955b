//! Gift cards and their debits.

use std::ops::Deref;
use std::sync::Arc;

use crate::rest::resources::descriptors::{GIFTCARDS, GIFTCARD_DEBITS};
use crate::rest::{ClientContext, Resource};

/// Gift cards; dereferences to the `giftcards` [`Resource`].
#[derive(Clone, Debug)]
pub struct Giftcards {
    resource: Resource,
    /// Balance debits (`giftcards:debits`).
    pub debits: Resource,
}

impl Giftcards {
    pub(crate) fn new(context: &Arc<ClientContext>) -> Self {
        Self {
            resource: Resource::new(GIFTCARDS, Arc::clone(context)),
            debits: Resource::new(GIFTCARD_DEBITS, Arc::clone(context)),
        }
    }
}

impl Deref for Giftcards {
    type Target = Resource;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}
