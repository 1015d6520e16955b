//! Customer accounts.
//!
//! Accounts expose their addresses, saved cards and store credits as
//! sub-resources, e.g. `client.accounts.cards.list(None)`.

use std::ops::Deref;
use std::sync::Arc;

use crate::rest::resources::descriptors::{
    ACCOUNTS, ACCOUNT_ADDRESSES, ACCOUNT_CARDS, ACCOUNT_CREDITS,
};
use crate::rest::{ClientContext, Resource};

/// The `accounts` collection with its sub-resources.
///
/// Dereferences to the parent [`Resource`], so `accounts.list(None)` works directly.
#[derive(Clone, Debug)]
pub struct Accounts {
    resource: Resource,
    /// Shipping and billing addresses (`accounts:addresses`).
    pub addresses: Resource,
    /// Saved payment cards (`accounts:cards`).
    pub cards: Resource,
    /// Store credit entries (`accounts:credits`).
    pub credits: Resource,
}

impl Accounts {
    pub(crate) fn new(context: &Arc<ClientContext>) -> Self {
        Self {
            resource: Resource::new(ACCOUNTS, Arc::clone(context)),
            addresses: Resource::new(ACCOUNT_ADDRESSES, Arc::clone(context)),
            cards: Resource::new(ACCOUNT_CARDS, Arc::clone(context)),
            credits: Resource::new(ACCOUNT_CREDITS, Arc::clone(context)),
        }
    }
}

impl Deref for Accounts {
    type Target = Resource;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}
