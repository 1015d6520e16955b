//! The Swell backend client.

use std::fmt;
use std::sync::Arc;

use crate::clients::{redact_url, Transport};
use crate::config::{ApiKey, StoreId, SwellConfig};
use crate::error::ConfigError;
use crate::rest::resources::{
    descriptors, Accounts, Coupons, Giftcards, Orders, Payments, Products, Promotions, Webhooks,
};
use crate::rest::{ClientContext, Resource};

/// Client for the Swell backend API.
///
/// Every resource is a public member. Sub-resources are reachable both
/// through their parent (`client.accounts.cards`) and through a flat alias
/// (`client.cards`). All members share one [`ClientContext`], so they share
/// one rate limiter.
///
/// # Example
///
/// ```rust,ignore
/// use serde_json::json;
/// use swell_api::Swell;
///
/// let client = Swell::from_credentials("my-store", "sk_live_...")?;
///
/// let products = client.products.list(Some(&json!({"limit": 10}))).await?;
/// let cart = client.carts.get("5f1b...", Some(&json!({"expand": ["items"]}))).await?;
/// let order = client.orders.convert_cart_to_order("5f1b...").await?;
/// ```
#[derive(Clone)]
pub struct Swell {
    context: Arc<ClientContext>,

    /// Customer accounts.
    pub accounts: Accounts,
    /// Alias of `accounts.addresses`.
    pub addresses: Resource,
    /// Alias of `accounts.cards`.
    pub cards: Resource,
    /// Alias of `accounts.credits`.
    pub credits: Resource,
    /// Custom product attributes.
    pub attributes: Resource,
    /// Shopping carts.
    pub carts: Resource,
    /// Product categories.
    pub categories: Resource,
    /// Coupons.
    pub coupons: Coupons,
    /// Alias of `coupons.generations`.
    pub coupon_generations: Resource,
    /// Alias of `coupons.uses`.
    pub coupon_uses: Resource,
    /// Store events; read-only.
    pub events: Resource,
    /// Gift cards.
    pub giftcards: Giftcards,
    /// Alias of `giftcards.debits`.
    pub debits: Resource,
    /// Invoices.
    pub invoices: Resource,
    /// Orders.
    pub orders: Orders,
    /// Payments.
    pub payments: Payments,
    /// Alias of `payments.refunds`.
    pub refunds: Resource,
    /// Products.
    pub products: Products,
    /// Alias of `products.stock`.
    pub stock: Resource,
    /// Alias of `products.variants`.
    pub variants: Resource,
    /// Promotions.
    pub promotions: Promotions,
    /// Alias of `promotions.uses`.
    pub promotion_uses: Resource,
    /// Purchase links.
    pub purchase_links: Resource,
    /// Returns.
    pub returns: Resource,
    /// Shipments.
    pub shipments: Resource,
    /// Subscriptions.
    pub subscriptions: Resource,
    /// Webhooks.
    pub webhooks: Webhooks,
}

// Verify Swell is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Swell>();
};

impl Swell {
    /// Creates a client with the default `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the HTTP client cannot be built.
    pub fn new(config: &SwellConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_context(ClientContext::from_config(config)?))
    }

    /// Creates a client from a store id and secret key with default options.
    ///
    /// No request is made; credentials are only checked for emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStoreId`] or [`ConfigError::EmptyApiKey`]
    /// for blank credentials.
    ///
    /// # Example
    ///
    /// ```rust
    /// use swell_api::{ConfigError, Swell};
    ///
    /// assert!(Swell::from_credentials("my-store", "secret").is_ok());
    /// assert!(matches!(
    ///     Swell::from_credentials("my-store", ""),
    ///     Err(ConfigError::EmptyApiKey)
    /// ));
    /// ```
    pub fn from_credentials(
        store_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = SwellConfig::builder()
            .store_id(StoreId::new(store_id)?)
            .api_key(ApiKey::new(api_key)?)
            .build()?;
        Self::new(&config)
    }

    /// Creates a client configured from `SWELL_*` environment variables.
    ///
    /// # Errors
    ///
    /// See [`SwellConfig::from_env`] and [`Swell::new`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(&SwellConfig::from_env()?)
    }

    /// Creates a client that sends through `transport`.
    ///
    /// The configured rate limit still applies.
    #[must_use]
    pub fn with_transport(config: &SwellConfig, transport: Arc<dyn Transport>) -> Self {
        Self::from_context(ClientContext::with_transport(config, transport))
    }

    /// Creates a client over a fully assembled context.
    #[must_use]
    pub fn from_context(context: ClientContext) -> Self {
        let context = Arc::new(context);
        tracing::debug!(base_url = %redact_url(context.base_url()), "swell client created");

        let accounts = Accounts::new(&context);
        let coupons = Coupons::new(&context);
        let giftcards = Giftcards::new(&context);
        let payments = Payments::new(&context);
        let products = Products::new(&context);
        let promotions = Promotions::new(&context);
        let resource = |descriptor| Resource::new(descriptor, Arc::clone(&context));

        Self {
            addresses: accounts.addresses.clone(),
            cards: accounts.cards.clone(),
            credits: accounts.credits.clone(),
            attributes: resource(descriptors::ATTRIBUTES),
            carts: resource(descriptors::CARTS),
            categories: resource(descriptors::CATEGORIES),
            coupon_generations: coupons.generations.clone(),
            coupon_uses: coupons.uses.clone(),
            events: resource(descriptors::EVENTS),
            debits: giftcards.debits.clone(),
            invoices: resource(descriptors::INVOICES),
            orders: Orders::new(&context),
            refunds: payments.refunds.clone(),
            stock: products.stock.clone(),
            variants: products.variants.clone(),
            promotion_uses: promotions.uses.clone(),
            purchase_links: resource(descriptors::PURCHASE_LINKS),
            returns: resource(descriptors::RETURNS),
            shipments: resource(descriptors::SHIPMENTS),
            subscriptions: resource(descriptors::SUBSCRIPTIONS),
            webhooks: Webhooks::new(&context),
            accounts,
            coupons,
            giftcards,
            payments,
            products,
            promotions,
            context,
        }
    }

    /// Returns a resource by its member name, e.g. `"purchase_links"`.
    ///
    /// Handy for generic tooling; the typed members are preferable otherwise.
    #[must_use]
    pub fn resource(&self, member: &str) -> Option<Resource> {
        descriptors::lookup(member)
            .map(|descriptor| Resource::new(descriptor, Arc::clone(&self.context)))
    }

    /// Returns the shared client context.
    #[must_use]
    pub fn context(&self) -> &ClientContext {
        &self.context
    }
}

impl fmt::Debug for Swell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Swell")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}
