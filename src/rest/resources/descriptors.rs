//! The resource table.
//!
//! One descriptor per backend collection. Sub-resource endpoints use the
//! backend's `parent:child` form and require `parent_id` on create.

use crate::rest::descriptor::ResourceDescriptor;

pub const ACCOUNTS: ResourceDescriptor =
    ResourceDescriptor::new("accounts").with_required_fields(&["email"]);

pub const ACCOUNT_ADDRESSES: ResourceDescriptor = ResourceDescriptor::new("addresses")
    .with_endpoint("accounts:addresses")
    .with_required_fields(&["parent_id", "address1"]);

pub const ACCOUNT_CARDS: ResourceDescriptor = ResourceDescriptor::new("cards")
    .with_endpoint("accounts:cards")
    .with_required_fields(&["parent_id", "token"]);

pub const ACCOUNT_CREDITS: ResourceDescriptor = ResourceDescriptor::new("credits")
    .with_endpoint("accounts:credits")
    .with_required_fields(&["parent_id", "amount"]);

pub const ATTRIBUTES: ResourceDescriptor =
    ResourceDescriptor::new("attributes").with_required_fields(&["name"]);

pub const CARTS: ResourceDescriptor = ResourceDescriptor::new("carts");

pub const CATEGORIES: ResourceDescriptor =
    ResourceDescriptor::new("categories").with_required_fields(&["name"]);

pub const COUPONS: ResourceDescriptor =
    ResourceDescriptor::new("coupons").with_required_fields(&["discounts", "name", "codes"]);

pub const COUPON_GENERATIONS: ResourceDescriptor = ResourceDescriptor::new("generations")
    .with_endpoint("coupons:generations")
    .with_required_fields(&["parent_id", "count"]);

pub const COUPON_USES: ResourceDescriptor = ResourceDescriptor::new("uses")
    .with_endpoint("coupons:uses")
    .with_required_fields(&["parent_id", "code", "code_id"]);

pub const EVENTS: ResourceDescriptor = ResourceDescriptor::new("events").read_only();

pub const GIFTCARDS: ResourceDescriptor =
    ResourceDescriptor::new("giftcards").with_required_fields(&["amount"]);

pub const GIFTCARD_DEBITS: ResourceDescriptor = ResourceDescriptor::new("debits")
    .with_endpoint("giftcards:debits")
    .with_required_fields(&["parent_id", "amount"]);

pub const INVOICES: ResourceDescriptor = ResourceDescriptor::new("invoices");

pub const ORDERS: ResourceDescriptor = ResourceDescriptor::new("orders");

pub const PAYMENTS: ResourceDescriptor =
    ResourceDescriptor::new("payments").with_required_fields(&["account_id", "amount", "method"]);

pub const PAYMENT_REFUNDS: ResourceDescriptor = ResourceDescriptor::new("refunds")
    .with_endpoint("payments:refunds")
    .with_required_fields(&["parent_id", "amount"]);

pub const PRODUCTS: ResourceDescriptor =
    ResourceDescriptor::new("products").with_required_fields(&["name"]);

pub const PRODUCT_STOCK: ResourceDescriptor = ResourceDescriptor::new("stock")
    .with_endpoint("products:stock")
    .with_required_fields(&["parent_id", "quantity", "message"]);

pub const PRODUCT_VARIANTS: ResourceDescriptor = ResourceDescriptor::new("variants")
    .with_endpoint("products:variants")
    .with_required_fields(&["parent_id", "name"]);

pub const PROMOTIONS: ResourceDescriptor =
    ResourceDescriptor::new("promotions").with_required_fields(&["discounts", "name"]);

pub const PROMOTION_USES: ResourceDescriptor = ResourceDescriptor::new("uses")
    .with_endpoint("promotions:uses")
    .with_required_fields(&["parent_id"]);

pub const PURCHASE_LINKS: ResourceDescriptor = ResourceDescriptor::new("purchase links")
    .with_endpoint("purchaselinks")
    .with_required_fields(&["name"]);

pub const RETURNS: ResourceDescriptor =
    ResourceDescriptor::new("returns").with_required_fields(&["items", "order_id"]);

pub const SHIPMENTS: ResourceDescriptor =
    ResourceDescriptor::new("shipments").with_required_fields(&["items", "order_id"]);

pub const SUBSCRIPTIONS: ResourceDescriptor =
    ResourceDescriptor::new("subscriptions").with_required_fields(&["account_id", "product_id"]);

pub const WEBHOOKS: ResourceDescriptor = ResourceDescriptor::new("webhooks")
    .with_endpoint(":webhooks")
    .with_required_fields(&["url", "events"]);

/// Every descriptor keyed by the client member that exposes it.
pub const ALL: &[(&str, ResourceDescriptor)] = &[
    ("accounts", ACCOUNTS),
    ("addresses", ACCOUNT_ADDRESSES),
    ("cards", ACCOUNT_CARDS),
    ("credits", ACCOUNT_CREDITS),
    ("attributes", ATTRIBUTES),
    ("carts", CARTS),
    ("categories", CATEGORIES),
    ("coupons", COUPONS),
    ("coupon_generations", COUPON_GENERATIONS),
    ("coupon_uses", COUPON_USES),
    ("events", EVENTS),
    ("giftcards", GIFTCARDS),
    ("debits", GIFTCARD_DEBITS),
    ("invoices", INVOICES),
    ("orders", ORDERS),
    ("payments", PAYMENTS),
    ("refunds", PAYMENT_REFUNDS),
    ("products", PRODUCTS),
    ("stock", PRODUCT_STOCK),
    ("variants", PRODUCT_VARIANTS),
    ("promotions", PROMOTIONS),
    ("promotion_uses", PROMOTION_USES),
    ("purchase_links", PURCHASE_LINKS),
    ("returns", RETURNS),
    ("shipments", SHIPMENTS),
    ("subscriptions", SUBSCRIPTIONS),
    ("webhooks", WEBHOOKS),
];

/// Looks up a descriptor by client member name.
#[must_use]
pub fn lookup(member: &str) -> Option<ResourceDescriptor> {
    ALL.iter()
        .find(|(name, _)| *name == member)
        .map(|(_, descriptor)| *descriptor)
}
