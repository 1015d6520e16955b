//! Concrete Swell backend resources.
//!
//! Almost every resource is a plain [`Resource`](crate::rest::Resource)
//! built from an entry of [`descriptors`]. Only a few need their own type:
//!
//! - parents that expose sub-resources ([`Accounts`], [`Products`],
//!   [`Coupons`], [`Promotions`], [`Giftcards`], [`Payments`])
//! - resources with bespoke operations ([`Orders`], [`Webhooks`])
//!
//! Each of these dereferences to its own `Resource`, so the standard
//! operations are available on all of them.
//!
//! # Sub-resources
//!
//! Sub-resource endpoints are scoped as `parent:child`, and their create
//! payloads name the parent through `parent_id`:
//!
//! ```rust,ignore
//! use serde_json::json;
//!
//! client
//!     .accounts
//!     .cards
//!     .create(&json!({"parent_id": account_id, "token": "tok_123"}))
//!     .await?;
//! ```
//!
//! The same sub-resource is also reachable through a flat alias on the
//! client (`client.cards`); both send identical requests.

mod accounts;
mod coupons;
pub mod descriptors;
mod giftcards;
mod orders;
mod payments;
mod products;
mod promotions;
mod webhooks;

pub use accounts::Accounts;
pub use coupons::Coupons;
pub use giftcards::Giftcards;
pub use orders::Orders;
pub use payments::Payments;
pub use products::Products;
pub use promotions::Promotions;
pub use webhooks::{Webhooks, WEBHOOK_EVENTS_ENDPOINT};
