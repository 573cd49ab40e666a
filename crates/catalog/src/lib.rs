//! Catalog domain module: product visibility and stock evaluation.
//!
//! This crate contains the storefront's decision rules for whether a product
//! is currently shown to shoppers and how its stock level is reported,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). Callers supply field values, configuration, and a `now`
//! snapshot; every call is O(1) and side-effect free.

pub mod config;
pub mod product;
pub mod stock;
pub mod timestamp;
pub mod visibility;

pub use config::ShopConfig;
pub use product::Product;
pub use stock::StockStatus;
pub use timestamp::parse_activation_bound;
pub use visibility::{ActivationWindow, is_visible};
