//! `shopkit-core` — shared foundation for the storefront domain crates.
//!
//! Pure domain primitives only: errors, identifiers, value-object marker.
//! No infrastructure concerns.

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::{ProductId, ShopId};
pub use value_object::ValueObject;
