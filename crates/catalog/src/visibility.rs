//! Temporal visibility rules for catalog products.
//!
//! A product is shown to shoppers when it is explicitly active, or when the
//! shop has time checks enabled and the current instant falls inside the
//! product's activation window.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shopkit_core::ValueObject;

/// Temporary-activation window of a product.
///
/// Either bound may be absent. An absent lower bound is open (always
/// satisfied); an absent upper bound makes the window never active, so an
/// expired or half-written window does not keep a product on display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivationWindow {
    /// Inclusive lower bound; `None` means not set.
    pub from: Option<DateTime<Utc>>,
    /// Inclusive upper bound; `None` means not set.
    pub to: Option<DateTime<Utc>>,
}

impl ActivationWindow {
    pub fn new(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Self {
        Self { from, to }
    }

    /// True iff at least one bound is set. A window with no bounds is
    /// indistinguishable from "not a temporary product".
    pub fn has_time_range(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Whether `now` falls inside the window.
    ///
    /// Inverted ranges (`from > to`) contain nothing.
    pub fn contains(&self, now: DateTime<Utc>) -> bool {
        match (self.from, self.to) {
            (_, None) => false,
            (None, Some(to)) => now <= to,
            (Some(from), Some(to)) => from <= now && now <= to,
        }
    }
}

impl ValueObject for ActivationWindow {}

/// Decide whether a product is currently visible to shoppers.
///
/// Explicit activation always wins. With time checks disabled, only the
/// explicit flag matters; otherwise the activation window decides.
pub fn is_visible(
    active: bool,
    window: &ActivationWindow,
    use_time_check: bool,
    now: DateTime<Utc>,
) -> bool {
    if active {
        return true;
    }
    if !use_time_check {
        return false;
    }
    window.contains(now)
}
