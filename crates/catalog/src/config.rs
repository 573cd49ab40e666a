//! Shop-wide configuration relevant to catalog evaluation.

use serde::{Deserialize, Serialize};

/// Configuration flags and thresholds supplied by the shop, passed
/// explicitly into each evaluation instead of read from ambient state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// When false, activation windows are ignored entirely and only the
    /// explicit active flag controls visibility.
    pub use_time_check: bool,
    /// When false, the storefront never reports shortages.
    pub stock_tracking_enabled: bool,
    /// Shop-wide low-stock threshold; `0` means not set. Products may
    /// override it with their own limit.
    pub core_low_stock_limit: i64,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            use_time_check: false,
            stock_tracking_enabled: false,
            core_low_stock_limit: 0,
        }
    }
}
