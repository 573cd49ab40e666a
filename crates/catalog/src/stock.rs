//! Stock status classification.

use serde::{Deserialize, Serialize};

use crate::config::ShopConfig;

/// Tri-state stock report shown on the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    InStock,
    LowStock,
}

impl StockStatus {
    /// Classify a product's stock level.
    ///
    /// Stock tracking is opt-in: with tracking disabled the storefront never
    /// reports shortages. The product-level limit overrides the shop-wide
    /// one when set; a limit of zero means "not set". The product limit is
    /// fractional while the shop limit is integral, so the comparison runs
    /// in floating point.
    pub fn classify(stock: i64, low_stock_limit: f64, config: &ShopConfig) -> Self {
        if !config.stock_tracking_enabled {
            return Self::InStock;
        }
        if stock < 0 {
            return Self::OutOfStock;
        }
        let effective_limit = if low_stock_limit > 0.0 {
            low_stock_limit
        } else {
            config.core_low_stock_limit as f64
        };
        if effective_limit > 0.0 && stock as f64 <= effective_limit {
            Self::LowStock
        } else {
            Self::InStock
        }
    }

    /// Legacy numeric code: -1 out of stock, 0 in stock, 1 low stock.
    pub fn code(self) -> i8 {
        match self {
            Self::OutOfStock => -1,
            Self::InStock => 0,
            Self::LowStock => 1,
        }
    }
}
