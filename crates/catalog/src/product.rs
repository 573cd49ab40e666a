//! Typed catalog product record.
//!
//! The persistence layer assembles one of these per evaluation from the
//! stored row; the record is transient and discarded after the check.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shopkit_core::ProductId;

use crate::config::ShopConfig;
use crate::stock::StockStatus;
use crate::visibility::{ActivationWindow, is_visible};

/// Catalog product with the fields relevant to visibility and stock checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub sku: String,
    pub title: String,
    /// Explicit always-on flag. A NULL persisted value deserializes to
    /// `false`.
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub activation: ActivationWindow,
    #[serde(default)]
    pub stock: i64,
    /// Product-level low-stock threshold; `0` means not set.
    #[serde(default)]
    pub low_stock_limit: f64,
}

impl Product {
    /// Whether the explicit flag alone keeps the product on display.
    pub fn is_always_active(&self) -> bool {
        self.active
    }

    /// Whether the product carries a temporary-activation window at all.
    pub fn has_active_time_range(&self) -> bool {
        self.activation.has_time_range()
    }

    /// Whether `now` falls inside the product's activation window.
    pub fn is_active_now(&self, now: DateTime<Utc>) -> bool {
        self.activation.contains(now)
    }

    /// Whether the product is currently shown to shoppers.
    pub fn is_visible(&self, now: DateTime<Utc>, config: &ShopConfig) -> bool {
        is_visible(self.active, &self.activation, config.use_time_check, now)
    }

    /// Stock report for the storefront.
    pub fn stock_status(&self, config: &ShopConfig) -> StockStatus {
        StockStatus::classify(self.stock, self.low_stock_limit, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn test_product() -> Product {
        Product {
            id: ProductId::new(),
            sku: "SKU-001".to_string(),
            title: "Test Product".to_string(),
            active: false,
            activation: ActivationWindow::default(),
            stock: 0,
            low_stock_limit: 0.0,
        }
    }

    #[test]
    fn temporary_product_is_visible_inside_its_window() {
        let mut product = test_product();
        product.activation =
            ActivationWindow::new(Some(now() - Days::new(1)), Some(now() + Days::new(1)));
        let config = ShopConfig {
            use_time_check: true,
            ..ShopConfig::default()
        };

        assert!(!product.is_always_active());
        assert!(product.has_active_time_range());
        assert!(product.is_active_now(now()));
        assert!(product.is_visible(now(), &config));
    }

    #[test]
    fn temporary_product_is_hidden_when_time_check_disabled() {
        let mut product = test_product();
        product.activation =
            ActivationWindow::new(Some(now() - Days::new(1)), Some(now() + Days::new(1)));

        assert!(!product.is_visible(now(), &ShopConfig::default()));
    }

    #[test]
    fn stock_status_uses_product_limit_over_shop_limit() {
        let mut product = test_product();
        product.stock = 11;
        product.low_stock_limit = 20.0;
        let config = ShopConfig {
            stock_tracking_enabled: true,
            core_low_stock_limit: 10,
            ..ShopConfig::default()
        };

        assert_eq!(product.stock_status(&config), StockStatus::LowStock);
    }

    #[test]
    fn missing_row_fields_default_to_inactive() {
        let json = format!(r#"{{"id":"{}","sku":"SKU-001","title":"Test"}}"#, ProductId::new());
        let product: Product = serde_json::from_str(&json).unwrap();

        assert!(!product.is_always_active());
        assert!(!product.has_active_time_range());
        assert_eq!(product.stock, 0);
    }
}
