//! # Low-Stock Display Rules
//!
//! Pure display computations over an already-fetched product list. This is
//! NOT a query: the products screen fetches the full inventory once, then
//! derives the per-row flag and the alert banner locally.

use crate::types::Product;

/// Counts products at or below the low-stock threshold.
pub fn low_stock_count(products: &[Product]) -> usize {
    products.iter().filter(|p| p.is_low_stock()).count()
}

/// The restock alert shown above the product list.
///
/// Present only when at least one product is low on stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowStockBanner {
    /// Number of products needing restock.
    pub count: usize,
}

impl LowStockBanner {
    /// Builds the banner for a product list, if anything is low.
    pub fn for_products(products: &[Product]) -> Option<Self> {
        match low_stock_count(products) {
            0 => None,
            count => Some(LowStockBanner { count }),
        }
    }

    /// Banner text, pluralised by count.
    pub fn message(&self) -> String {
        if self.count == 1 {
            "Low stock alert: 1 item needs restocking".to_string()
        } else {
            format!("Low stock alert: {} items need restocking", self.count)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
