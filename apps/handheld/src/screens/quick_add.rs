//! # Quick-Add Screen
//!
//! Bulk catalog seeding: pick categories, load the backend's pre-built
//! suggestions, then batch-save them into the inventory.
//!
//! ## Screen Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Quick-Add Flow                                    │
//! │                                                                         │
//! │  toggle categories (multi-select, transient)                            │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  load ── no selection? ──► notice, NO call                              │
//! │        └─► GET pre-built?categories=a,b ──► suggestions (not persisted) │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  save ── nothing loaded? ──► notice, NO call                            │
//! │        └─► POST quick-save ──► receipt message, clear list, nav back   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tracing::debug;

use karyana_api::InventoryApi;
use karyana_core::catalog::CATALOG_CATEGORIES;
use karyana_core::Product;

use crate::nav::NavStack;
use crate::notice::Notice;

/// Controller for the quick-add screen.
pub struct QuickAddScreen {
    inventory: Arc<dyn InventoryApi>,
    selected: Vec<String>,
    products: Vec<Product>,
    loading: bool,
    notice: Option<Notice>,
}

impl QuickAddScreen {
    pub fn new(inventory: Arc<dyn InventoryApi>) -> Self {
        QuickAddScreen {
            inventory,
            selected: Vec::new(),
            products: Vec::new(),
            loading: false,
            notice: None,
        }
    }

    /// The category labels offered for selection.
    pub fn categories(&self) -> &'static [&'static str] {
        &CATALOG_CATEGORIES
    }

    /// Re-entry hook. The selection is transient: coming back starts a
    /// fresh quick-add session.
    pub fn reload(&mut self) {
        self.selected.clear();
        self.products.clear();
        self.notice = None;
        self.loading = false;
    }

    // -------------------------------------------------------------------------
    // Category selection
    // -------------------------------------------------------------------------

    pub fn toggle_category(&mut self, label: &str) {
        if let Some(index) = self.selected.iter().position(|c| c == label) {
            self.selected.remove(index);
        } else {
            self.selected.push(label.to_string());
        }
    }

    pub fn is_selected(&self, label: &str) -> bool {
        self.selected.iter().any(|c| c == label)
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    // -------------------------------------------------------------------------
    // Render accessors
    // -------------------------------------------------------------------------

    pub fn loaded(&self) -> &[Product] {
        &self.products
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // -------------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------------

    /// Fetches catalog suggestions for the selected categories.
    ///
    /// Requires at least one selected category; otherwise a notice is set
    /// and no call is issued. Nothing is persisted by a load.
    pub async fn load_products(&mut self) -> bool {
        if self.selected.is_empty() {
            self.notice = Some(Notice::error("Please select at least one category"));
            return false;
        }

        self.loading = true;
        self.notice = None;
        debug!(categories = ?self.selected, "Loading pre-built products");

        let result = self.inventory.list_prebuilt(&self.selected).await;
        self.loading = false;

        match result {
            Ok(products) => {
                self.products = products;
                true
            }
            Err(err) => {
                self.notice = Some(Notice::from(&err));
                false
            }
        }
    }

    /// Commits the loaded suggestions as one batch.
    ///
    /// Requires a loaded list; otherwise a notice is set and no call is
    /// issued. On success the receipt message is surfaced, the list is
    /// cleared and navigation goes back to the previous screen.
    pub async fn save_products(&mut self, nav: &mut NavStack) -> bool {
        if self.products.is_empty() {
            self.notice = Some(Notice::error(
                "Please load products before attempting to save",
            ));
            return false;
        }

        self.loading = true;
        self.notice = None;

        let result = self.inventory.save_batch(&self.products).await;
        self.loading = false;

        match result {
            Ok(receipt) => {
                self.notice = Some(Notice::success(receipt.message));
                self.products.clear();
                nav.pop();
                true
            }
            Err(err) => {
                self.notice = Some(Notice::from(&err));
                false
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
