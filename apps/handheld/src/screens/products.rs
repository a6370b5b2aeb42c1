//! # Products Screen
//!
//! The inventory management screen: full product list with low-stock
//! flagging, an edit form, and two-step deletion.
//!
//! ## Screen Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Products Screen Flow                              │
//! │                                                                         │
//! │  mount/reload ──► inventory.list() ──► Ready(list) | Failed(notice)    │
//! │                                                                         │
//! │  [low-stock banner + per-row flag: computed over the fetched list,     │
//! │   never a separate query]                                               │
//! │                                                                         │
//! │  Edit ──► begin_edit ──► form ──► submit_edit                          │
//! │                                     ├── invalid ──► notice, NO call    │
//! │                                     └── valid ──► PUT ──► refetch      │
//! │                                                                         │
//! │  Delete ──► request_delete ──► confirmation prompt                     │
//! │                  ├── cancel_delete ──► nothing sent                    │
//! │                  └── confirm_delete ──► DELETE ──► refetch             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tracing::{debug, warn};

use karyana_api::InventoryApi;
use karyana_core::validation::validate_product_form;
use karyana_core::{LowStockBanner, Product, ProductForm};

use crate::notice::Notice;
use crate::screens::ViewState;

/// Edit form state for one product.
pub struct ProductEditor {
    product_id: String,
    pub form: ProductForm,
    saving: bool,
}

impl ProductEditor {
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }
}

/// A delete waiting for the user's explicit confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: String,
    pub name: String,
}

impl PendingDelete {
    /// Text of the confirmation prompt.
    pub fn prompt(&self) -> String {
        format!(
            "Are you sure you want to delete {}? This cannot be undone.",
            self.name
        )
    }
}

/// Controller for the products screen.
pub struct ProductsScreen {
    inventory: Arc<dyn InventoryApi>,
    state: ViewState<Vec<Product>>,
    editor: Option<ProductEditor>,
    pending_delete: Option<PendingDelete>,
    /// A mutation (update/delete) in flight; the list stays rendered.
    working: bool,
    notice: Option<Notice>,
}

impl ProductsScreen {
    pub fn new(inventory: Arc<dyn InventoryApi>) -> Self {
        ProductsScreen {
            inventory,
            state: ViewState::Loading,
            editor: None,
            pending_delete: None,
            working: false,
            notice: None,
        }
    }

    pub async fn mount(&mut self) {
        self.reload().await;
    }

    /// Fetches the list. Also the re-entry hook: coming back to this
    /// screen always refetches, nothing is cached across visits.
    pub async fn reload(&mut self) {
        self.state = ViewState::Loading;
        match self.inventory.list().await {
            Ok(products) => {
                for product in products.iter().filter(|p| !p.is_editable()) {
                    // Edit/Delete have nothing to address for these rows.
                    warn!(name = %product.name, "Product row has no backend id");
                }
                debug!(count = products.len(), "Product list loaded");
                self.state = ViewState::Ready(products);
            }
            Err(err) => {
                self.state = ViewState::Failed(Notice::from(&err));
            }
        }
    }

    // -------------------------------------------------------------------------
    // Render accessors
    // -------------------------------------------------------------------------

    pub fn state(&self) -> &ViewState<Vec<Product>> {
        &self.state
    }

    /// The fetched rows; empty while loading or failed.
    pub fn products(&self) -> &[Product] {
        self.state.ready().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.state.ready(), Some(products) if products.is_empty())
    }

    /// Spinner state: initial fetch or a mutation in flight.
    pub fn is_busy(&self) -> bool {
        self.state.is_loading() || self.working
    }

    /// The restock banner, computed over the already-fetched list.
    pub fn banner(&self) -> Option<LowStockBanner> {
        LowStockBanner::for_products(self.products())
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // -------------------------------------------------------------------------
    // Edit flow
    // -------------------------------------------------------------------------

    pub fn editor(&self) -> Option<&ProductEditor> {
        self.editor.as_ref()
    }

    /// Opens the edit form pre-filled from the row.
    pub fn begin_edit(&mut self, product: &Product) {
        let Some(id) = &product.id else {
            warn!(name = %product.name, "Edit requested for a row without an id");
            self.notice = Some(Notice::error(
                "This item has not been saved to the inventory yet",
            ));
            return;
        };
        self.editor = Some(ProductEditor {
            product_id: id.clone(),
            form: ProductForm::from_product(product),
            saving: false,
        });
    }

    pub fn cancel_edit(&mut self) {
        self.editor = None;
    }

    /// Validates the form and submits the update.
    ///
    /// An invalid form sets a notice and issues NO network call. A valid
    /// one issues exactly one PUT and, on success, exactly one refetch.
    pub async fn submit_edit(&mut self) -> bool {
        let (id, form) = match &self.editor {
            Some(editor) => (editor.product_id.clone(), editor.form.clone()),
            None => return false,
        };

        let patch = match validate_product_form(&form) {
            Ok(patch) => patch,
            Err(err) => {
                self.notice = Some(Notice::from(err));
                return false;
            }
        };

        if let Some(editor) = self.editor.as_mut() {
            editor.saving = true;
        }
        self.working = true;

        let result = self.inventory.update(&id, &patch).await;
        self.working = false;

        match result {
            Ok(updated) => {
                self.editor = None;
                self.notice = Some(Notice::success(format!("{} updated", updated.name)));
                self.reload().await;
                true
            }
            Err(err) => {
                // Keep the form open so the user can correct and retry.
                if let Some(editor) = self.editor.as_mut() {
                    editor.saving = false;
                }
                self.notice = Some(Notice::from(&err));
                false
            }
        }
    }

    // -------------------------------------------------------------------------
    // Delete flow (two-step)
    // -------------------------------------------------------------------------

    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending_delete.as_ref()
    }

    /// First step: opens the confirmation prompt. Nothing is sent.
    pub fn request_delete(&mut self, product: &Product) {
        let Some(id) = &product.id else {
            warn!(name = %product.name, "Delete requested for a row without an id");
            self.notice = Some(Notice::error(
                "This item has not been saved to the inventory yet",
            ));
            return;
        };
        self.pending_delete = Some(PendingDelete {
            id: id.clone(),
            name: product.name.clone(),
        });
    }

    /// The user backed out; still nothing sent.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Second step: the explicit confirm issues exactly one DELETE, then
    /// refetches on success.
    pub async fn confirm_delete(&mut self) -> bool {
        let Some(pending) = self.pending_delete.take() else {
            return false;
        };

        self.working = true;
        let result = self.inventory.remove(&pending.id).await;
        self.working = false;

        match result {
            Ok(()) => {
                self.notice = Some(Notice::success(format!("{} deleted", pending.name)));
                self.reload().await;
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
