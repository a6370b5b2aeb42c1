//! # Sales History Screen
//!
//! Read-only list of recorded sales. The backend owns the ordering; this
//! screen renders exactly what it receives, newest-handling included.

use std::sync::Arc;

use tracing::debug;

use karyana_api::SalesApi;
use karyana_core::Sale;

use crate::notice::Notice;
use crate::screens::ViewState;

/// Controller for the sales history screen.
pub struct SalesHistoryScreen {
    sales: Arc<dyn SalesApi>,
    state: ViewState<Vec<Sale>>,
}

impl SalesHistoryScreen {
    pub fn new(sales: Arc<dyn SalesApi>) -> Self {
        SalesHistoryScreen {
            sales,
            state: ViewState::Loading,
        }
    }

    pub async fn mount(&mut self) {
        self.reload().await;
    }

    /// Fetches the history. Also the re-entry hook; every visit refetches.
    pub async fn reload(&mut self) {
        self.state = ViewState::Loading;
        match self.sales.history().await {
            Ok(sales) => {
                debug!(count = sales.len(), "Sales history loaded");
                self.state = ViewState::Ready(sales);
            }
            Err(err) => {
                self.state = ViewState::Failed(Notice::from(&err));
            }
        }
    }

    pub fn state(&self) -> &ViewState<Vec<Sale>> {
        &self.state
    }

    /// The fetched sales, in the backend's order (the client never
    /// re-sorts).
    pub fn sales(&self) -> &[Sale] {
        self.state.ready().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.state.ready(), Some(sales) if sales.is_empty())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
