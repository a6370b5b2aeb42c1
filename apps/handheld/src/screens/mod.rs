//! # Screen Controllers
//!
//! One controller per screen, all following the same lifecycle contract:
//!
//! ```text
//! mount ──► fetch ──► render(list | empty | error)
//!                        │
//!                        ▼
//!            user action ──► client call ──► refetch on success
//! ```
//!
//! Controllers hold snapshot state the rendering shell reads after each
//! awaited action; they never talk to a UI framework directly. A screen
//! issues one call at a time (methods take `&mut self` and are awaited to
//! completion), and every re-entry via back-navigation goes through
//! `reload()` because nothing is cached client-side.

mod history;
mod home;
mod login;
mod products;
mod quick_add;

pub use history::SalesHistoryScreen;
pub use home::HomeScreen;
pub use login::{AuthMode, LoginScreen};
pub use products::{PendingDelete, ProductEditor, ProductsScreen};
pub use quick_add::QuickAddScreen;

use crate::notice::Notice;

/// What a list screen currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// Fetch in flight; the shell shows a spinner.
    Loading,
    /// Fetch finished. An empty payload is the "empty" rendering.
    Ready(T),
    /// Fetch failed; the shell shows the notice and a retry affordance.
    Failed(Notice),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// The payload, when the last fetch succeeded.
    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The failure notice, when the last fetch failed.
    pub fn failure(&self) -> Option<&Notice> {
        match self {
            ViewState::Failed(notice) => Some(notice),
            _ => None,
        }
    }
}
