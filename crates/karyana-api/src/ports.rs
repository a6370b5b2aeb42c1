//! # API Ports
//!
//! The seam between screen controllers and the HTTP transport. Screens hold
//! these as trait objects; production wiring injects the reqwest-backed
//! clients, tests inject counting fakes.
//!
//! One in-flight call per screen is the concurrency model: every method
//! borrows `&self` and is awaited to completion before the screen issues
//! the next call.

use async_trait::async_trait;

use karyana_core::{
    AuthResponse, BatchSaveReceipt, CartItem, Credentials, Product, ProductPatch, Sale,
};

use crate::error::ApiResult;

/// Register/login/logout against the auth endpoints.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Creates an account. A token in the response body establishes a
    /// session (a user is signed in right after registering).
    async fn register(&self, credentials: &Credentials) -> ApiResult<AuthResponse>;

    /// Signs in. Same session contract as [`AuthApi::register`].
    async fn login(&self, credentials: &Credentials) -> ApiResult<AuthResponse>;

    /// Clears the stored session unconditionally. Never calls the backend.
    async fn logout(&self) -> ApiResult<()>;
}

/// Product inventory operations. Every call attaches the bearer token read
/// fresh from the credential store.
#[async_trait]
pub trait InventoryApi: Send + Sync {
    /// Full product list.
    async fn list(&self) -> ApiResult<Vec<Product>>;

    /// Server-side filtered low-stock report (threshold owned by the
    /// backend).
    async fn list_low_stock(&self) -> ApiResult<Vec<Product>>;

    /// Catalog suggestions for the selected categories. Nothing is
    /// persisted by this call.
    async fn list_prebuilt(&self, categories: &[String]) -> ApiResult<Vec<Product>>;

    /// Persists a whole product array in one call; commits quick-add
    /// selections.
    async fn save_batch(&self, products: &[Product]) -> ApiResult<BatchSaveReceipt>;

    /// Partial update of one product. An unknown id is a server error
    /// surfaced to the user, never silently dropped.
    async fn update(&self, id: &str, patch: &ProductPatch) -> ApiResult<Product>;

    /// Deletes one product. Callers must have confirmed with the user
    /// first; this method trusts them.
    async fn remove(&self, id: &str) -> ApiResult<()>;
}

/// Sale recording and history.
#[async_trait]
pub trait SalesApi: Send + Sync {
    /// Records a completed sale in one atomic call. No client-side retry;
    /// a failure leaves no partial local record.
    async fn record_sale(&self, cart_items: &[CartItem], total_amount: f64) -> ApiResult<Sale>;

    /// Full sale history, in the backend's display order.
    async fn history(&self) -> ApiResult<Vec<Sale>>;
}
