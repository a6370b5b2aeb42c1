//! Hand-built fakes for the API ports, shared by the screen and gate
//! tests. Each fake counts its calls so tests can assert exactly how many
//! network round trips an interaction would have cost, and can be armed to
//! fail the next call with a chosen error.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use karyana_api::{ApiError, ApiResult, AuthApi, CredentialStore, InventoryApi, SalesApi};
use karyana_core::{
    AuthResponse, BatchSaveReceipt, CartItem, Credentials, Product, ProductPatch, Sale,
};

// =============================================================================
// Fixtures
// =============================================================================

pub(crate) fn temp_store() -> (tempfile::TempDir, Arc<CredentialStore>) {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(CredentialStore::at(dir.path().join("creds")));
    (dir, store)
}

pub(crate) fn product(id: &str, name: &str, price: f64, stock: i64) -> Product {
    Product {
        id: Some(id.to_string()),
        name: name.to_string(),
        price,
        stock,
        category: "Groceries".to_string(),
    }
}

pub(crate) fn sale(id: &str, total_amount: f64) -> Sale {
    Sale {
        id: id.to_string(),
        created_at: Utc::now(),
        total_amount,
        cart_items: vec![CartItem {
            product_id: None,
            name: "Rice".to_string(),
            quantity: 1,
            price: Some(total_amount),
        }],
    }
}

fn take_failure(slot: &Mutex<Option<ApiError>>) -> Option<ApiError> {
    slot.lock().unwrap().take()
}

// =============================================================================
// FakeAuth
// =============================================================================

/// Auth port fake. Success mirrors the real client's contract: a token in
/// the response body persists the session pair into the store.
pub(crate) struct FakeAuth {
    store: Arc<CredentialStore>,
    _dir: tempfile::TempDir,
    login_calls: AtomicUsize,
    register_calls: AtomicUsize,
    reject: Mutex<Option<String>>,
}

impl FakeAuth {
    pub fn new(store: Arc<CredentialStore>, dir: tempfile::TempDir) -> Self {
        FakeAuth {
            store,
            _dir: dir,
            login_calls: AtomicUsize::new(0),
            register_calls: AtomicUsize::new(0),
            reject: Mutex::new(None),
        }
    }

    pub fn store(&self) -> Arc<CredentialStore> {
        Arc::clone(&self.store)
    }

    pub fn login_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }

    pub fn register_calls(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }

    /// Makes every subsequent submit fail like a 401 with this message.
    pub fn reject_with(&self, message: &str) {
        *self.reject.lock().unwrap() = Some(message.to_string());
    }

    fn respond(&self, credentials: &Credentials) -> ApiResult<AuthResponse> {
        if let Some(message) = self.reject.lock().unwrap().clone() {
            return Err(ApiError::Status {
                status: 401,
                message,
            });
        }

        let body = AuthResponse {
            token: Some("fake-jwt".to_string()),
            id: Some("u1".to_string()),
            name: Some(
                credentials
                    .name
                    .clone()
                    .unwrap_or_else(|| "Asif".to_string()),
            ),
            email: Some(credentials.email.clone()),
        };
        if let Some(session) = body.session() {
            self.store.save(&session)?;
        }
        Ok(body)
    }
}

#[async_trait]
impl AuthApi for FakeAuth {
    async fn register(&self, credentials: &Credentials) -> ApiResult<AuthResponse> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        self.respond(credentials)
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<AuthResponse> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        self.respond(credentials)
    }

    async fn logout(&self) -> ApiResult<()> {
        self.store.clear()
    }
}

// =============================================================================
// FakeInventory
// =============================================================================

/// Inventory port fake over an in-memory product list.
pub(crate) struct FakeInventory {
    products: Mutex<Vec<Product>>,
    list_calls: AtomicUsize,
    prebuilt_calls: AtomicUsize,
    batch_calls: AtomicUsize,
    update_calls: AtomicUsize,
    remove_calls: AtomicUsize,
    fail_list: Mutex<Option<ApiError>>,
    fail_update: Mutex<Option<ApiError>>,
    fail_batch: Mutex<Option<ApiError>>,
}

impl FakeInventory {
    pub fn with_products(products: Vec<Product>) -> Self {
        FakeInventory {
            products: Mutex::new(products),
            list_calls: AtomicUsize::new(0),
            prebuilt_calls: AtomicUsize::new(0),
            batch_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
            remove_calls: AtomicUsize::new(0),
            fail_list: Mutex::new(None),
            fail_update: Mutex::new(None),
            fail_batch: Mutex::new(None),
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn prebuilt_calls(&self) -> usize {
        self.prebuilt_calls.load(Ordering::SeqCst)
    }

    pub fn batch_calls(&self) -> usize {
        self.batch_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn remove_calls(&self) -> usize {
        self.remove_calls.load(Ordering::SeqCst)
    }

    pub fn fail_next_list(&self, err: ApiError) {
        *self.fail_list.lock().unwrap() = Some(err);
    }

    pub fn fail_next_update(&self, err: ApiError) {
        *self.fail_update.lock().unwrap() = Some(err);
    }

    pub fn fail_next_batch(&self, err: ApiError) {
        *self.fail_batch.lock().unwrap() = Some(err);
    }

    /// Snapshot of the in-memory inventory.
    pub fn stored(&self) -> Vec<Product> {
        self.products.lock().unwrap().clone()
    }
}

#[async_trait]
impl InventoryApi for FakeInventory {
    async fn list(&self) -> ApiResult<Vec<Product>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = take_failure(&self.fail_list) {
            return Err(err);
        }
        Ok(self.products.lock().unwrap().clone())
    }

    async fn list_low_stock(&self) -> ApiResult<Vec<Product>> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.is_low_stock())
            .cloned()
            .collect())
    }

    async fn list_prebuilt(&self, categories: &[String]) -> ApiResult<Vec<Product>> {
        self.prebuilt_calls.fetch_add(1, Ordering::SeqCst);
        // Two id-less suggestions per category, like an unsaved catalog.
        Ok(categories
            .iter()
            .flat_map(|category| {
                (1..=2).map(move |i| Product {
                    id: None,
                    name: format!("{category} Item {i}"),
                    price: 100.0 * i as f64,
                    stock: 10,
                    category: category.clone(),
                })
            })
            .collect())
    }

    async fn save_batch(&self, products: &[Product]) -> ApiResult<BatchSaveReceipt> {
        self.batch_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = take_failure(&self.fail_batch) {
            return Err(err);
        }

        let mut stored = self.products.lock().unwrap();
        for product in products {
            let mut saved = product.clone();
            saved.id = Some(Uuid::new_v4().to_string());
            stored.push(saved);
        }
        Ok(BatchSaveReceipt {
            message: format!("{} products added successfully", products.len()),
        })
    }

    async fn update(&self, id: &str, patch: &ProductPatch) -> ApiResult<Product> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = take_failure(&self.fail_update) {
            return Err(err);
        }

        let mut stored = self.products.lock().unwrap();
        let product = stored
            .iter_mut()
            .find(|p| p.id.as_deref() == Some(id))
            .ok_or_else(|| ApiError::Status {
                status: 404,
                message: "Product not found".to_string(),
            })?;
        product.name = patch.name.clone();
        product.price = patch.price;
        product.stock = patch.stock;
        product.category = patch.category.clone();
        Ok(product.clone())
    }

    async fn remove(&self, id: &str) -> ApiResult<()> {
        self.remove_calls.fetch_add(1, Ordering::SeqCst);

        let mut stored = self.products.lock().unwrap();
        let before = stored.len();
        stored.retain(|p| p.id.as_deref() != Some(id));
        if stored.len() == before {
            return Err(ApiError::Status {
                status: 404,
                message: "Product not found".to_string(),
            });
        }
        Ok(())
    }
}

// =============================================================================
// FakeSales
// =============================================================================

/// Sales port fake. Recorded sales are prepended so history reads
/// newest-first, like the backend.
pub(crate) struct FakeSales {
    sales: Mutex<Vec<Sale>>,
    record_calls: AtomicUsize,
    history_calls: AtomicUsize,
    fail_history: Mutex<Option<ApiError>>,
}

impl FakeSales {
    pub fn with_sales(sales: Vec<Sale>) -> Self {
        FakeSales {
            sales: Mutex::new(sales),
            record_calls: AtomicUsize::new(0),
            history_calls: AtomicUsize::new(0),
            fail_history: Mutex::new(None),
        }
    }

    pub fn record_calls(&self) -> usize {
        self.record_calls.load(Ordering::SeqCst)
    }

    pub fn history_calls(&self) -> usize {
        self.history_calls.load(Ordering::SeqCst)
    }

    pub fn fail_next_history(&self, err: ApiError) {
        *self.fail_history.lock().unwrap() = Some(err);
    }
}

#[async_trait]
impl SalesApi for FakeSales {
    async fn record_sale(&self, cart_items: &[CartItem], total_amount: f64) -> ApiResult<Sale> {
        self.record_calls.fetch_add(1, Ordering::SeqCst);
        let sale = Sale {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            total_amount,
            cart_items: cart_items.to_vec(),
        };
        self.sales.lock().unwrap().insert(0, sale.clone());
        Ok(sale)
    }

    async fn history(&self) -> ApiResult<Vec<Sale>> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = take_failure(&self.fail_history) {
            return Err(err);
        }
        Ok(self.sales.lock().unwrap().clone())
    }
}
