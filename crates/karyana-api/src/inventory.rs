//! # Inventory Client
//!
//! CRUD calls against the product endpoint family.
//!
//! ## Endpoints
//! ```text
//! GET    /products/products            full list
//! GET    /products/products/low-stock  server-side filtered report
//! GET    /products/products/pre-built  catalog suggestions (?categories=a,b)
//! POST   /products/products/quick-save batch persist
//! PUT    /products/products/:id        partial update
//! DELETE /products/products/:id        delete (after user confirmation)
//! ```
//!
//! Every call reads the bearer token fresh from the credential store; the
//! authorization header is never cached across calls.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use karyana_core::catalog::categories_param;
use karyana_core::{BatchSaveReceipt, Product, ProductPatch};

use crate::config::ApiConfig;
use crate::credentials::CredentialStore;
use crate::error::{ApiError, ApiResult};
use crate::http::{bearer_token, read_json, read_unit};
use crate::ports::InventoryApi;

const PRODUCTS_PATH: &str = "/products/products";
const LOW_STOCK_PATH: &str = "/products/products/low-stock";
const PREBUILT_PATH: &str = "/products/products/pre-built";
const QUICK_SAVE_PATH: &str = "/products/products/quick-save";

/// Client for the product endpoint family.
pub struct InventoryClient {
    http: Client,
    config: ApiConfig,
    store: Arc<CredentialStore>,
}

impl InventoryClient {
    /// Creates the client on a shared HTTP client.
    pub fn new(http: Client, config: ApiConfig, store: Arc<CredentialStore>) -> Self {
        InventoryClient {
            http,
            config,
            store,
        }
    }

    /// Builds the client with its own HTTP client (standalone use).
    pub fn connect(config: ApiConfig, store: Arc<CredentialStore>) -> ApiResult<Self> {
        let http = config.http_client()?;
        Ok(Self::new(http, config, store))
    }

    /// GET helper for the list-shaped endpoints.
    async fn fetch_list(&self, path: &str) -> ApiResult<Vec<Product>> {
        let token = bearer_token(&self.store)?;
        let response = self
            .http
            .get(self.config.endpoint(path))
            .bearer_auth(token)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        read_json(response).await
    }
}

#[async_trait]
impl InventoryApi for InventoryClient {
    async fn list(&self) -> ApiResult<Vec<Product>> {
        debug!("Fetching product list");
        let products = self.fetch_list(PRODUCTS_PATH).await?;
        debug!(count = products.len(), "Product list fetched");
        Ok(products)
    }

    async fn list_low_stock(&self) -> ApiResult<Vec<Product>> {
        debug!("Fetching low-stock report");
        self.fetch_list(LOW_STOCK_PATH).await
    }

    async fn list_prebuilt(&self, categories: &[String]) -> ApiResult<Vec<Product>> {
        debug!(?categories, "Fetching pre-built catalog");

        let token = bearer_token(&self.store)?;
        let response = self
            .http
            .get(self.config.endpoint(PREBUILT_PATH))
            .query(&[("categories", categories_param(categories))])
            .bearer_auth(token)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let products: Vec<Product> = read_json(response).await?;
        debug!(count = products.len(), "Catalog suggestions fetched");
        Ok(products)
    }

    async fn save_batch(&self, products: &[Product]) -> ApiResult<BatchSaveReceipt> {
        let token = bearer_token(&self.store)?;
        let response = self
            .http
            .post(self.config.endpoint(QUICK_SAVE_PATH))
            .bearer_auth(token)
            .json(products)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let receipt: BatchSaveReceipt = read_json(response).await?;
        info!(count = products.len(), "Product batch saved");
        Ok(receipt)
    }

    async fn update(&self, id: &str, patch: &ProductPatch) -> ApiResult<Product> {
        let token = bearer_token(&self.store)?;
        let response = self
            .http
            .put(format!("{}/{id}", self.config.endpoint(PRODUCTS_PATH)))
            .bearer_auth(token)
            .json(patch)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let updated: Product = read_json(response).await?;
        info!(%id, name = %updated.name, "Product updated");
        Ok(updated)
    }

    async fn remove(&self, id: &str) -> ApiResult<()> {
        let token = bearer_token(&self.store)?;
        let response = self
            .http
            .delete(format!("{}/{id}", self.config.endpoint(PRODUCTS_PATH)))
            .bearer_auth(token)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        read_unit(response).await?;
        info!(%id, "Product deleted");
        Ok(())
    }
}
